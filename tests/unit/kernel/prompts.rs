use super::*;

#[test]
fn prompt_names_entry_point_and_alias() {
    assert!(GENERATION_PROMPT.contains(ENTRY_POINT));
    assert!(GENERATION_PROMPT.contains("'@/'"));
    assert!(GENERATION_PROMPT.contains("Do not create any HTML files"));
    assert!(GENERATION_PROMPT.contains("not hardcoded styles"));
}
