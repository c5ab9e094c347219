use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::Quit.name(), "quit");
    assert_eq!(Command::ShowCode.name(), "showCode");
    assert_eq!(Command::Custom("myCommand".to_string()).name(), "myCommand");
}

#[test]
fn test_from_name_roundtrips_builtin_commands() {
    for cmd in [
        Command::Quit,
        Command::ShowPreview,
        Command::ShowCode,
        Command::ToggleView,
        Command::FocusNext,
        Command::FocusPrev,
        Command::FocusChat,
    ] {
        assert_eq!(Command::from_name(cmd.name()), cmd);
    }
}

#[test]
fn test_unknown_name_becomes_custom() {
    assert_eq!(
        Command::from_name("openSettings"),
        Command::Custom("openSettings".to_string())
    );
}

#[test]
fn test_is_view_command() {
    assert!(Command::ShowPreview.is_view_command());
    assert!(Command::ToggleView.is_view_command());
    assert!(!Command::FocusNext.is_view_command());
    assert!(!Command::Quit.is_view_command());
}
