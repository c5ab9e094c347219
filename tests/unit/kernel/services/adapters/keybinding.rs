use super::*;

fn rule(key: &str, command: &str) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
    }
}

#[test]
fn defaults_cover_view_switching() {
    let service = KeybindingService::new();

    assert_eq!(
        service.resolve(&Key::alt(KeyCode::Char('1'))),
        Some(&Command::ShowPreview)
    );
    assert_eq!(
        service.resolve(&Key::alt(KeyCode::Char('2'))),
        Some(&Command::ShowCode)
    );
    assert_eq!(
        service.resolve(&Key::ctrl(KeyCode::Char('q'))),
        Some(&Command::Quit)
    );
    assert_eq!(service.resolve(&Key::simple(KeyCode::Char('q'))), None);
}

#[test]
fn apply_rules_rebinds_and_unbinds() {
    let mut service = KeybindingService::new();

    service.apply_rules(&[
        rule("f5", "toggleView"),
        rule("ctrl+t", ""),
        rule("not a key", "quit"),
    ]);

    assert_eq!(
        service.resolve(&Key::simple(KeyCode::F(5))),
        Some(&Command::ToggleView)
    );
    assert_eq!(service.resolve(&Key::ctrl(KeyCode::Char('t'))), None);
}
