use super::*;
use tempfile::tempdir;

#[test]
fn parse_keybinding_handles_modifiers() {
    assert_eq!(
        parse_keybinding("alt+1"),
        Some(Key::alt(KeyCode::Char('1')))
    );
    assert_eq!(
        parse_keybinding("Ctrl + Q"),
        Some(Key::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(parse_keybinding("f6"), Some(Key::simple(KeyCode::F(6))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+abc"), None);
}

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.layout.chat_width_percent, 35);
    assert!(settings.keybindings.is_empty());

    std::fs::write(&path, r#"{ "layout": { "chat_width_percent": 50 } }"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.layout.chat_width_percent, 50);
}

#[test]
fn invalid_settings_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[1, 2").unwrap();

    assert!(load_settings_from(&path).is_none());
}

#[test]
fn chat_width_is_clamped() {
    let settings: Settings =
        serde_json::from_str(r#"{ "layout": { "chat_width_percent": 99 } }"#).unwrap();
    assert_eq!(settings.layout.chat_width_percent(), 80);

    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.layout.chat_width_percent(), 35);
}
