use super::*;

#[test]
fn parse_color_accepts_names_and_hex() {
    assert_eq!(parse_color("cyan"), Some(Color::Indexed(6)));
    assert_eq!(parse_color(" Dark_Gray "), Some(Color::Indexed(8)));
    assert_eq!(parse_color("#1e90ff"), Some(Color::Rgb(0x1e, 0x90, 0xff)));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("chartreuse"), None);
    assert_eq!(parse_color(""), None);
}

#[test]
fn default_settings_match_default_theme() {
    let mut theme = UiTheme::default();
    theme.apply_settings(&ThemeSettings::default());

    let default = UiTheme::default();
    assert_eq!(theme.focus_border, default.focus_border);
    assert_eq!(theme.tab_active_fg, default.tab_active_fg);
    assert_eq!(theme.user_fg, default.user_fg);
    assert_eq!(theme.error_fg, default.error_fg);
}

#[test]
fn apply_settings_skips_invalid_values() {
    let mut theme = UiTheme::default();
    let settings = ThemeSettings {
        focus_border: Some("#ff0000".to_string()),
        accent_fg: Some("not-a-color".to_string()),
        ..ThemeSettings::default()
    };

    theme.apply_settings(&settings);

    assert_eq!(theme.focus_border, Color::Rgb(0xff, 0, 0));
    assert_eq!(theme.accent_fg, UiTheme::default().accent_fg);
    assert_eq!(theme.border(true), Color::Rgb(0xff, 0, 0));
    assert_eq!(theme.border(false), theme.inactive_border);
}
