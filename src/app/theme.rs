//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub header_fg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub user_fg: Color,
    pub assistant_fg: Color,
    pub selection_bg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(6),     // Cyan
            inactive_border: Color::Indexed(8),  // DarkGray
            accent_fg: Color::Indexed(3),        // Yellow
            muted_fg: Color::Indexed(8),         // DarkGray
            error_fg: Color::Indexed(9),         // LightRed
            header_fg: Color::Indexed(6),        // Cyan
            tab_active_bg: Color::Indexed(8),    // DarkGray
            tab_active_fg: Color::Indexed(15),   // White
            tab_inactive_fg: Color::Indexed(8),  // DarkGray
            user_fg: Color::Indexed(12),         // LightBlue
            assistant_fg: Color::Indexed(10),    // LightGreen
            selection_bg: Color::Indexed(8),     // DarkGray
        }
    }
}

impl UiTheme {
    /// Unknown or unparsable color names keep the current value.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        apply(&mut self.focus_border, &settings.focus_border);
        apply(&mut self.inactive_border, &settings.inactive_border);
        apply(&mut self.accent_fg, &settings.accent_fg);
        apply(&mut self.muted_fg, &settings.muted_fg);
        apply(&mut self.error_fg, &settings.error_fg);
        apply(&mut self.header_fg, &settings.header_fg);
        apply(&mut self.tab_active_bg, &settings.tab_active_bg);
        apply(&mut self.tab_active_fg, &settings.tab_active_fg);
        apply(&mut self.tab_inactive_fg, &settings.tab_inactive_fg);
        apply(&mut self.user_fg, &settings.user_fg);
        apply(&mut self.assistant_fg, &settings.assistant_fg);
        apply(&mut self.selection_bg, &settings.selection_bg);
    }

    pub fn border(&self, focused: bool) -> Color {
        if focused {
            self.focus_border
        } else {
            self.inactive_border
        }
    }
}

fn apply(slot: &mut Color, value: &Option<String>) {
    if let Some(c) = value.as_deref().and_then(parse_color) {
        *slot = c;
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
