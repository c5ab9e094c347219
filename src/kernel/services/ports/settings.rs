use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_active_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_active_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_inactive_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_bg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("cyan".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            accent_fg: Some("yellow".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            error_fg: Some("light_red".to_string()),
            header_fg: Some("cyan".to_string()),
            tab_active_bg: Some("dark_gray".to_string()),
            tab_active_fg: Some("white".to_string()),
            tab_inactive_fg: Some("dark_gray".to_string()),
            user_fg: Some("light_blue".to_string()),
            assistant_fg: Some("light_green".to_string()),
            selection_bg: Some("dark_gray".to_string()),
        }
    }
}

pub const DEFAULT_CHAT_WIDTH_PERCENT: u16 = 35;
pub const MIN_CHAT_WIDTH_PERCENT: u16 = 20;
pub const MAX_CHAT_WIDTH_PERCENT: u16 = 80;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    #[serde(default = "default_chat_width_percent")]
    pub chat_width_percent: u16,
}

impl LayoutSettings {
    pub fn chat_width_percent(&self) -> u16 {
        self.chat_width_percent
            .clamp(MIN_CHAT_WIDTH_PERCENT, MAX_CHAT_WIDTH_PERCENT)
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            chat_width_percent: DEFAULT_CHAT_WIDTH_PERCENT,
        }
    }
}

fn default_chat_width_percent() -> u16 {
    DEFAULT_CHAT_WIDTH_PERCENT
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
