//! 命令系统：语义命令定义
//!
//! 按键只映射到 Command，具体行为由 Workbench 决定。

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,

    // ==================== 视图操作 ====================
    ShowPreview,
    ShowCode,
    ToggleView,
    FocusNext,
    FocusPrev,
    FocusChat,

    // ==================== 扩展点 ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Quit => "quit",
            Command::ShowPreview => "showPreview",
            Command::ShowCode => "showCode",
            Command::ToggleView => "toggleView",
            Command::FocusNext => "focusNext",
            Command::FocusPrev => "focusPrev",
            Command::FocusChat => "focusChat",
            Command::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Command {
        match name {
            "quit" => Command::Quit,
            "showPreview" => Command::ShowPreview,
            "showCode" => Command::ShowCode,
            "toggleView" => Command::ToggleView,
            "focusNext" => Command::FocusNext,
            "focusPrev" => Command::FocusPrev,
            "focusChat" => Command::FocusChat,
            other => Command::Custom(other.to_string()),
        }
    }

    pub fn is_view_command(&self) -> bool {
        matches!(
            self,
            Command::ShowPreview | Command::ShowCode | Command::ToggleView
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
