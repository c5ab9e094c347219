//! 视图层模块
//!
//! 工作台的各个面板：
//! - ChatPanel: 对话面板，始终挂载
//! - PreviewPanel: 预览面板
//! - FileTreePanel / CodeEditorPanel: 代码模式下的文件树和编辑器
//! - ViewToggle: Preview / Code 切换标签

pub mod chat;
pub mod code_editor;
pub mod file_tree;
pub mod preview;
pub mod view_toggle;

pub use chat::ChatPanel;
pub use code_editor::CodeEditorPanel;
pub use file_tree::FileTreePanel;
pub use preview::PreviewPanel;
pub use view_toggle::{find_tab, select, tabs, ModeSink, TabState, ToggleTab, ViewToggle};

use ratatui::layout::Rect;

pub(crate) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
