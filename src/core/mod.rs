//! 核心框架模块
//!
//! 提供工作台的核心抽象：
//! - Event: 统一输入事件定义
//! - Command: 语义命令
//! - View: 可渲染、可交互的面板

pub mod command;
pub mod event;
pub mod view;

pub use command::Command;
pub use event::{InputEvent, Key};
pub use view::{EventResult, View};
