//! uigen - 终端里的 React 组件生成工作台
//!
//! 模块结构：
//! - core: 核心框架（View, Command, Event）
//! - kernel: 状态（ViewMode、焦点）、props、服务端口与适配器
//! - models: 数据模型（TextBuffer、文件树、模块依赖图）
//! - views: 视图层（ChatPanel、PreviewPanel、FileTreePanel、CodeEditorPanel、ViewToggle）
//! - app: 应用层（Workbench）
//! - tui: 终端接入

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod tui;
pub mod views;
