//! 数据模型层

pub mod file_tree;
pub mod module_graph;
pub mod text_buffer;

pub use file_tree::{flatten_tree, FileTreeRow};
pub use module_graph::{ModuleGraph, ModuleNode, UnresolvedImport};
pub use text_buffer::{slice_to_cow, TextBuffer};
