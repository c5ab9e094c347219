//! Service ports: traits + data contracts.

pub mod chat;
pub mod file_system;
pub mod settings;

pub use chat::{ChatHandle, ChatProvider, ChatStatus, GenerationRequest};
pub use file_system::{EntryKind, FileSystemHandle, FileSystemProvider, FsEntry, FsError};
pub use settings::{KeybindingRule, LayoutSettings, Settings, ThemeSettings};
