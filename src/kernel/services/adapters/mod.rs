//! Service adapters: concrete implementations of the ports plus OS specific IO.

pub mod chat;
pub mod dirs;
pub mod keybinding;
pub mod settings;
pub mod vfs;

pub use chat::ChatSession;
pub use dirs::{ensure_log_dir, get_cache_dir, get_log_dir};
pub use keybinding::KeybindingService;
pub use settings::{ensure_settings_file, get_settings_path, load_settings, parse_keybinding};
pub use vfs::{normalize_path, VirtualFileSystem};
