//! 文件系统端口：面板通过显式注入的句柄访问文件状态。

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    InvalidPath(String),
    NotFound(String),
    AlreadyExists(String),
    NotADirectory(String),
    IsADirectory(String),
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            FsError::NotFound(p) => write!(f, "Not found: {}", p),
            FsError::AlreadyExists(p) => write!(f, "Already exists: {}", p),
            FsError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            FsError::IsADirectory(p) => write!(f, "Is a directory: {}", p),
        }
    }
}

impl std::error::Error for FsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: String,
    pub name: String,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Hierarchical file state shared by the file tree, the code editor, the preview
/// and the chat session. Paths are absolute, `/`-separated and rooted at `/`.
pub trait FileSystemProvider {
    fn exists(&self, path: &str) -> bool;

    fn is_dir(&self, path: &str) -> bool;

    /// Directories first, then files; each group sorted by name.
    fn list_dir(&self, path: &str) -> Result<Vec<FsEntry>, FsError>;

    fn read_file(&self, path: &str) -> Result<&str, FsError>;

    /// Replaces the file content, creating the file (and parents) when missing.
    fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError>;

    fn create_file(&mut self, path: &str, content: &str) -> Result<(), FsError>;

    fn create_dir(&mut self, path: &str) -> Result<(), FsError>;

    /// Removes the node and everything below it.
    fn delete(&mut self, path: &str) -> Result<(), FsError>;

    fn selected_file(&self) -> Option<&str>;

    /// Returns whether the selection changed.
    fn select_file(&mut self, path: &str) -> Result<bool, FsError>;

    fn serialize(&self) -> serde_json::Value;

    /// Bumped on every content or structure mutation.
    fn revision(&self) -> u64;
}

pub type FileSystemHandle = Rc<RefCell<dyn FileSystemProvider>>;
