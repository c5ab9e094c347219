//! Flattened view of the virtual file system for list rendering.

use crate::kernel::services::ports::{EntryKind, FileSystemProvider};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub path: String,
    pub name: String,
    pub depth: usize,
    pub kind: EntryKind,
    pub expanded: bool,
}

impl FileTreeRow {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Depth-first rows below `/`. Directories are expanded unless listed in `collapsed`.
pub fn flatten_tree(fs: &dyn FileSystemProvider, collapsed: &FxHashSet<String>) -> Vec<FileTreeRow> {
    let mut rows = Vec::new();
    push_children(fs, "/", 0, collapsed, &mut rows);
    rows
}

fn push_children(
    fs: &dyn FileSystemProvider,
    dir: &str,
    depth: usize,
    collapsed: &FxHashSet<String>,
    rows: &mut Vec<FileTreeRow>,
) {
    let Ok(entries) = fs.list_dir(dir) else {
        return;
    };
    for entry in entries {
        let expanded = entry.is_dir() && !collapsed.contains(&entry.path);
        rows.push(FileTreeRow {
            path: entry.path.clone(),
            name: entry.name,
            depth,
            kind: entry.kind,
            expanded,
        });
        if expanded {
            push_children(fs, &entry.path, depth + 1, collapsed, rows);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
