//! In-memory file system rooted at `/`.
//!
//! Nodes live in a flat ordered map keyed by normalized absolute path; the root is
//! implicit and always a directory.

use crate::kernel::services::ports::{EntryKind, FileSystemProvider, FsEntry, FsError};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

const ROOT: &str = "/";
const MAX_SEED_FILE_BYTES: u64 = 1024 * 1024;

static ROOT_NODE: Node = Node::Directory;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(String),
    Directory,
}

#[derive(Debug, Clone, Default)]
pub struct VirtualFileSystem {
    nodes: BTreeMap<String, Node>,
    selected: Option<String>,
    revision: u64,
}

/// Collapses `.`, `..` and repeated separators into `/a/b` form. Relative input is
/// treated as relative to the root; climbing above the root is rejected.
pub fn normalize_path(path: &str) -> Result<String, FsError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(FsError::InvalidPath(path.to_string()));
    }

    let mut parts: Vec<&str> = Vec::new();
    for part in trimmed.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.pop().is_none() {
                    return Err(FsError::InvalidPath(path.to_string()));
                }
            }
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return Ok(ROOT.to_string());
    }
    Ok(format!("/{}", parts.join("/")))
}

fn parent_of(path: &str) -> Option<&str> {
    if path == ROOT {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some(ROOT),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}

fn name_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn is_descendant(path: &str, ancestor: &str) -> bool {
    if ancestor == ROOT {
        return path != ROOT;
    }
    path.len() > ancestor.len()
        && path.starts_with(ancestor)
        && path.as_bytes()[ancestor.len()] == b'/'
}

impl VirtualFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds from a serialized project data bag (`path -> { type, content }`).
    /// Malformed entries are skipped.
    pub fn from_project_data(data: &Value) -> Self {
        let mut fs = Self::new();
        let Some(entries) = data.as_object() else {
            if !data.is_null() {
                tracing::warn!("project data is not an object; starting with an empty file system");
            }
            return fs;
        };

        for (path, entry) in entries {
            let kind = entry.get("type").and_then(Value::as_str);
            let result = match kind {
                Some("directory") => fs.ensure_dir(path),
                Some("file") => {
                    let content = entry.get("content").and_then(Value::as_str).unwrap_or("");
                    fs.write_file(path, content)
                }
                _ => {
                    tracing::warn!(path = %path, "skipping project entry without a valid type");
                    continue;
                }
            };
            if let Err(err) = result {
                tracing::warn!(path = %path, error = %err, "skipping project entry");
            }
        }

        fs.revision = 0;
        fs
    }

    /// Seeds from a directory on disk, honoring ignore files. Non UTF-8 and oversized
    /// files are skipped.
    pub fn load_from_dir(root: &Path) -> std::io::Result<Self> {
        if !root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            ));
        }

        let mut fs = Self::new();
        let walker = ignore::WalkBuilder::new(root).require_git(false).build();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };
            let virtual_path = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            let result = if file_type.is_dir() {
                fs.ensure_dir(&virtual_path)
            } else if file_type.is_file() {
                let too_large = entry
                    .metadata()
                    .map(|m| m.len() > MAX_SEED_FILE_BYTES)
                    .unwrap_or(true);
                if too_large {
                    tracing::debug!(path = %virtual_path, "skipping large file");
                    continue;
                }
                match std::fs::read_to_string(entry.path()) {
                    Ok(content) => fs.write_file(&virtual_path, &content),
                    Err(err) => {
                        tracing::debug!(path = %virtual_path, error = %err, "skipping unreadable file");
                        continue;
                    }
                }
            } else {
                continue;
            };

            if let Err(err) = result {
                tracing::warn!(path = %virtual_path, error = %err, "skipping entry");
            }
        }

        fs.revision = 0;
        Ok(fs)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, path: &str) -> Option<&Node> {
        if path == ROOT {
            return Some(&ROOT_NODE);
        }
        self.nodes.get(path)
    }

    /// Creates missing directories along `path` (inclusive). Existing directories are fine.
    fn ensure_dir(&mut self, path: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;
        let mut missing = Vec::new();
        let mut cursor = Some(path.as_str());
        while let Some(p) = cursor {
            match self.node(p) {
                Some(Node::Directory) => break,
                Some(Node::File(_)) => return Err(FsError::NotADirectory(p.to_string())),
                None => missing.push(p.to_string()),
            }
            cursor = parent_of(p);
        }
        if !missing.is_empty() {
            for p in missing.into_iter().rev() {
                self.nodes.insert(p, Node::Directory);
            }
            self.revision += 1;
        }
        Ok(())
    }

    fn ensure_parent(&mut self, path: &str) -> Result<(), FsError> {
        match parent_of(path) {
            Some(parent) => {
                let parent = parent.to_string();
                self.ensure_dir(&parent)
            }
            None => Err(FsError::IsADirectory(path.to_string())),
        }
    }
}

impl FileSystemProvider for VirtualFileSystem {
    fn exists(&self, path: &str) -> bool {
        normalize_path(path)
            .map(|p| self.node(&p).is_some())
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &str) -> bool {
        normalize_path(path)
            .map(|p| matches!(self.node(&p), Some(Node::Directory)))
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &str) -> Result<Vec<FsEntry>, FsError> {
        let path = normalize_path(path)?;
        match self.node(&path) {
            None => return Err(FsError::NotFound(path)),
            Some(Node::File(_)) => return Err(FsError::NotADirectory(path)),
            Some(Node::Directory) => {}
        }

        let mut entries: Vec<FsEntry> = self
            .nodes
            .iter()
            .filter(|(p, _)| parent_of(p) == Some(path.as_str()))
            .map(|(p, node)| FsEntry {
                path: p.clone(),
                name: name_of(p).to_string(),
                kind: match node {
                    Node::File(_) => EntryKind::File,
                    Node::Directory => EntryKind::Directory,
                },
            })
            .collect();
        entries.sort_by(|a, b| {
            b.is_dir()
                .cmp(&a.is_dir())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> Result<&str, FsError> {
        let path = normalize_path(path)?;
        match self.node(&path) {
            Some(Node::File(content)) => Ok(content.as_str()),
            Some(Node::Directory) => Err(FsError::IsADirectory(path)),
            None => Err(FsError::NotFound(path)),
        }
    }

    fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;
        if path == ROOT {
            return Err(FsError::IsADirectory(path));
        }
        match self.nodes.get_mut(&path) {
            Some(Node::File(existing)) => {
                if existing.as_str() != content {
                    *existing = content.to_string();
                    self.revision += 1;
                }
                Ok(())
            }
            Some(Node::Directory) => Err(FsError::IsADirectory(path)),
            None => self.create_file(&path, content),
        }
    }

    fn create_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;
        if self.node(&path).is_some() {
            return Err(FsError::AlreadyExists(path));
        }
        self.ensure_parent(&path)?;
        self.nodes.insert(path, Node::File(content.to_string()));
        self.revision += 1;
        Ok(())
    }

    fn create_dir(&mut self, path: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;
        if self.node(&path).is_some() {
            return Err(FsError::AlreadyExists(path));
        }
        self.ensure_dir(&path)
    }

    fn delete(&mut self, path: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;
        if path == ROOT {
            return Err(FsError::InvalidPath(path));
        }
        if self.nodes.remove(&path).is_none() {
            return Err(FsError::NotFound(path));
        }
        self.nodes.retain(|p, _| !is_descendant(p, &path));

        if self
            .selected
            .as_deref()
            .is_some_and(|s| s == path || is_descendant(s, &path))
        {
            self.selected = None;
        }
        self.revision += 1;
        Ok(())
    }

    fn selected_file(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn select_file(&mut self, path: &str) -> Result<bool, FsError> {
        let path = normalize_path(path)?;
        match self.node(&path) {
            Some(Node::File(_)) => {}
            Some(Node::Directory) => return Err(FsError::IsADirectory(path)),
            None => return Err(FsError::NotFound(path)),
        }
        if self.selected.as_deref() == Some(path.as_str()) {
            return Ok(false);
        }
        self.selected = Some(path);
        Ok(true)
    }

    fn serialize(&self) -> Value {
        let mut out = Map::new();
        for (path, node) in &self.nodes {
            let value = match node {
                Node::File(content) => json!({
                    "type": "file",
                    "name": name_of(path),
                    "path": path,
                    "content": content,
                }),
                Node::Directory => json!({
                    "type": "directory",
                    "name": name_of(path),
                    "path": path,
                }),
            };
            out.insert(path.clone(), value);
        }
        Value::Object(out)
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/vfs.rs"]
mod tests;
