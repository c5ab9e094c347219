//! Identity props handed to the workbench by its caller.
//!
//! The workbench never interprets these; it forwards them to the collaborators that
//! seed themselves from them (chat history, file data).

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    /// Any role this crate does not render specially (`tool`, `data`, ...).
    #[serde(other)]
    Other,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "you",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Serialized virtual file system (`path -> node`).
    #[serde(default)]
    pub data: serde_json::Value,
    /// Kept as given: callers send ISO-8601 strings or epoch millis.
    #[serde(default)]
    pub created_at: serde_json::Value,
    #[serde(default)]
    pub updated_at: serde_json::Value,
}

impl Project {
    pub fn load(path: &Path) -> Result<Self, ProjectLoadError> {
        let text = std::fs::read_to_string(path)?;
        let project = serde_json::from_str(&text)?;
        Ok(project)
    }
}

#[derive(Debug)]
pub enum ProjectLoadError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ProjectLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectLoadError::Io(e) => write!(f, "IO error: {}", e),
            ProjectLoadError::Parse(e) => write!(f, "invalid project file: {}", e),
        }
    }
}

impl std::error::Error for ProjectLoadError {}

impl From<io::Error> for ProjectLoadError {
    fn from(e: io::Error) -> Self {
        ProjectLoadError::Io(e)
    }
}

impl From<serde_json::Error> for ProjectLoadError {
    fn from(e: serde_json::Error) -> Self {
        ProjectLoadError::Parse(e)
    }
}

impl From<ProjectLoadError> for io::Error {
    fn from(e: ProjectLoadError) -> Self {
        match e {
            ProjectLoadError::Io(e) => e,
            ProjectLoadError::Parse(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceProps {
    pub user: Option<User>,
    pub project: Option<Project>,
}

impl WorkspaceProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/props.rs"]
mod tests;
