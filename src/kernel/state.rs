use std::fmt;

/// Which pane set the right-hand region shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Preview,
    Code,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Preview, ViewMode::Code];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Preview => "preview",
            ViewMode::Code => "code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Preview => "Preview",
            ViewMode::Code => "Code",
        }
    }

    pub fn other(self) -> ViewMode {
        match self {
            ViewMode::Preview => ViewMode::Code,
            ViewMode::Code => ViewMode::Preview,
        }
    }

    /// Right-pane panels mounted while this mode is active, in focus order.
    pub fn panels(self) -> &'static [PanelKind] {
        match self {
            ViewMode::Preview => &[PanelKind::Preview],
            ViewMode::Code => &[PanelKind::FileTree, PanelKind::CodeEditor],
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelKind {
    #[default]
    Chat,
    FileTree,
    CodeEditor,
    Preview,
}

impl PanelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PanelKind::Chat => "chat",
            PanelKind::FileTree => "file-tree",
            PanelKind::CodeEditor => "code-editor",
            PanelKind::Preview => "preview",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceState {
    pub mode: ViewMode,
    pub focus: PanelKind,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chat first, then the active mode's panels.
    pub fn mounted_panels(&self) -> Vec<PanelKind> {
        let mut panels = Vec::with_capacity(3);
        panels.push(PanelKind::Chat);
        panels.extend_from_slice(self.mode.panels());
        panels
    }

    pub fn is_mounted(&self, panel: PanelKind) -> bool {
        panel == PanelKind::Chat || self.mode.panels().contains(&panel)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
