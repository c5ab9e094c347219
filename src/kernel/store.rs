use super::{Action, Effect, PanelKind, ViewMode, WorkspaceState};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }
}

/// Single writer for [`WorkspaceState`].
pub struct Store {
    state: WorkspaceState,
}

impl Store {
    pub fn new(state: WorkspaceState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetMode(mode) => self.set_mode(mode),
            Action::ToggleMode => self.set_mode(self.state.mode.other()),
            Action::SetFocus(panel) => {
                if !self.state.is_mounted(panel) || self.state.focus == panel {
                    return DispatchResult::unchanged();
                }
                self.state.focus = panel;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::FocusNext => self.cycle_focus(1),
            Action::FocusPrev => self.cycle_focus(-1),
        }
    }

    fn set_mode(&mut self, mode: ViewMode) -> DispatchResult {
        if self.state.mode == mode {
            return DispatchResult::unchanged();
        }

        self.state.mode = mode;
        // Focus cannot stay on a panel that is about to be unmounted.
        if !self.state.is_mounted(self.state.focus) {
            self.state.focus = PanelKind::Chat;
        }

        DispatchResult {
            effects: vec![Effect::MountPane(mode)],
            state_changed: true,
        }
    }

    fn cycle_focus(&mut self, delta: isize) -> DispatchResult {
        let panels = self.state.mounted_panels();
        let len = panels.len() as isize;
        let current = panels
            .iter()
            .position(|p| *p == self.state.focus)
            .unwrap_or(0) as isize;
        let next = panels[(current + delta).rem_euclid(len) as usize];
        if next == self.state.focus {
            return DispatchResult::unchanged();
        }
        self.state.focus = next;
        DispatchResult {
            effects: Vec::new(),
            state_changed: true,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(WorkspaceState::new())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
