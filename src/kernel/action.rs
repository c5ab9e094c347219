use crate::kernel::state::{PanelKind, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetMode(ViewMode),
    ToggleMode,
    SetFocus(PanelKind),
    FocusNext,
    FocusPrev,
}
