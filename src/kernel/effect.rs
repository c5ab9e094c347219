use crate::kernel::state::ViewMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Drop the current right pane and build the panel set for this mode.
    MountPane(ViewMode),
}
