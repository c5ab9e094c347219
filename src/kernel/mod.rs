//! Headless workspace core (state/action/effect).

pub mod action;
pub mod effect;
pub mod props;
pub mod prompts;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use props::{Message, Project, ProjectLoadError, Role, User, WorkspaceProps};
pub use state::{PanelKind, ViewMode, WorkspaceState};
pub use store::{DispatchResult, Store};
