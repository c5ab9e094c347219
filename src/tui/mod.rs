//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the workbench state can be driven without a tty.

pub mod terminal_guard;

pub use terminal_guard::{
    install_termination_signals, CrosstermTerminalOps, TerminalGuard, TerminalOps,
    TerminalRestorer, TerminationSignal,
};
