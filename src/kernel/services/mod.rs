//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the panels depend on (traits + data types).
//! - `adapters`: concrete implementations (in-memory file system, chat session, settings IO).

pub mod adapters;
pub mod ports;
