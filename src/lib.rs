//! Agent Dashboard Library
//!
//! Native client for an agent backend: list agents, create them (optionally
//! uploading a reference document), and chat with them.
//! The window bootstrap is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
/// Application state management
///
/// Domain model, the shared agent store, and per-view state containers.
pub mod state;
pub mod ui;

pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use router::Route;
