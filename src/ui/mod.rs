//! UI module
//!
//! Views, layout, and reusable components.

pub mod agent_chat;
pub mod components;
pub mod create_agent;
pub mod dashboard;
pub mod layout;
pub mod not_found;

pub use agent_chat::AgentChatView;
pub use create_agent::CreateAgentForm;
pub use layout::{apply_navigation, render_app_layout, ActiveView};
