//! State management module
//!
//! Domain model, the shared agent store, and per-view state containers.

pub mod agent;
pub mod agent_resource;
pub mod agents_store;
pub mod app_state;
pub mod chat;
pub mod inbox;

pub use agent::{Agent, AgentName, AgentStatus, MessageInput, MessageOutput, NewAgent};
pub use agent_resource::AgentResource;
pub use agents_store::{AgentsEvent, AgentsStore, CreateOutcome, CreateTicket};
pub use app_state::{AppState, UiState};
pub use chat::{ChatMessage, ChatSession, Sender};
pub use inbox::Inbox;
