//! Backend API access
//!
//! `http_client` knows about URLs and content types; `agent_service` knows
//! about agents and chat.

pub mod agent_service;
pub mod http_client;

pub use agent_service::{AgentService, CreateAgentPayload, MANUAL_FILE_FIELD};
pub use http_client::{FilePart, HttpClient, MultipartPayload, RequestBody};
