//! Agent service
//!
//! Domain operations on top of [`HttpClient`]. Each operation is a thin
//! pass-through: failures are logged and returned, never retried.

use crate::api::http_client::{HttpClient, MultipartPayload, RequestBody};
use crate::error::{ClientError, ClientResult};
use crate::state::{Agent, MessageInput, MessageOutput, NewAgent};
use std::path::PathBuf;
use tracing::{error, info};

/// Form field the manual attachment is uploaded under
pub const MANUAL_FILE_FIELD: &str = "manual_file";

/// Payload for creating an agent
#[derive(Debug, Clone, PartialEq)]
pub enum CreateAgentPayload {
    /// Plain JSON body
    Json(NewAgent),
    /// Multipart body with an optional manual file
    Multipart {
        /// Agent fields
        agent: NewAgent,
        /// Reference document to upload
        manual_file: Option<PathBuf>,
    },
}

impl CreateAgentPayload {
    /// Name of the agent being created
    pub fn agent_name(&self) -> &str {
        match self {
            CreateAgentPayload::Json(agent) => &agent.agent_name,
            CreateAgentPayload::Multipart { agent, .. } => &agent.agent_name,
        }
    }

    fn into_body(self) -> ClientResult<RequestBody> {
        match self {
            CreateAgentPayload::Json(agent) => serde_json::to_value(&agent)
                .map(RequestBody::Json)
                .map_err(|e| ClientError::Encode(e.to_string())),
            CreateAgentPayload::Multipart { agent, manual_file } => {
                let mut payload = MultipartPayload::default();
                for (name, value) in agent.form_fields() {
                    payload = payload.text(name, value);
                }
                if let Some(path) = manual_file {
                    payload = payload.file(MANUAL_FILE_FIELD, path);
                }
                Ok(RequestBody::Multipart(payload))
            }
        }
    }
}

/// Agent operations exposed by the backend
#[derive(Debug, Clone)]
pub struct AgentService {
    client: HttpClient,
}

impl AgentService {
    /// Create a service on top of an HTTP client
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Create a service for the given base URL
    pub fn from_base_url(base_url: &str) -> ClientResult<Self> {
        Ok(Self::new(HttpClient::new(base_url)?))
    }

    /// GET /agent/ - the full agent collection
    pub async fn get_agents(&self) -> ClientResult<Vec<Agent>> {
        self.client
            .get::<Vec<Agent>>(&["agent", ""])
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch agents");
                e
            })
    }

    /// GET /agent/{name} - a single agent
    ///
    /// # Errors
    /// * Returns `ClientError::AgentNotFound` on HTTP 404 or an empty/null body
    pub async fn get_agent_by_name(&self, name: &str) -> ClientResult<Agent> {
        let result = match self.client.get::<Option<Agent>>(&["agent", name]).await {
            Ok(Some(agent)) => Ok(agent),
            Ok(None) => Err(ClientError::AgentNotFound(name.to_string())),
            Err(e) if e.is_not_found() => Err(ClientError::AgentNotFound(name.to_string())),
            Err(e) => Err(e),
        };
        result.map_err(|e| {
            error!(agent = %name, error = %e, "Failed to fetch agent");
            e
        })
    }

    /// POST /agent/ - create an agent, returning the backend's record
    pub async fn create_agent(&self, payload: CreateAgentPayload) -> ClientResult<Agent> {
        let agent_name = payload.agent_name().to_string();
        let result = match payload.into_body() {
            Ok(body) => self.client.post::<Agent>(&["agent", ""], body).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(agent) => {
                info!(agent = %agent.agent_name, "Agent created");
                Ok(agent)
            }
            Err(e) => {
                error!(agent = %agent_name, error = %e, "Failed to create agent");
                Err(e)
            }
        }
    }

    /// POST /chat/{agent_name} - send one message, get one reply
    pub async fn chat_agent_by_name(
        &self,
        agent_name: &str,
        input_text: &str,
    ) -> ClientResult<MessageOutput> {
        let body = serde_json::to_value(MessageInput {
            input: input_text.to_string(),
        })
        .map(RequestBody::Json)
        .map_err(|e| ClientError::Encode(e.to_string()))?;
        self.client
            .post::<MessageOutput>(&["chat", agent_name], body)
            .await
            .map_err(|e| {
                error!(agent = %agent_name, error = %e, "Failed to chat with agent");
                e
            })
    }
}
