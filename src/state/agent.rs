//! Agent data model
//!
//! Mirrors the records exchanged with the agent backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Agents are keyed by name; there is no separate numeric id
pub type AgentName = String;

/// Agent status enumeration
/// Lifecycle state reported by the backend; no transitions are enforced here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentStatus {
    /// Agent record exists but has not been provisioned
    #[default]
    Created,
    /// Agent is being provisioned
    Creating,
    /// Agent is ready to chat
    Active,
    /// Agent is disabled
    Inactive,
}

impl AgentStatus {
    /// Every status, in selector order
    pub const ALL: [AgentStatus; 4] = [
        AgentStatus::Created,
        AgentStatus::Creating,
        AgentStatus::Active,
        AgentStatus::Inactive,
    ];

    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Created => "CREATED",
            AgentStatus::Creating => "CREATING",
            AgentStatus::Active => "ACTIVE",
            AgentStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agent record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique human-readable name, also the routing key
    pub agent_name: AgentName,
    /// Game or domain the agent is bound to
    pub game_name: String,
    /// Free-text behavior guidance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_hints: Option<String>,
    /// Current lifecycle status
    pub status: AgentStatus,
    /// Associated knowledge collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

impl Agent {
    /// Create an agent with only the required fields set
    pub fn new(agent_name: impl Into<String>, game_name: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            game_name: game_name.into(),
            temperature_hints: None,
            status: AgentStatus::default(),
            collection_name: None,
        }
    }

    /// Hints to display, if any non-blank text is present
    pub fn display_hints(&self) -> Option<&str> {
        non_blank(self.temperature_hints.as_deref())
    }

    /// Collection to display, if any non-blank name is present
    pub fn display_collection(&self) -> Option<&str> {
        non_blank(self.collection_name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fields submitted when creating an agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAgent {
    /// Name for the new agent
    pub agent_name: AgentName,
    /// Game the agent is bound to
    pub game_name: String,
    /// Optional behavior guidance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_hints: Option<String>,
    /// Initial status
    pub status: AgentStatus,
    /// Optional knowledge collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

impl NewAgent {
    /// Text fields as sent in a multipart form; missing optionals go out as empty strings
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("agent_name", self.agent_name.clone()),
            ("game_name", self.game_name.clone()),
            (
                "temperature_hints",
                self.temperature_hints.clone().unwrap_or_default(),
            ),
            ("status", self.status.as_str().to_string()),
            (
                "collection_name",
                self.collection_name.clone().unwrap_or_default(),
            ),
        ]
    }
}

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MessageInput {
    /// User text
    pub input: String,
}

/// Backend response to a chat call
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageOutput {
    /// Agent reply text
    pub message: String,
    /// Name of the agent that answered
    pub agent: AgentName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let agent: Agent = serde_json::from_str(
            r#"{
                "agent_name": "SuperBot",
                "game_name": "Chess Master 3000",
                "temperature_hints": "Aggressive openings",
                "status": "ACTIVE",
                "collection_name": "chess_strategies"
            }"#,
        )
        .unwrap();
        assert_eq!(agent.agent_name, "SuperBot");
        assert_eq!(agent.status, AgentStatus::Active);
        assert_eq!(agent.display_collection(), Some("chess_strategies"));
    }

    #[test]
    fn test_deserialize_without_optionals() {
        let agent: Agent =
            serde_json::from_str(r#"{"agent_name":"HelperAI","game_name":"Puzzle Solver","status":"CREATING"}"#)
                .unwrap();
        assert_eq!(agent.status, AgentStatus::Creating);
        assert!(agent.temperature_hints.is_none());
        assert!(agent.display_hints().is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Agent, _> =
            serde_json::from_str(r#"{"agent_name":"a","game_name":"g","status":"ZOMBIE"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_optionals_are_not_displayed() {
        let mut agent = Agent::new("a", "g");
        agent.temperature_hints = Some("   ".into());
        agent.collection_name = Some(String::new());
        assert!(agent.display_hints().is_none());
        assert!(agent.display_collection().is_none());
    }

    #[test]
    fn test_new_agent_json_skips_missing_optionals() {
        let new_agent = NewAgent {
            agent_name: "Bot".into(),
            game_name: "Go".into(),
            temperature_hints: None,
            status: AgentStatus::Created,
            collection_name: Some("go_books".into()),
        };
        let value = serde_json::to_value(&new_agent).unwrap();
        assert_eq!(value["status"], "CREATED");
        assert_eq!(value["collection_name"], "go_books");
        assert!(value.get("temperature_hints").is_none());
    }

    #[test]
    fn test_form_fields_include_every_field() {
        let new_agent = NewAgent {
            agent_name: "Bot".into(),
            game_name: "Go".into(),
            temperature_hints: None,
            status: AgentStatus::Inactive,
            collection_name: None,
        };
        let fields = new_agent.form_fields();
        let names: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            ["agent_name", "game_name", "temperature_hints", "status", "collection_name"]
        );
        assert_eq!(fields[2].1, "");
        assert_eq!(fields[3].1, "INACTIVE");
    }
}
