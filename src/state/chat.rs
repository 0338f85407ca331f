//! Chat session state
//!
//! Session-local transcript for one agent; nothing here is persisted.

use crate::error::ClientResult;
use crate::state::agent::AgentName;
use crate::state::agents_store::AgentsStore;
use crate::state::inbox::Inbox;
use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Who wrote a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The person using the dashboard
    User,
    /// The agent answering
    Agent,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Author of the entry
    pub sender: Sender,
    /// Message text
    pub text: String,
}

impl ChatMessage {
    /// Entry written by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// Entry written by the agent
    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Agent,
            text: text.into(),
        }
    }
}

/// Transcript plus the in-flight chat calls for one agent
#[derive(Debug)]
pub struct ChatSession {
    agent_name: AgentName,
    inbox: Inbox<ClientResult<String>>,
    transcript: Vec<ChatMessage>,
    reply_delay: Duration,
    error: Option<String>,
}

impl ChatSession {
    /// Start an empty session with `agent_name`
    pub fn new(agent_name: impl Into<AgentName>, runtime: Handle, reply_delay: Duration) -> Self {
        Self {
            agent_name: agent_name.into(),
            inbox: Inbox::new(runtime),
            transcript: Vec::new(),
            reply_delay,
            error: None,
        }
    }

    /// Agent this session talks to
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// Entries so far, oldest first
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Message from the last failed send, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a reply is still outstanding
    pub fn awaiting_reply(&self) -> bool {
        self.inbox.in_flight() > 0
    }

    /// Send a message
    ///
    /// The user entry is appended right away. The reply is appended after the
    /// configured delay once it arrives. Blank input is ignored and returns false.
    pub fn send(&mut self, store: &AgentsStore, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let reply = store.get_agent_response(&self.agent_name, text);
        self.send_with(text, reply);
        true
    }

    fn send_with<F>(&mut self, text: &str, reply: F)
    where
        F: Future<Output = ClientResult<String>> + Send + 'static,
    {
        self.transcript.push(ChatMessage::user(text));
        self.error = None;

        let delay = self.reply_delay;
        debug!(agent = %self.agent_name, "Sending chat message");
        self.inbox.spawn(async move {
            let reply = reply.await;
            if reply.is_ok() && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            reply
        });
    }

    /// Apply arrived replies; call once per frame
    pub fn poll(&mut self) {
        while let Some(result) = self.inbox.try_next() {
            self.apply(result);
        }
    }

    /// Wait for the next reply and apply it
    pub async fn settle(&mut self) -> bool {
        match self.inbox.next().await {
            Some(result) => {
                self.apply(result);
                true
            }
            None => false,
        }
    }

    /// Apply one chat result
    pub fn apply(&mut self, result: ClientResult<String>) {
        match result {
            Ok(reply) => self.transcript.push(ChatMessage::agent(reply)),
            Err(e) => {
                warn!(agent = %self.agent_name, error = %e, "Chat reply failed");
                self.error = Some(format!(
                    "Failed to get a response from {}",
                    self.agent_name
                ));
            }
        }
    }
}
