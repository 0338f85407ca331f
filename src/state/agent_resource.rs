//! Single agent resource
//!
//! Resolves one agent by name for the chat view.

use crate::api::AgentService;
use crate::error::ClientResult;
use crate::state::agent::Agent;
use crate::state::inbox::Inbox;
use tokio::runtime::Handle;
use tracing::error;

/// Shown when no agent name was supplied
pub const MISSING_NAME_ERROR: &str = "Agent name not provided";
/// Shown when the lookup fails or finds nothing
pub const LOAD_AGENT_ERROR: &str = "Failed to load agent";

/// One agent looked up by name, with loading/error status
#[derive(Debug)]
pub struct AgentResource {
    service: AgentService,
    inbox: Inbox<(String, ClientResult<Agent>)>,
    name: Option<String>,
    agent: Option<Agent>,
    loading: bool,
    error: Option<String>,
}

impl AgentResource {
    /// Create the resource and start resolving `name`
    ///
    /// Without a name no request is made and the error is set immediately.
    pub fn new(service: AgentService, runtime: Handle, name: Option<String>) -> Self {
        let mut resource = Self {
            service,
            inbox: Inbox::new(runtime),
            name: None,
            agent: None,
            loading: false,
            error: None,
        };
        resource.load(name);
        resource
    }

    /// Switch to another name, re-fetching if it changed
    pub fn set_name(&mut self, name: Option<String>) {
        if name != self.name {
            self.agent = None;
            self.load(name);
        }
    }

    fn load(&mut self, name: Option<String>) {
        self.name = name.filter(|n| !n.is_empty());
        let Some(name) = self.name.clone() else {
            self.error = Some(MISSING_NAME_ERROR.to_string());
            self.loading = false;
            return;
        };

        self.loading = true;
        let service = self.service.clone();
        self.inbox.spawn(async move {
            let result = service.get_agent_by_name(&name).await;
            (name, result)
        });
    }

    /// Name being resolved
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The resolved agent, once loaded
    pub fn agent(&self) -> Option<&Agent> {
        self.agent.as_ref()
    }

    /// Whether a lookup is in flight
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed lookup, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply completed lookups; call once per frame
    pub fn poll(&mut self) {
        while let Some((requested, result)) = self.inbox.try_next() {
            self.apply(&requested, result);
        }
    }

    /// Wait for the in-flight lookup and apply it
    pub async fn settle(&mut self) -> bool {
        match self.inbox.next().await {
            Some((requested, result)) => {
                self.apply(&requested, result);
                true
            }
            None => false,
        }
    }

    /// Apply one lookup result for `requested`
    pub fn apply(&mut self, requested: &str, result: ClientResult<Agent>) {
        self.loading = self.inbox.in_flight() > 0;
        // a late answer for a previous name is ignored
        if self.name.as_deref() != Some(requested) {
            return;
        }
        match result {
            Ok(agent) => {
                self.agent = Some(agent);
                self.error = None;
            }
            Err(e) => {
                error!(agent = ?self.name, error = %e, "Agent lookup failed");
                self.error = Some(LOAD_AGENT_ERROR.to_string());
            }
        }
    }
}
