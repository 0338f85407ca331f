//! Agent list store
//!
//! Owns the agent collection shown by the dashboard and the create-agent flow.

use crate::api::{AgentService, CreateAgentPayload};
use crate::error::{ClientError, ClientResult};
use crate::state::agent::Agent;
use crate::state::inbox::Inbox;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use tokio::runtime::Handle;
use tracing::{debug, error};

/// User-facing message when the list cannot be loaded
pub const LOAD_AGENTS_ERROR: &str = "Failed to load agents";

/// Completed background work for the store
#[derive(Debug)]
pub enum AgentsEvent {
    /// A list fetch finished
    Fetched(ClientResult<Vec<Agent>>),
    /// A create call finished
    Created(CreateTicket, ClientResult<Agent>),
}

/// Outcome of a create call, taken once by whoever submitted it
pub type CreateOutcome = Result<Agent, String>;

/// Identifies one create submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreateTicket(u64);

/// Agent list with loading/error status
///
/// Fetches once when created, and again on [`AgentsStore::fetch_agents`].
/// Created agents are appended to the end of the list as returned by the
/// backend; the list is never re-sorted.
#[derive(Debug)]
pub struct AgentsStore {
    service: AgentService,
    inbox: Inbox<AgentsEvent>,
    agents: Vec<Agent>,
    loading: bool,
    error: Option<String>,
    pending_fetches: usize,
    creates_in_flight: HashSet<CreateTicket>,
    next_ticket: u64,
    // None until the call returns; abandoned tickets are removed
    create_outcomes: HashMap<CreateTicket, Option<CreateOutcome>>,
}

impl AgentsStore {
    /// Create the store and start the initial fetch
    pub fn new(service: AgentService, runtime: Handle) -> Self {
        let mut store = Self::idle(service, runtime);
        store.fetch_agents();
        store
    }

    /// Create the store without fetching
    pub fn idle(service: AgentService, runtime: Handle) -> Self {
        Self {
            service,
            inbox: Inbox::new(runtime),
            agents: Vec::new(),
            loading: false,
            error: None,
            pending_fetches: 0,
            creates_in_flight: HashSet::new(),
            next_ticket: 0,
            create_outcomes: HashMap::new(),
        }
    }

    /// Current agent list, in backend order plus appended creations
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Whether a list fetch is in flight
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed fetch, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether any create call is in flight
    pub fn creating(&self) -> bool {
        !self.creates_in_flight.is_empty()
    }

    /// Whether any background work is outstanding
    pub fn busy(&self) -> bool {
        self.inbox.in_flight() > 0
    }

    /// Start a list fetch
    ///
    /// Repeated calls are not de-duplicated; whichever response arrives last
    /// sets the list.
    pub fn fetch_agents(&mut self) {
        let service = self.service.clone();
        self.loading = true;
        self.pending_fetches += 1;
        debug!("Fetching agents");
        self.inbox
            .spawn(async move { AgentsEvent::Fetched(service.get_agents().await) });
    }

    /// Start a create call; the created agent is appended when it returns
    ///
    /// The returned ticket redeems this call's outcome and no other.
    pub fn add_agent(&mut self, payload: CreateAgentPayload) -> CreateTicket {
        let service = self.service.clone();
        let ticket = CreateTicket(self.next_ticket);
        self.next_ticket += 1;
        self.creates_in_flight.insert(ticket);
        self.create_outcomes.insert(ticket, None);
        self.inbox.spawn(async move {
            AgentsEvent::Created(ticket, service.create_agent(payload).await)
        });
        ticket
    }

    /// Take the outcome of the create call behind `ticket`, once it has returned
    pub fn take_create_outcome(&mut self, ticket: CreateTicket) -> Option<CreateOutcome> {
        match self.create_outcomes.get(&ticket) {
            Some(Some(_)) => self.create_outcomes.remove(&ticket).flatten(),
            _ => None,
        }
    }

    /// Stop tracking the outcome for `ticket`
    ///
    /// The agent is still appended if the call succeeds.
    pub fn abandon_create(&mut self, ticket: CreateTicket) {
        self.create_outcomes.remove(&ticket);
    }

    /// Chat with an agent, returning just the reply text
    ///
    /// Failures are returned to the caller rather than recorded in
    /// [`AgentsStore::error`].
    pub fn get_agent_response(
        &self,
        agent_name: &str,
        input: &str,
    ) -> impl Future<Output = ClientResult<String>> + Send + 'static {
        let service = self.service.clone();
        let agent_name = agent_name.to_string();
        let input = input.to_string();
        async move {
            service
                .chat_agent_by_name(&agent_name, &input)
                .await
                .map(|output| output.message)
        }
    }

    /// Service used by this store
    pub fn service(&self) -> &AgentService {
        &self.service
    }

    /// Apply all completed background work; call once per frame
    pub fn poll(&mut self) {
        while let Some(event) = self.inbox.try_next() {
            self.apply(event);
        }
    }

    /// Wait for the next piece of background work and apply it
    ///
    /// Returns false when nothing was in flight.
    pub async fn settle(&mut self) -> bool {
        match self.inbox.next().await {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Apply one completed event to the store
    pub fn apply(&mut self, event: AgentsEvent) {
        match event {
            AgentsEvent::Fetched(result) => {
                self.pending_fetches = self.pending_fetches.saturating_sub(1);
                self.loading = self.pending_fetches > 0;
                match result {
                    Ok(agents) => {
                        debug!(count = agents.len(), "Agents loaded");
                        self.agents = agents;
                        self.error = None;
                    }
                    Err(e) => {
                        error!(error = %e, "Agent list fetch failed");
                        self.error = Some(LOAD_AGENTS_ERROR.to_string());
                    }
                }
            }
            AgentsEvent::Created(ticket, result) => {
                self.creates_in_flight.remove(&ticket);
                let outcome = match result {
                    Ok(agent) => {
                        self.agents.push(agent.clone());
                        Ok(agent)
                    }
                    Err(e) => Err(create_error_message(&e)),
                };
                if let Some(slot) = self.create_outcomes.get_mut(&ticket) {
                    *slot = Some(outcome);
                }
            }
        }
    }
}

fn create_error_message(error: &ClientError) -> String {
    match error {
        ClientError::ManualFile { .. } | ClientError::Validation(_) => error.to_string(),
        _ => "An error occurred while creating the agent. Please try again.".to_string(),
    }
}
