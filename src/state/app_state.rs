//! Application state management
//!
//! Owns configuration, the shared agent store, and the current route.

use crate::api::AgentService;
use crate::config::Config;
use crate::error::ClientResult;
use crate::router::Route;
use crate::state::agents_store::AgentsStore;
use tokio::runtime::Handle;
use tracing::info;

/// Main application state
///
/// One instance per window. The agent store lives here so every view in the
/// window sees the same list; nothing is shared across instances.
#[derive(Debug)]
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Runtime background requests are spawned on
    pub runtime: Handle,
    /// Shared agent list
    pub agents: AgentsStore,
    /// Current location
    pub route: Route,
    /// UI state preferences
    pub ui_state: UiState,
}

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Text in the address field
    pub address: String,
    /// Whether dark visuals are enabled
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            address: Route::Dashboard.path(),
            dark_mode: true,
        }
    }
}

impl AppState {
    /// Create the state and start loading agents
    pub fn new(config: Config, runtime: Handle) -> ClientResult<Self> {
        let service = AgentService::from_base_url(&config.api.base_url)?;
        let agents = AgentsStore::new(service, runtime.clone());
        Ok(Self::with_store(config, runtime, agents))
    }

    /// Create the state around an existing store
    pub fn with_store(config: Config, runtime: Handle, agents: AgentsStore) -> Self {
        Self {
            config,
            runtime,
            agents,
            route: Route::default(),
            ui_state: UiState::default(),
        }
    }

    /// Service shared by all views
    pub fn service(&self) -> AgentService {
        self.agents.service().clone()
    }

    /// Move to another route
    /// Returns true if the route changed
    pub fn navigate(&mut self, route: Route) -> bool {
        self.ui_state.address = route.path();
        if self.route == route {
            return false;
        }
        info!(from = %self.route, to = %route, "Navigating");
        self.route = route;
        true
    }

    /// Navigate to whatever path is typed in the address field
    pub fn navigate_to_address(&mut self) -> bool {
        let route = Route::parse(&self.ui_state.address);
        self.navigate(route)
    }

    /// Whether any shared background work is outstanding
    pub fn busy(&self) -> bool {
        self.agents.busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let config = Config::from_lookup(|key| match key {
            "API_URL" => Some("http://127.0.0.1:1".to_string()),
            _ => None,
        });
        let service = AgentService::from_base_url(&config.api.base_url).unwrap();
        let agents = AgentsStore::idle(service, Handle::current());
        AppState::with_store(config, Handle::current(), agents)
    }

    #[tokio::test]
    async fn test_app_state_creation() {
        let state = state();
        assert_eq!(state.route, Route::Dashboard);
        assert_eq!(state.ui_state.address, "/");
        assert!(state.agents.agents().is_empty());
    }

    #[tokio::test]
    async fn test_new_starts_initial_fetch() {
        let config = Config::from_lookup(|key| match key {
            "API_URL" => Some("http://127.0.0.1:1".to_string()),
            _ => None,
        });
        let state = AppState::new(config, Handle::current()).unwrap();
        assert!(state.agents.loading());
        assert!(state.busy());
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected() {
        let config = Config::from_lookup(|key| match key {
            "API_URL" => Some("localhost".to_string()),
            _ => None,
        });
        assert!(AppState::new(config, Handle::current()).is_err());
    }

    #[tokio::test]
    async fn test_navigate() {
        let mut state = state();
        assert!(state.navigate(Route::Chat("Bot".into())));
        assert_eq!(state.ui_state.address, "/chat/Bot");
        assert!(!state.navigate(Route::Chat("Bot".into())));
    }

    #[tokio::test]
    async fn test_navigate_to_address() {
        let mut state = state();
        state.ui_state.address = "/nowhere".into();
        assert!(state.navigate_to_address());
        assert_eq!(state.route, Route::NotFound("/nowhere".into()));

        state.ui_state.address = "/create-agent".into();
        state.navigate_to_address();
        assert_eq!(state.route, Route::CreateAgent);
    }
}
