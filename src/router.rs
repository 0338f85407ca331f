//! Router
//!
//! Maps paths to views and back.

use std::fmt;

/// A location inside the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// `/`
    #[default]
    Dashboard,
    /// `/chat/:agentName`
    Chat(String),
    /// `/create-agent`
    CreateAgent,
    /// Anything else; keeps the unmatched path
    NotFound(String),
}

impl Route {
    /// Resolve a path to a route
    ///
    /// Trailing slashes are ignored. `/chat/` without a name does not match the
    /// chat route.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Route::Dashboard,
            "/create-agent" => Route::CreateAgent,
            _ => match normalized.strip_prefix("/chat/") {
                Some(name) if !name.is_empty() && !name.contains('/') => {
                    Route::Chat(name.to_string())
                }
                _ => Route::NotFound(trimmed.to_string()),
            },
        }
    }

    /// Path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Chat(name) => format!("/chat/{}", name),
            Route::CreateAgent => "/create-agent".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
