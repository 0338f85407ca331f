//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::time::Duration;

/// Backend URL used when `API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Reply pacing used when `CHAT_REPLY_DELAY_MS` is unset
pub const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 1000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,
    /// UI configuration
    pub ui: UiConfig,
}

/// Backend API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the agent backend
    pub base_url: String,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Cosmetic pause before an agent reply is shown in the transcript
    pub chat_reply_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api: ApiConfig {
                base_url: lookup("API_URL")
                    .map(|url| url.trim().to_string())
                    .filter(|url| !url.is_empty())
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            },
            ui: UiConfig {
                chat_reply_delay: Duration::from_millis(
                    lookup("CHAT_REPLY_DELAY_MS")
                        .and_then(|ms| ms.trim().parse().ok())
                        .unwrap_or(DEFAULT_CHAT_REPLY_DELAY_MS),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.ui.chat_reply_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_URL", "https://agents.example.com/api"),
            ("CHAT_REPLY_DELAY_MS", "0"),
        ]));
        assert_eq!(config.api.base_url, "https://agents.example.com/api");
        assert_eq!(config.ui.chat_reply_delay, Duration::ZERO);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_URL", "   "),
            ("CHAT_REPLY_DELAY_MS", "soon"),
        ]));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(
            config.ui.chat_reply_delay,
            Duration::from_millis(DEFAULT_CHAT_REPLY_DELAY_MS)
        );
    }
}
