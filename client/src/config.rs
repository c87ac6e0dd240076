//! Client configuration assembled once at the application root.
//!
//! The endpoint and timeout are baked in at build time so the server-rendered
//! HTML and the hydrated WASM agree on them. The resulting [`AppConfig`] is
//! provided as context by [`crate::app::App`]; nothing reads it globally.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use correction::{DEFAULT_CORRECTION_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_MS};

use crate::util::theme::Theme;

/// Immutable client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CORRECTION_ENDPOINT.to_owned(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Build config from compile-time environment.
    ///
    /// - `SPELLFIX_CORRECTION_ENDPOINT`: correction service URL
    /// - `SPELLFIX_REQUEST_TIMEOUT_MS`: request timeout, default 30000
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SPELLFIX_CORRECTION_ENDPOINT"),
            option_env!("SPELLFIX_REQUEST_TIMEOUT_MS"),
        )
    }

    fn from_values(endpoint: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let endpoint = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map_or(defaults.endpoint, str::to_owned);
        let timeout_ms = timeout_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.timeout_ms);
        Self { endpoint, timeout_ms, theme: defaults.theme }
    }
}
