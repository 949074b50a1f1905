use crate::error::ConfigError;
use core_types::Window;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub api: ApiSettings,
    pub window: WindowSettings,
}

/// Where and how pages are fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// The GraphQL endpoint of the subgraph.
    pub endpoint: String,
    /// Maximum number of records requested per page (the subgraph caps this at 1000).
    pub page_size: u32,
    /// Per-request HTTP timeout.
    pub request_timeout_secs: u64,
}

/// The inclusive date range, as RFC3339 strings.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowSettings {
    pub start_date: String,
    pub end_date: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v3".to_string(),
            page_size: 1000,
            request_timeout_secs: 30,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            start_date: "2022-01-01T00:00:00Z".to_string(),
            end_date: "2022-02-28T00:00:00Z".to_string(),
        }
    }
}

impl WindowSettings {
    /// Parses both boundaries into a `Window` of Unix timestamps.
    pub fn to_window(&self) -> Result<Window, core_types::CoreError> {
        Window::from_rfc3339(&self.start_date, &self.end_date)
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "api.endpoint must not be empty".to_string(),
            ));
        }
        if self.api.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "api.page_size must be greater than zero".to_string(),
            ));
        }
        self.window
            .to_window()
            .map_err(|e| ConfigError::ValidationError(format!("window: {}", e)))?;
        Ok(())
    }
}
