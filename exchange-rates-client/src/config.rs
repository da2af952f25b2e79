//! Client configuration.

use std::time::Duration;

/// Public exchange API queried when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.frankfurter.app/latest";

/// Request timeout used when the caller does not pass one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Endpoint and default timeout for a [`crate::RatesClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
