//! # Exchange Rates Client
//!
//! Fetches a single FX quote from a public exchange API and validates it
//! into an [`exchange_rates::RateQuote`].
//!
//! Errors come in two tiers. [`FetchError::Transport`] wraps the untouched
//! [`reqwest::Error`] when the request/response exchange itself failed
//! (connect, DNS, timeout). [`FetchError::Rate`] means the API answered
//! but the answer was unusable. Each call makes exactly one attempt.

mod config;

pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use exchange_rates::{ExchangeRateError, RateQuote, ValidationError};

use std::time::Duration;

use exchange_rates::parse_rate_response;
use reqwest::{Client, StatusCode};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Rate(#[from] ExchangeRateError),
}

impl FetchError {
    /// True when the network exchange itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

/// Exchange rate API client.
#[derive(Debug, Clone)]
pub struct RatesClient {
    config: ClientConfig,
    http: Client,
}

impl RatesClient {
    /// Creates a client for the default endpoint.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the `base` -> `target` rate using the configured timeout.
    pub async fn fetch_rate(&self, base: &str, target: &str) -> Result<RateQuote, FetchError> {
        self.fetch_rate_with_timeout(base, target, self.config.timeout)
            .await
    }

    /// Fetches the `base` -> `target` rate with a per-call timeout.
    pub async fn fetch_rate_with_timeout(
        &self,
        base: &str,
        target: &str,
        timeout: Duration,
    ) -> Result<RateQuote, FetchError> {
        let base = base.to_uppercase();
        let target = target.to_uppercase();

        tracing::debug!(%base, %target, ?timeout, endpoint = %self.config.endpoint, "fetching rate");

        let resp = self
            .http
            .get(&self.config.endpoint)
            .query(&[("from", base.as_str()), ("to", target.as_str())])
            .timeout(timeout)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "exchange API request failed"))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let err = ExchangeRateError::HttpStatus(status.as_u16());
            tracing::warn!(%err, "unexpected status from exchange API");
            return Err(err.into());
        }

        let body = resp
            .bytes()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "failed to read exchange API body"))?;

        let quote = serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|_| ExchangeRateError::InvalidJson)
            .and_then(|payload| parse_rate_response(&base, &target, &payload))
            .inspect_err(|err| tracing::warn!(%err, "rejected exchange API response"))?;

        tracing::debug!(rate = quote.rate(), "fetched rate");
        Ok(quote)
    }
}

impl Default for RatesClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches a rate from the default endpoint with the default timeout.
///
/// ```no_run
/// # async fn run() -> Result<(), exchange_rates_client::FetchError> {
/// let quote = exchange_rates_client::fetch_rate("usd", "eur").await?;
/// println!("{quote}");
/// # Ok(())
/// # }
/// ```
pub async fn fetch_rate(base: &str, target: &str) -> Result<RateQuote, FetchError> {
    RatesClient::new().fetch_rate(base, target).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RatesClient::new();
        assert_eq!(client.config().endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.config().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_client_with_config() {
        let config = ClientConfig::default()
            .with_endpoint("http://localhost:3000/latest")
            .with_timeout(Duration::from_secs(1));
        let client = RatesClient::with_config(config);
        assert_eq!(client.config().endpoint, "http://localhost:3000/latest");
        assert_eq!(client.config().timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_domain_error_is_not_transport() {
        let err = FetchError::from(ExchangeRateError::InvalidJson);
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Response body was not valid JSON");
    }
}
