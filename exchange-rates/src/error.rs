//! Error types for exchange rate operations.

/// Raised when the exchange API answered but the answer is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExchangeRateError {
    #[error("HTTP {0} from exchange API")]
    HttpStatus(u16),

    #[error("Response body was not valid JSON")]
    InvalidJson,

    #[error("Malformed response: missing 'rates' field")]
    MissingRates,

    #[error("Malformed response: 'rates' must be a mapping")]
    RatesNotMapping,

    #[error("Currency '{0}' not present in response")]
    CurrencyNotPresent(String),

    #[error("Rate must be a numeric value")]
    NonNumericRate,

    #[error("Rate must be positive")]
    NonPositiveRate,
}

/// Input validation errors for quote operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount must be non-negative")]
    NegativeAmount,
}
