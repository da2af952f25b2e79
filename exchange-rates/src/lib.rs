//! Exchange Rates Core
//!
//! Pure types for currency quotes fetched from a remote exchange API.
//! This crate performs no IO: it validates an already-decoded JSON payload
//! and hands back an immutable [`RateQuote`].
//!
//! # Example
//! ```
//! use exchange_rates::parse_rate_response;
//! use serde_json::json;
//!
//! let payload = json!({ "base": "USD", "rates": { "EUR": 0.9 } });
//! let quote = parse_rate_response("usd", "eur", &payload).unwrap();
//!
//! assert_eq!(quote.base(), "USD");
//! assert_eq!(quote.target(), "EUR");
//! assert!((quote.convert(100.0).unwrap() - 90.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod parse;
pub mod quote;

pub use error::{ExchangeRateError, ValidationError};
pub use parse::parse_rate_response;
pub use quote::RateQuote;
