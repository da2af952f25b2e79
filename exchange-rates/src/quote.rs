//! Immutable FX quote with a derived conversion operation.

use serde::Serialize;
use std::fmt;

use crate::error::ValidationError;

/// A single exchange rate between two currencies.
///
/// `rate` is the number of `target` units bought by one `base` unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateQuote {
    base: String,
    target: String,
    rate: f64,
}

impl RateQuote {
    /// Creates a quote as given.
    ///
    /// Codes are stored verbatim and the rate is not checked; quotes built
    /// from API payloads go through [`crate::parse_rate_response`], which
    /// uppercases the codes and rejects non-positive rates.
    pub fn new(base: impl Into<String>, target: impl Into<String>, rate: f64) -> Self {
        Self {
            base: base.into(),
            target: target.into(),
            rate,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Converts `amount` of `base` currency into `target` currency.
    pub fn convert(&self, amount: f64) -> Result<f64, ValidationError> {
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount);
        }
        Ok(amount * self.rate)
    }
}

impl fmt::Display for RateQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 {} = {} {}", self.base, self.rate, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(f64::MIN_POSITIVE)
    }

    #[test]
    fn test_quote_accessors() {
        let quote = RateQuote::new("USD", "EUR", 0.9);
        assert_eq!(quote.base(), "USD");
        assert_eq!(quote.target(), "EUR");
        assert_eq!(quote.rate(), 0.9);
    }

    #[test]
    fn test_convert() {
        let quote = RateQuote::new("USD", "EUR", 0.9);
        let converted = quote.convert(100.0).unwrap();
        assert!(approx_eq(converted, 90.0, 1e-12));
    }

    #[test]
    fn test_convert_table() {
        let cases = [
            (0.0, 1.0, 0.0),
            (100.0, 1.0, 100.0),
            (50.0, 0.5, 25.0),
            (123.45, 1.2345, 152.39),
        ];
        for (amount, rate, expected) in cases {
            let quote = RateQuote::new("AAA", "BBB", rate);
            let converted = quote.convert(amount).unwrap();
            assert!(
                approx_eq(converted, expected, 1e-4),
                "{amount} at {rate}: got {converted}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_convert_negative_amount_fails() {
        let quote = RateQuote::new("USD", "EUR", 0.9);
        assert_eq!(quote.convert(-1.0), Err(ValidationError::NegativeAmount));
    }

    #[test]
    fn test_convert_negative_amount_fails_for_any_rate() {
        let quote = RateQuote::new("USD", "EUR", -2.0);
        assert_eq!(quote.convert(-1.0), Err(ValidationError::NegativeAmount));
    }

    #[test]
    fn test_direct_construction_keeps_rate_unchecked() {
        let quote = RateQuote::new("usd", "eur", 0.0);
        assert_eq!(quote.base(), "usd");
        assert_eq!(quote.convert(10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_quote_serializes_fields() {
        let quote = RateQuote::new("USD", "EUR", 0.5);
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "base": "USD", "target": "EUR", "rate": 0.5 })
        );
    }

    #[test]
    fn test_quote_display() {
        let quote = RateQuote::new("USD", "EUR", 0.9);
        assert_eq!(quote.to_string(), "1 USD = 0.9 EUR");
    }
}
