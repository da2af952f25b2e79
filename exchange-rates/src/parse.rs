//! Validation of raw exchange API payloads.

use serde_json::Value;

use crate::error::ExchangeRateError;
use crate::quote::RateQuote;

/// Turns a decoded API payload into a [`RateQuote`].
///
/// Checks run in order and the first failure is returned. Only
/// `rates[target]` is read; every other field is ignored.
pub fn parse_rate_response(
    base: &str,
    target: &str,
    payload: &Value,
) -> Result<RateQuote, ExchangeRateError> {
    let base = base.to_uppercase();
    let target = target.to_uppercase();

    let rates = payload
        .get("rates")
        .ok_or(ExchangeRateError::MissingRates)?;

    let rates = rates
        .as_object()
        .ok_or(ExchangeRateError::RatesNotMapping)?;

    let raw = rates
        .get(&target)
        .ok_or_else(|| ExchangeRateError::CurrencyNotPresent(target.clone()))?;

    let rate = numeric_value(raw).ok_or(ExchangeRateError::NonNumericRate)?;

    if rate.is_nan() || rate <= 0.0 {
        return Err(ExchangeRateError::NonPositiveRate);
    }

    Ok(RateQuote::new(base, target, rate))
}

/// Numbers are taken as-is, booleans count as 1 or 0, and strings are
/// accepted when they hold a decimal number.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
