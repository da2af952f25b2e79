//! # Calculator
//!
//! Stateless arithmetic over two `f64` operands. Division and modulo by
//! zero are reported as [`CalcError`] instead of producing `inf`/`NaN`.

/// Arithmetic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Cannot take modulo by zero")]
    ModuloByZero,
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `a` to the power `b`.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// Floored modulo: a non-zero result takes the sign of the divisor.
pub fn modulo(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::ModuloByZero);
    }
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}
