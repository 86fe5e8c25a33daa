use crate::utils::error::{CalcError, Result};

/// Add two numbers
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract b from a
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide a by b.
///
/// Fails with [`CalcError::InvalidOperation`] when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::invalid_operation("Cannot divide by zero"));
    }
    Ok(a / b)
}

/// Raise a to the power of b. Negative exponents give fractional results.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}
