//! JSON bodies exchanged with `POST /calculate`.

use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_finite_operand;
use serde::{Deserialize, Serialize};

/// Operand as sent by the form: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    Text(String),
}

impl Operand {
    pub fn value(&self, field_name: &str) -> Result<f64> {
        let value = match self {
            Operand::Number(n) => *n,
            Operand::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                CalcError::validation(format!("{} must be a number, got '{}'", field_name, s))
            })?,
        };
        validate_finite_operand(field_name, value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub num1: Operand,
    pub num2: Operand,
    pub operation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
