use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    /// Identifier used on the wire, e.g. `"divide"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalcError::invalid_operation("Invalid operation"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub a: f64,
    pub b: f64,
    pub operation: Operation,
}

impl OperationRequest {
    pub fn new(a: f64, b: f64, operation: Operation) -> Self {
        Self { a, b, operation }
    }

    pub fn evaluate(&self) -> Result<f64> {
        crate::core::dispatch::evaluate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_operations() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_unknown_operation() {
        for raw in ["modulo", "", "Add", " add", "pow"] {
            let err = raw.parse::<Operation>().unwrap_err();
            assert!(matches!(err, CalcError::InvalidOperation { .. }));
            assert_eq!(err.to_string(), "Invalid operation");
        }
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");

        let op: Operation = serde_json::from_str("\"power\"").unwrap();
        assert_eq!(op, Operation::Power);
    }

    #[test]
    fn test_display_and_symbol() {
        assert_eq!(Operation::Divide.to_string(), "divide");
        assert_eq!(Operation::Power.symbol(), "^");
    }
}
