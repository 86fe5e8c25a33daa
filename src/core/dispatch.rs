use crate::core::calculator;
use crate::domain::model::{Operation, OperationRequest};
use crate::utils::error::Result;

pub fn evaluate(request: &OperationRequest) -> Result<f64> {
    let OperationRequest { a, b, operation } = *request;

    let result = match operation {
        Operation::Add => calculator::add(a, b),
        Operation::Subtract => calculator::subtract(a, b),
        Operation::Multiply => calculator::multiply(a, b),
        Operation::Divide => calculator::divide(a, b)?,
        Operation::Power => calculator::power(a, b),
    };

    tracing::debug!("{} {} {} = {}", a, operation.symbol(), b, result);
    Ok(result)
}

/// 先解析運算識別字，未知的識別字回傳 InvalidOperation
pub fn evaluate_named(a: f64, b: f64, operation: &str) -> Result<f64> {
    let operation = operation.parse::<Operation>()?;
    evaluate(&OperationRequest::new(a, b, operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CalcError;

    #[test]
    fn test_evaluate_each_operation() {
        let cases = [
            (Operation::Add, 9.0),
            (Operation::Subtract, 3.0),
            (Operation::Multiply, 18.0),
            (Operation::Divide, 2.0),
            (Operation::Power, 216.0),
        ];

        for (operation, expected) in cases {
            let request = OperationRequest::new(6.0, 3.0, operation);
            assert_eq!(evaluate(&request).unwrap(), expected, "{}", operation);
        }
    }

    #[test]
    fn test_evaluate_propagates_division_by_zero() {
        let request = OperationRequest::new(1.0, 0.0, Operation::Divide);
        assert!(matches!(
            request.evaluate(),
            Err(CalcError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_evaluate_named() {
        assert_eq!(evaluate_named(2.0, -2.0, "power").unwrap(), 0.25);
        assert_eq!(evaluate_named(5.0, 3.0, "subtract").unwrap(), 2.0);
    }

    #[test]
    fn test_evaluate_named_unknown_operation() {
        let err = evaluate_named(1.0, 2.0, "sqrt").unwrap_err();
        assert_eq!(err.to_string(), "Invalid operation");
    }
}
