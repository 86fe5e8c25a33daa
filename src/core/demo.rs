use crate::domain::model::{Operation, OperationRequest};
use crate::utils::error::Result;

pub const DEMO_TITLE: &str = "Simple Calculator";
pub const DEMO_OPERANDS: (f64, f64) = (5.0, 3.0);

pub fn format_line(request: &OperationRequest, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        request.a,
        request.operation.symbol(),
        request.b,
        result
    )
}

/// Example computations printed by the CLI, one per operation.
pub fn demo_report() -> Result<Vec<String>> {
    let (a, b) = DEMO_OPERANDS;

    Operation::ALL
        .into_iter()
        .map(|operation| {
            let request = OperationRequest::new(a, b, operation);
            let result = request.evaluate()?;
            Ok(format_line(&request, result))
        })
        .collect()
}
