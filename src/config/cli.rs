use crate::domain::model::{Operation, OperationRequest};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "simple-calc")]
#[command(about = "Print example calculations, or evaluate a single one")]
pub struct CalcArgs {
    /// First operand
    #[arg(long, allow_negative_numbers = true, requires_all = ["b", "operation"])]
    pub a: Option<f64>,

    /// Second operand
    #[arg(long, allow_negative_numbers = true, requires_all = ["a", "operation"])]
    pub b: Option<f64>,

    /// One of add, subtract, multiply, divide, power
    #[arg(long, requires_all = ["a", "b"])]
    pub operation: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CalcArgs {
    /// `None` 表示未指定運算元，執行示範模式
    pub fn request(&self) -> Result<Option<OperationRequest>> {
        match (self.a, self.b, self.operation.as_deref()) {
            (Some(a), Some(b), Some(operation)) => {
                let operation = operation.parse::<Operation>()?;
                Ok(Some(OperationRequest::new(a, b, operation)))
            }
            _ => Ok(None),
        }
    }
}
