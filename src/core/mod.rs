pub mod calculator;
pub mod demo;
pub mod dispatch;

pub use crate::domain::model::{Operation, OperationRequest};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
