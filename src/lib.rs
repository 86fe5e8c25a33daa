pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CalcArgs;
pub use config::{toml_config::TomlConfig, CliConfig};

pub use core::calculator::{add, divide, multiply, power, subtract};
pub use core::dispatch::{evaluate, evaluate_named};
pub use domain::model::{Operation, OperationRequest};
pub use utils::error::{CalcError, Result};
