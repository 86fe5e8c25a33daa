#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_host, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "calc_server"))]
#[cfg_attr(feature = "cli", command(about = "Serve the calculator web form and JSON endpoint"))]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_HOST, conflicts_with = "config"))]
    pub host: String,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_PORT, conflicts_with = "config"))]
    pub port: u16,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Path to a TOML configuration file"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            config: None,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_host("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)
    }
}
