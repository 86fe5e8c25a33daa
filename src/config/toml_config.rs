use crate::core::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_host, validate_log_level, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub logging: Option<LoggingConfig>,
    /// `${VAR}` placeholders that had no matching environment variable
    #[serde(skip)]
    pub unresolved_vars: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let (processed_content, unresolved_vars) = Self::substitute_env_vars(content);

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| CalcError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.unresolved_vars = unresolved_vars;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${CALC_HOST})，找不到的變數保持原樣並回報
    fn substitute_env_vars(content: &str) -> (String, Vec<String>) {
        let mut unresolved = Vec::new();
        let result = env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    if !unresolved.iter().any(|v| v == var_name) {
                        unresolved.push(var_name.to_string());
                    }
                    format!("${{{}}}", var_name)
                })
            })
            .into_owned();
        (result, unresolved)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(var_name) = self.unresolved_vars.first() {
            return Err(CalcError::MissingConfigError {
                field: format!("environment variable {}", var_name),
            });
        }

        validate_host("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;

        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorSeverity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 8080

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
host = "127.0.0.1"
port = 5000
"#,
        )
        .unwrap();

        assert_eq!(config.log_level(), None);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SIMPLE_CALC_TEST_HOST", "10.1.2.3");

        let toml_content = r#"
[server]
host = "${SIMPLE_CALC_TEST_HOST}"
port = 9000
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.host, "10.1.2.3");

        std::env::remove_var("SIMPLE_CALC_TEST_HOST");
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let toml_content = r#"
[server]
host = "${SIMPLE_CALC_SURELY_UNSET_VAR}"
port = 9000
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.host, "${SIMPLE_CALC_SURELY_UNSET_VAR}");
        assert_eq!(config.unresolved_vars, vec!["SIMPLE_CALC_SURELY_UNSET_VAR"]);
    }

    #[test]
    fn test_unresolved_env_var_fails_validation() {
        let toml_content = r#"
[server]
host = "${SIMPLE_CALC_UNSET_HOST_VAR}"
port = 9000
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CalcError::MissingConfigError { .. }));
        assert!(err.to_string().contains("SIMPLE_CALC_UNSET_HOST_VAR"));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 0

[logging]
level = "loud"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[server]\nport = \"many\"").unwrap_err();
        assert!(matches!(err, CalcError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
host = "localhost"
port = 5050
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port(), 5050);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here/calc.toml").unwrap_err();
        assert!(matches!(err, CalcError::IoError(_)));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
