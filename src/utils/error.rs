use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{message}")]
    InvalidOperation { message: String },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Calculation,
    Request,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,   // 輸入錯誤
            ErrorSeverity::High => 1,     // 配置錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl CalcError {
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidOperation { .. } => ErrorCategory::Calculation,
            CalcError::ValidationError { .. } => ErrorCategory::Request,
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Calculation | ErrorCategory::Request => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否屬於客戶端輸入錯誤 (對應 HTTP 400)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Calculation | ErrorCategory::Request
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidOperation { message } | CalcError::ValidationError { message } => {
                message.clone()
            }
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CalcError::MissingConfigError { field } => {
                format!("Configuration requires {}, but it is not set", field)
            }
            CalcError::IoError(e) => format!("File or network operation failed: {}", e),
            CalcError::ServerError { message } => format!("Server failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidOperation { .. } => {
                "Use one of add, subtract, multiply, divide, power and a non-zero divisor"
            }
            CalcError::ValidationError { .. } => {
                "Send a JSON body like {\"num1\": 5, \"num2\": 3, \"operation\": \"add\"}"
            }
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Check the command line flags or the TOML configuration file"
            }
            CalcError::MissingConfigError { .. } => {
                "Export the referenced environment variable or replace the ${VAR} placeholder"
            }
            CalcError::IoError(_) => "Check that the file exists and the address is not in use",
            CalcError::ServerError { .. } => "Check the server logs for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
