use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Invalid macro territory: {input}")]
    InvalidTerritory { input: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::InvalidTerritory { .. } | Self::CsvError(_) => {
                ErrorCategory::Input
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a failed run; never 0 once an error was reported.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 給終端使用者看的訊息，輸入錯誤原樣顯示
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { .. } | Self::InvalidTerritory { .. } => self.to_string(),
            Self::CsvError(e) => format!("Could not read the batch file: {}", e),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Could not render the report: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Overall queries must be at least 1 and covered queries cannot be negative"
            }
            Self::InvalidTerritory { .. } => {
                "Run `coverage-planner territories` to list the available macro territories"
            }
            Self::CsvError(_) => {
                "Check the CSV header: macro_territory,territory,overall_queries,covered_queries"
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the catalog TOML file or omit --catalog to use the built-in catalog"
            }
            Self::IoError(_) => "Make sure the file exists and is readable/writable",
            Self::SerializationError(_) => "Try a different output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
