use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Malformed {resource} data: {message}")]
    MalformedDataError { resource: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HomeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HomeError::ApiError(_) | HomeError::HttpStatusError { .. } => ErrorCategory::Network,
            HomeError::MalformedDataError { .. }
            | HomeError::SerializationError(_)
            | HomeError::CsvError(_) => ErrorCategory::Data,
            HomeError::IoError(_) | HomeError::ZipError(_) => ErrorCategory::Storage,
            HomeError::ConfigError { .. }
            | HomeError::ConfigValidationError { .. }
            | HomeError::InvalidConfigValueError { .. }
            | HomeError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 嚴重程度決定 CLI 的退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常重試即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HomeError::ApiError(_) => {
                "Check network connectivity and that the API base URL is reachable"
            }
            HomeError::HttpStatusError { .. } => {
                "The commerce API rejected the request; retry later or verify the endpoint paths"
            }
            HomeError::MalformedDataError { .. } | HomeError::SerializationError(_) => {
                "The API response shape changed; inspect the payload with --verbose"
            }
            HomeError::CsvError(_) => "Check the price sheet contents for invalid characters",
            HomeError::IoError(_) | HomeError::ZipError(_) => {
                "Check that the output path exists and is writable"
            }
            HomeError::ConfigError { .. }
            | HomeError::ConfigValidationError { .. }
            | HomeError::InvalidConfigValueError { .. }
            | HomeError::MissingConfigError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the commerce API: {}", self),
            ErrorCategory::Data => format!("Received unexpected data: {}", self),
            ErrorCategory::Storage => format!("Could not write the homepage output: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, HomeError>;
