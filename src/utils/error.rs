use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Vehicle {vehicle_id} has no finance record")]
    MissingFinance { vehicle_id: u64 },

    #[error("Invalid loan term: {loan_term} months (must be at least 1)")]
    InvalidLoanTerm { loan_term: i32 },

    #[error("Invalid top-N value: {value} (must be at least 1)")]
    InvalidTopN { value: usize },

    #[error("Invalid vehicle record {record}: {reason}")]
    InvalidRecord { record: String, reason: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected API response: {message}")]
    UnexpectedResponse { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Scoring,
    Configuration,
    Network,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RankError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RankError::MissingFinance { .. }
            | RankError::InvalidLoanTerm { .. }
            | RankError::InvalidTopN { .. } => ErrorCategory::Scoring,
            RankError::InvalidRecord { .. }
            | RankError::CsvError(_)
            | RankError::SerializationError(_) => ErrorCategory::Input,
            RankError::ApiError(_) | RankError::UnexpectedResponse { .. } => ErrorCategory::Network,
            RankError::ZipError(_) | RankError::IoError(_) => ErrorCategory::Storage,
            RankError::ConfigError { .. }
            | RankError::MissingConfigError { .. }
            | RankError::InvalidConfigValueError { .. }
            | RankError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單一車輛的問題只會讓該車輛被略過
            RankError::MissingFinance { .. }
            | RankError::InvalidLoanTerm { .. }
            | RankError::InvalidRecord { .. } => ErrorSeverity::Low,
            RankError::ApiError(_) | RankError::UnexpectedResponse { .. } => ErrorSeverity::Medium,
            RankError::InvalidTopN { .. }
            | RankError::CsvError(_)
            | RankError::SerializationError(_)
            | RankError::ConfigError { .. }
            | RankError::MissingConfigError { .. }
            | RankError::InvalidConfigValueError { .. }
            | RankError::ConfigValidationError { .. } => ErrorSeverity::High,
            RankError::ZipError(_) | RankError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RankError::MissingFinance { vehicle_id } => format!(
                "Add financing details to vehicle {} so its total cost can be computed",
                vehicle_id
            ),
            RankError::InvalidLoanTerm { .. } => {
                "Set loan_term to a positive number of months".to_string()
            }
            RankError::InvalidTopN { .. } => "Use --top-n 1 or greater".to_string(),
            RankError::InvalidRecord { .. } => {
                "Fix the offending row in the vehicle export and run again".to_string()
            }
            RankError::ApiError(_) => {
                "Check that the vehicle API is reachable and retry".to_string()
            }
            RankError::UnexpectedResponse { .. } => {
                "The vehicle API must return a JSON array of vehicle records".to_string()
            }
            RankError::CsvError(_) => {
                "Make sure the CSV export has a header row with the expected columns".to_string()
            }
            RankError::SerializationError(_) => {
                "Make sure the input is a JSON array of vehicle records".to_string()
            }
            RankError::ZipError(_) | RankError::IoError(_) => {
                "Check that the input exists and the output directory is writable".to_string()
            }
            RankError::ConfigError { .. }
            | RankError::MissingConfigError { .. }
            | RankError::InvalidConfigValueError { .. }
            | RankError::ConfigValidationError { .. } => {
                "Review the configuration values (see --help)".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Scoring => format!("Ranking could not be computed: {}", self),
            ErrorCategory::Input => format!("Vehicle data could not be read: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => format!("Could not reach the vehicle service: {}", self),
            ErrorCategory::Storage => format!("File operation failed: {}", self),
        }
    }

    /// 依嚴重程度決定 CLI 的結束碼，到達頂層的錯誤一律非 0
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
