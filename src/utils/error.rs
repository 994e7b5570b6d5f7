use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Remote service returned HTTP {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("Remote service did not answer within {seconds} seconds")]
    TimeoutError { seconds: u64 },

    #[error("Unexpected response from remote service: {message}")]
    MalformedResponseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    RemoteService,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AdvisoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ApiError(_)
            | Self::HttpStatusError { .. }
            | Self::TimeoutError { .. }
            | Self::MalformedResponseError { .. } => ErrorCategory::RemoteService,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::RemoteService => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingConfigError { field } => {
                format!("{} not found in environment or .env file", field)
            }
            Self::ValidationError { .. } => "Please enter both plant and disease.".to_string(),
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidConfigValueError { .. } => {
                "Check the advisory configuration and restart".to_string()
            }
            Self::MissingConfigError { field } => {
                format!("Add {}=<your key> to the environment or to a .env file", field)
            }
            Self::ValidationError { .. } => {
                "Fill in both the crop name and the disease or problem".to_string()
            }
            Self::HttpStatusError { status: 401, .. } | Self::HttpStatusError { status: 403, .. } => {
                "Check that the API key is valid and has access to the model".to_string()
            }
            Self::HttpStatusError { status: 429, .. } => {
                "The model is rate limited, wait a moment and submit again".to_string()
            }
            Self::ApiError(_) | Self::TimeoutError { .. } => {
                "Check your network connection and submit again".to_string()
            }
            Self::HttpStatusError { .. } | Self::MalformedResponseError { .. } => {
                "The model service is having trouble, try again later".to_string()
            }
            Self::IoError(_) => "Check that the terminal input is readable".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;
