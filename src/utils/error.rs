use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Account lookup failed: {message}")]
    LookupNotFoundError { message: String, raw: Value },

    #[error("Upstream fetch failed: {message}")]
    UpstreamFetchError { message: String, raw: Value },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FeedError {
    /// HTTP status the error maps to on the inbound contract.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } => 400,
            Self::LookupNotFoundError { .. } => 404,
            _ => 500,
        }
    }

    /// JSON body surfaced to the caller. Errors with upstream context echo
    /// the raw provider payload; transport and decode errors carry a detail
    /// string instead.
    pub fn to_response_body(&self) -> Value {
        let mut body = serde_json::json!({ "error": self.to_string() });
        match self {
            Self::LookupNotFoundError { raw, .. } | Self::UpstreamFetchError { raw, .. } => {
                body["raw"] = raw.clone();
            }
            Self::ApiError(source) => {
                body["detail"] = Value::String(source.to_string());
            }
            Self::SerializationError(source) => {
                body["detail"] = Value::String(source.to_string());
            }
            _ => {}
        }
        body
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ApiError(_) | Self::UpstreamFetchError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. }
            | Self::LookupNotFoundError { .. }
            | Self::SerializationError(_) => ErrorSeverity::High,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => "Check network connectivity and try again".to_string(),
            Self::SerializationError(_) => {
                "The provider returned a payload that could not be decoded".to_string()
            }
            Self::ValidationError { .. } => {
                "Pass a non-empty username, e.g. ?username=instagram".to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the provider configuration values".to_string()
            }
            Self::MissingConfigError { field } => {
                format!("Set the {} environment variable", field)
            }
            Self::LookupNotFoundError { .. } => {
                "Check the username spelling; the account may not exist".to_string()
            }
            Self::UpstreamFetchError { .. } => {
                "The provider rejected the feed request; try again later".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
