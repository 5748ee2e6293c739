use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to open file \"{path}\": {source}")]
    UnreadableInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    #[error("Concurrency limiter closed: {0}")]
    LimiterClosed(#[from] tokio::sync::AcquireError),
}

impl SolverError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SolverError::UnreadableInput { path, .. } => format!(
                "Unable to open file \"{}\". Please check your inputs and try again.",
                path
            ),
            SolverError::InvalidKey { .. } => {
                "The key must contain at least one character.".to_string()
            }
            SolverError::ConfigError { message } => {
                format!("Settings could not be loaded: {}", message)
            }
            SolverError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;
