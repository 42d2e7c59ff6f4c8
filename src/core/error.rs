use reqwest::StatusCode;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main client error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Invalid caller input, rejected before any request is issued
    #[error("Validation error: {0}")]
    Validation(String),

    /// The products API answered with a non-2xx status
    #[error("Products API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or transport failure
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        AppError::Status {
            status,
            body: body.into(),
        }
    }

    /// HTTP status carried by the error, if the server produced one
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            AppError::HttpClient(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }
}
