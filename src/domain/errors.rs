use std::fmt;

use super::models::SUPPORTED_METHODS;

#[derive(Debug, Clone)]
pub enum RestError {
    UnsupportedMethod(String),
    InvalidUrl(String),
    CredentialsNotConfigured,
    Serialization(String),
    Transport(String),
    Timeout,
    Status { status: u16, message: String },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::UnsupportedMethod(method) => write!(
                f,
                "Unsupported HTTP method: {}. Supported methods are: {}",
                method,
                SUPPORTED_METHODS.join(", ")
            ),
            RestError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            RestError::CredentialsNotConfigured => write!(
                f,
                "REST API credentials are not configured. Check the \
                 CONNECT_REST_API_USERNAME and CONNECT_REST_API_PASSWORD environment variables."
            ),
            RestError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
            RestError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            RestError::Timeout => write!(f, "Request timed out"),
            RestError::Status { status, message } => {
                write!(f, "HTTP error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// True for failures raised before any network I/O: the caller can
    /// recover by correcting its input or the configuration.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RestError::UnsupportedMethod(_)
                | RestError::InvalidUrl(_)
                | RestError::CredentialsNotConfigured
        )
    }
}

pub type Result<T> = std::result::Result<T, RestError>;
