use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single complaint submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The service answered with a non-success status.
    #[error("complaint service rejected the submission ({status}): {}", .error.as_deref().unwrap_or("no error message"))]
    Rejected {
        status: StatusCode,
        error: Option<String>,
    },

    /// The request never produced a usable response.
    #[error("complaint service request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Error text supplied by the service, if it sent any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { error, .. } => error.as_deref().filter(|text| !text.is_empty()),
            SubmitError::Transport(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be an http:// or https:// URL, got {value:?}")]
    InvalidEndpoint { key: &'static str, value: String },
}
