use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a status message reports a completed submission or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// User-visible outcome of the last submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// Success body of POST /send-complaint; an empty message means the service
// sent none
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub message: String,
}

// Error body of POST /send-complaint; the service may omit the field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_explicit_not_sniffed_from_text() {
        let ok = StatusMessage::success("No error found, complaint received");
        assert!(!ok.is_error());

        let failed = StatusMessage::error("Duplicate complaint");
        assert!(failed.is_error());
        assert_eq!(failed.to_string(), "Duplicate complaint");
    }

    #[test]
    fn test_error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorBody = serde_json::from_str(r#"{"error":"All fields are required."}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("All fields are required."));
    }

    #[test]
    fn test_receipt_tolerates_missing_message() {
        let receipt: SubmitReceipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt, SubmitReceipt::default());
        assert!(receipt.message.is_empty());
    }
}
