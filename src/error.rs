//! Error types for the dashboard client
//!
//! Every failure the client can observe is represented by [`ClientError`].
//! The service layer logs and returns these; the state containers turn them
//! into the short user-facing strings rendered by the views.

use std::path::PathBuf;
use thiserror::Error;

/// Client-level error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, etc.)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend returned error status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, if it could be read
        body: String,
    },

    /// A by-name lookup returned nothing
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    /// A required form field is missing
    #[error("{0}")]
    Validation(String),

    /// The attachment chosen for upload could not be read
    #[error("Failed to read manual file {}: {source}", path.display())]
    ManualFile {
        /// Path that was selected
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configured base URL cannot carry path segments
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ClientError {
    /// Whether this error means the requested agent does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::AgentNotFound(_))
            || matches!(self, ClientError::Status { status: 404, .. })
    }
}

/// Result alias used across the client
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        assert!(ClientError::AgentNotFound("x".into()).is_not_found());
        assert!(ClientError::Status {
            status: 404,
            body: String::new()
        }
        .is_not_found());
        assert!(!ClientError::Status {
            status: 500,
            body: String::new()
        }
        .is_not_found());
        assert!(!ClientError::Validation("missing".into()).is_not_found());
    }

    #[test]
    fn test_status_message_includes_code_and_body() {
        let err = ClientError::Status {
            status: 502,
            body: "bad gateway".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("bad gateway"));
    }

    #[test]
    fn test_encode_and_decode_are_told_apart() {
        let encode = ClientError::Encode("key must be a string".into()).to_string();
        let decode = ClientError::Decode("expected value".into()).to_string();
        assert!(encode.starts_with("Failed to encode request"));
        assert!(decode.starts_with("Failed to decode response"));
    }
}
