//! Unified error handling for the OneLine client.
//!
//! Every failure a view can observe falls into one of three categories:
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Auth | Viewer not signed in, action blocked | No |
//! | Validation | Input rejected before any request | No |
//! | Remote | Network or hosted-store failure | Yes |
//!
//! All three are recovered at the view boundary and surfaced as a transient
//! notice; none crash the application. Read failures additionally degrade to
//! an empty result set with an error-level log.

use thiserror::Error;

use crate::traits::HttpError;

/// Result type alias used throughout the crate.
pub type OneLineResult<T> = Result<T, OneLineError>;

/// High-level error classification for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The viewer must sign in before the action can proceed.
    Auth,
    /// The input was rejected locally; no request was attempted.
    Validation,
    /// The network or the hosted store failed.
    Remote,
}

/// Unified error type for the OneLine client.
#[derive(Debug, Clone, Error)]
pub enum OneLineError {
    /// A user action requires an authenticated viewer.
    #[error("authentication required: {action}")]
    AuthRequired {
        /// The action that was blocked, for the notice text.
        action: &'static str,
    },

    /// Input was rejected before any mutation was attempted.
    #[error("validation rejected: {reason}")]
    Validation {
        /// Human-readable rejection reason.
        reason: String,
    },

    /// The hosted store returned an error status.
    #[error("store error ({status}): {message}")]
    Store {
        /// HTTP status code returned by the store.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl OneLineError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            OneLineError::AuthRequired { .. } => ErrorCategory::Auth,
            OneLineError::Validation { .. } => ErrorCategory::Validation,
            OneLineError::Store { .. }
            | OneLineError::Transport(_)
            | OneLineError::Decode(_) => ErrorCategory::Remote,
        }
    }

    /// Check if retrying the same action could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Remote)
    }

    /// Get a user-friendly message for the transient notice.
    pub fn user_message(&self) -> String {
        match self {
            OneLineError::AuthRequired { action } => {
                format!("Please sign in to {}.", action)
            }
            OneLineError::Validation { reason } => reason.clone(),
            OneLineError::Store { .. } | OneLineError::Transport(_) | OneLineError::Decode(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            OneLineError::AuthRequired { .. } => "AUTH_REQUIRED",
            OneLineError::Validation { .. } => "VALIDATION_REJECTED",
            OneLineError::Store { .. } => "STORE_ERROR",
            OneLineError::Transport(_) => "TRANSPORT_ERROR",
            OneLineError::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Shorthand for a validation rejection.
    pub fn validation(reason: impl Into<String>) -> Self {
        OneLineError::Validation {
            reason: reason.into(),
        }
    }
}

impl From<HttpError> for OneLineError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => {
                OneLineError::Store { status, message }
            }
            other => OneLineError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for OneLineError {
    fn from(err: serde_json::Error) -> Self {
        OneLineError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            OneLineError::AuthRequired { action: "like lines" }.category(),
            ErrorCategory::Auth
        );
        assert_eq!(
            OneLineError::validation("empty text").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            OneLineError::Store {
                status: 500,
                message: "boom".into()
            }
            .category(),
            ErrorCategory::Remote
        );
        assert_eq!(
            OneLineError::Transport("connection refused".into()).category(),
            ErrorCategory::Remote
        );
    }

    #[test]
    fn test_only_remote_is_retryable() {
        assert!(!OneLineError::AuthRequired { action: "post" }.is_retryable());
        assert!(!OneLineError::validation("too long").is_retryable());
        assert!(OneLineError::Transport("timeout".into()).is_retryable());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            OneLineError::AuthRequired { action: "post a line" }.user_message(),
            "Please sign in to post a line."
        );
        assert_eq!(
            OneLineError::validation("Text cannot be empty.").user_message(),
            "Text cannot be empty."
        );
    }

    #[test]
    fn test_http_error_conversion() {
        let err: OneLineError = HttpError::ServerError {
            status: 409,
            message: "duplicate".into(),
        }
        .into();
        assert_eq!(err.error_code(), "STORE_ERROR");

        let err: OneLineError = HttpError::Timeout("30s".into()).into();
        assert_eq!(err.error_code(), "TRANSPORT_ERROR");
    }
}
