//! Sync Errors
//!
//! Failure of a single request against the todo service.

use thiserror::Error;

/// Text shown in the blocking alert for any failed action
pub const ALERT_TEXT: &str = "Error";

/// Errors from talking to the todo service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// Request could not be sent or the connection dropped
    #[error("Request failed: {0}")]
    Network(String),

    /// Service answered with a non-2xx status
    #[error("Service error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        message: String,
    },

    /// `/todos` body was not a todo list
    #[error("Response parsing failed: {0}")]
    Decode(String),
}

impl SyncError {
    /// Message for the user. Every kind of failure reads the same.
    pub fn user_message(&self) -> &'static str {
        ALERT_TEXT
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SyncError::Decode(e.to_string())
        } else {
            SyncError::Network(e.to_string())
        }
    }
}
