//! Transport errors.
//!
//! These never abort generation; the upload orchestrator turns them into a
//! failed upload outcome.

use crate::common::ErrorSeverity;

/// Delivery errors for a finalized command stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The receiver could not be reached
    #[error("Failed to connect to {endpoint}: {reason}")]
    Connect {
        /// Receiver address
        endpoint: String,
        /// Failure reason
        reason: String,
    },

    /// The connection broke while writing
    #[error("Failed to send command stream: {0}")]
    Send(String),

    /// The send did not complete in time
    #[error("Send timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        timeout_ms: u64,
    },
}

impl TransportError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TransportError::Connect { .. } => ErrorSeverity::Error,
            TransportError::Send(_) => ErrorSeverity::Error,
            TransportError::Timeout { .. } => ErrorSeverity::Warning,
        }
    }

    /// Create a connect error.
    pub fn connect(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        TransportError::Connect {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}
