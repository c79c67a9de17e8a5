//! Command assembler errors.

use crate::common::ErrorSeverity;

/// Errors raised by a command assembler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// Emission or a second finalize after the stream was finalized
    #[error("Command stream already finalized")]
    Closed,

    /// A record could not be serialized
    #[error("Failed to serialize command record: {0}")]
    Serialize(String),
}

impl StreamError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }
}
