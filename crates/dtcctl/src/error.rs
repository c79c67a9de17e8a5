//! Error types for dtcctl

use dtc_errors::{CoordinateError, DtcError, ErrorCategory, ErrorSeverity, TransportError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read configuration file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid coordinate: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Upload failed: {0}")]
    SendFailed(#[from] TransportError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ConfigRead { .. } | CliError::ConfigParse { .. } => 3,
            CliError::Coordinate(_) => 4,
            CliError::SendFailed(_) => 5,
            CliError::InvalidEndpoint { .. } | CliError::IoError(_) | CliError::JsonError(_) => 1,
        }
    }

    /// Short machine-readable name used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::ConfigRead { .. } => "config_read",
            CliError::ConfigParse { .. } => "config_parse",
            CliError::Coordinate(_) => "coordinate",
            CliError::InvalidEndpoint { .. } => "endpoint",
            CliError::SendFailed(_) => "send_failed",
            CliError::IoError(_) => "io",
            CliError::JsonError(_) => "json",
        }
    }

    /// Category and severity reported next to the message, if the error
    /// belongs to a generation layer.
    pub fn classification(&self) -> Option<(ErrorCategory, ErrorSeverity)> {
        match self {
            CliError::ConfigRead { .. } | CliError::ConfigParse { .. } => {
                Some((ErrorCategory::Config, ErrorSeverity::Warning))
            }
            CliError::Coordinate(e) => Some((ErrorCategory::Coordinate, e.severity())),
            CliError::InvalidEndpoint { .. } => {
                Some((ErrorCategory::Transport, ErrorSeverity::Warning))
            }
            CliError::SendFailed(e) => Some((ErrorCategory::Transport, e.severity())),
            CliError::IoError(_) | CliError::JsonError(_) => None,
        }
    }
}

/// Exit code for an error raised while generating a stream. Builder and
/// table mismatches get their own code.
fn generation_exit_code(error: &DtcError) -> u8 {
    if error.is_programming_error() {
        return 2;
    }
    match error.category() {
        ErrorCategory::Coordinate => 4,
        ErrorCategory::Transport => 5,
        ErrorCategory::Registry | ErrorCategory::Stream | ErrorCategory::Config => 1,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<CliError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<DtcError>() {
            return generation_exit_code(e);
        }
    }
    1
}

/// Category and severity of the first classified error in the chain.
pub fn classification(error: &anyhow::Error) -> Option<(ErrorCategory, ErrorSeverity)> {
    error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<CliError>() {
            return e.classification();
        }
        cause
            .downcast_ref::<DtcError>()
            .map(|e| (e.category(), e.severity()))
    })
}
