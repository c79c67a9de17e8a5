//! Top-level error type, its classification, and context wrapping.

use core::fmt;

use crate::{CoordinateError, RegistryError, StreamError, TransportError};

/// Any error a generation or upload pass can end with.
#[derive(Debug, thiserror::Error)]
pub enum DtcError {
    /// Device/action table lookups and registration
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Coordinate text parsing and formatting
    #[error("Coordinate error: {0}")]
    Coordinate(#[from] CoordinateError),

    /// Command assembler misuse
    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    /// Delivery of a finalized stream
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration handed to the wrong profile or otherwise unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error annotated with the operation it interrupted. Classification
    /// is the inner error's.
    #[error("{context}: {inner}")]
    Context {
        /// Operation and key-value pairs
        context: ErrorContext,
        /// The annotated error
        inner: Box<DtcError>,
    },
}

impl DtcError {
    /// Which layer the error came from.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DtcError::Registry(_) => ErrorCategory::Registry,
            DtcError::Coordinate(_) => ErrorCategory::Coordinate,
            DtcError::Stream(_) => ErrorCategory::Stream,
            DtcError::Transport(_) => ErrorCategory::Transport,
            DtcError::Config(_) => ErrorCategory::Config,
            DtcError::Context { inner, .. } => inner.category(),
        }
    }

    /// How far the failure reaches.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DtcError::Registry(e) => e.severity(),
            DtcError::Coordinate(e) => e.severity(),
            DtcError::Stream(e) => e.severity(),
            DtcError::Transport(e) => e.severity(),
            DtcError::Config(_) => ErrorSeverity::Fatal,
            DtcError::Context { inner, .. } => inner.severity(),
        }
    }

    /// Whether retrying with other input or later could succeed.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Fatal
    }

    /// Whether the error points at a mismatched builder, registry or profile
    /// rather than at user data or the environment.
    pub fn is_programming_error(&self) -> bool {
        match self {
            DtcError::Registry(_) | DtcError::Stream(_) | DtcError::Config(_) => true,
            DtcError::Coordinate(_) | DtcError::Transport(_) => false,
            DtcError::Context { inner, .. } => inner.is_programming_error(),
        }
    }

    /// The error underneath any context layers.
    pub fn root(&self) -> &DtcError {
        match self {
            DtcError::Context { inner, .. } => inner.root(),
            other => other,
        }
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        DtcError::Config(msg.into())
    }
}

/// Layer an error came from; the label is what JSON error output carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Device/action tables
    Registry,
    /// Coordinate codec
    Coordinate,
    /// Command assembler
    Stream,
    /// Stream delivery
    Transport,
    /// Aircraft configuration
    Config,
}

impl ErrorCategory {
    /// Lower-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Registry => "registry",
            ErrorCategory::Coordinate => "coordinate",
            ErrorCategory::Stream => "stream",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Config => "config",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far a failure reaches, ordered from least to most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// The caller supplied text or a file it can correct
    Warning,
    /// The current upload failed; another attempt may succeed
    Error,
    /// Builders and tables disagree; no upload for this aircraft can succeed
    Fatal,
}

impl ErrorSeverity {
    /// Lower-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Error => "error",
            ErrorSeverity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation name plus key-value pairs attached to an error on its way up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation that was being performed
    pub operation: String,
    /// Additional key-value pairs
    pub context: Vec<(String, String)>,
}

impl ErrorContext {
    /// Context for `operation` with no pairs yet.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            context: Vec::new(),
        }
    }

    /// Add a key-value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation: {}", self.operation)?;
        for (key, value) in &self.context {
            write!(f, ", {key}: {value}")?;
        }
        Ok(())
    }
}

/// Wraps any error convertible into [`DtcError`] in a
/// [`DtcError::Context`] layer.
pub trait ResultExt<T> {
    /// Attach `ctx` to the error.
    fn context(self, ctx: ErrorContext) -> Result<T, DtcError>;

    /// Attach a context holding only an operation name.
    fn with_context(self, operation: impl Into<String>) -> Result<T, DtcError>;
}

impl<T, E: Into<DtcError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, ctx: ErrorContext) -> Result<T, DtcError> {
        self.map_err(|e| DtcError::Context {
            context: ctx,
            inner: Box::new(e.into()),
        })
    }

    fn with_context(self, operation: impl Into<String>) -> Result<T, DtcError> {
        self.context(ErrorContext::new(operation))
    }
}
