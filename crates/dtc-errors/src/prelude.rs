//! Prelude module for convenient error handling imports.
//!
//! # Example
//!
//! ```
//! use dtc_errors::prelude::*;
//!
//! fn parse_slot(text: &str) -> Result<u32> {
//!     text.parse::<u32>()
//!         .map_err(|e| DtcError::config(format!("slot '{text}': {e}")))
//! }
//!
//! assert!(parse_slot("x").is_err());
//! ```

pub use crate::{
    CoordResult, RegistryResult, Result,
    common::{DtcError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt},
    coordinate::CoordinateError,
    registry::RegistryError,
    stream::StreamError,
    transport::TransportError,
};

/// Macro for creating an error context with key-value pairs.
///
/// # Example
///
/// ```
/// use dtc_errors::prelude::*;
/// use dtc_errors::error_context;
///
/// let ctx = error_context!("build_cmds", "program" => "2");
/// assert!(ctx.to_string().contains("program: 2"));
/// ```
#[macro_export]
macro_rules! error_context {
    ($operation:expr, $($key:expr => $value:expr),* $(,)?) => {
        {
            let mut ctx = $crate::ErrorContext::new($operation);
            $(
                ctx = ctx.with($key, $value);
            )*
            ctx
        }
    };
}
