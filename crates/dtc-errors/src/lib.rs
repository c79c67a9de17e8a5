//! Error taxonomy for cockpit data-transfer command generation.
//!
//! Generation failures fall into a small number of kinds with very different
//! handling:
//!
//! - [`registry`]: a builder referenced a device or action its aircraft table
//!   does not declare. Always a programming error; aborts the current upload.
//! - [`coordinate`]: coordinate text that does not match its angular format.
//!   Recoverable by whoever supplied the text.
//! - [`stream`]: misuse of a command assembler after it was finalized.
//! - [`transport`]: delivery of a finalized stream failed. Reported as an upload
//!   outcome rather than propagated.
//!
//! [`DtcError`] wraps all of them. Its [`ErrorCategory`] and
//! [`ErrorSeverity`] survive any [`ErrorContext`] layers added on the way up,
//! and `dtcctl` reports both in JSON error output.
//!
//! # Example
//!
//! ```
//! use dtc_errors::prelude::*;
//!
//! fn find_keypad(known: &[&str], name: &str) -> Result<()> {
//!     if !known.contains(&name) {
//!         return Err(RegistryError::unknown_device(name).into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(find_keypad(&["UFC"], "CDU").is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod coordinate;
pub mod prelude;
pub mod registry;
pub mod stream;
pub mod transport;

pub use common::{DtcError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt};
pub use coordinate::CoordinateError;
pub use registry::RegistryError;
pub use stream::StreamError;
pub use transport::TransportError;

/// A specialized `Result` type for command generation.
pub type Result<T> = std::result::Result<T, DtcError>;

/// A specialized `Result` type for coordinate codec operations.
pub type CoordResult<T> = std::result::Result<T, CoordinateError>;

/// A specialized `Result` type for registry construction and lookup.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
