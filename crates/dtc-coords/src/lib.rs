//! Coordinate text codec for cockpit keypad entry.
//!
//! Canonical positions are signed decimal degrees. Avionics keypads expect
//! them as degrees-minutes-seconds (integer seconds) or degrees-decimal-minutes
//! with 0 to 3 fractional digits, either zero-filled to a fixed width or with
//! the padding removed.
//!
//! ```
//! use dtc_coords::{Axis, CoordinateFormat, from_text, strip_zero_fill, to_text};
//!
//! # fn main() -> Result<(), dtc_coords::CoordinateError> {
//! let latitude = 8.0 + 5.05 / 60.0;
//! let text = to_text(latitude, CoordinateFormat::DDM_2, Axis::Latitude)?;
//! assert_eq!(text, "N 08° 05.05’");
//! assert_eq!(strip_zero_fill(&text), "N 8° 5.05’");
//!
//! let back = from_text(&text, CoordinateFormat::DDM_2, Axis::Latitude)?;
//! assert!((back - latitude).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! Precision beyond the format's resolution is truncated, never rounded,
//! matching what the avionics display for the same input.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(rust_2018_idioms)]

pub mod codec;
pub mod format;

pub use codec::{from_text, strip_zero_fill, to_text};
pub use dtc_errors::{CoordResult, CoordinateError};
pub use format::{AngularFormat, Axis, CoordinateFormat};
