//! Command stream assembly.
//!
//! Builders append structured [`CommandRecord`]s to a [`CommandAssembler`];
//! nothing is turned into text until [`CommandAssembler::finalize`], which
//! produces the comma-separated record stream the cockpit receiver replays.
//!
//! ```
//! use dtc_registry::{ActionRegistry, digit_keys};
//! use dtc_stream::{CommandAssembler, HemisphereKeys};
//!
//! # fn main() -> dtc_errors::Result<()> {
//! let mut builder = ActionRegistry::builder("M-2000C");
//! builder
//!     .register_device(23, "PCN")?
//!     .add_actions(23, &digit_keys(3584, 0))?
//!     .add_action(23, 3600, "NE", 0, 1.0)?
//!     .add_action(23, 3601, "SW", 0, 1.0)?;
//! let registry = builder.build();
//! let pcn = registry.resolve_device("PCN")?;
//!
//! let mut out = CommandAssembler::new();
//! out.emit_coordinate(pcn, "N 8° 5.0’", &HemisphereKeys::shared("NE", "SW"))?;
//! let stream = out.finalize()?;
//! assert_eq!(stream.action_count(), 4);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(rust_2018_idioms)]

pub mod assembler;
pub mod explain;
pub mod keys;
pub mod record;

pub use assembler::{CommandAssembler, FinalizedStream};
pub use explain::explain;
pub use keys::HemisphereKeys;
pub use record::{CommandRecord, RECORD_SEPARATOR, decode};
