//! Cockpit device and action tables.
//!
//! Each aircraft declares its clickable devices (keypads, MFD bezels, panels)
//! and the actions each device accepts. Builders look actions up by name and
//! get back the numeric ids, default delay and default activation value the
//! simulator expects.
//!
//! A table is filled once through [`RegistryBuilder`] and frozen into an
//! [`ActionRegistry`], which is shared by reference from then on.
//!
//! ```
//! use dtc_registry::{ActionRegistry, ActionSpec};
//!
//! # fn main() -> dtc_registry::RegistryResult<()> {
//! let mut builder = ActionRegistry::builder("F-16C");
//! builder
//!     .register_device(17, "UFC")?
//!     .add_action(17, 3016, "ENTR", 0, 1.0)?
//!     .add_actions(17, &[ActionSpec::press(3032, "RTN").with_activation(-1.0)])?;
//! let registry = builder.build();
//!
//! let ufc = registry.resolve_device("UFC")?;
//! let enter = registry.resolve_action(ufc, "ENTR")?;
//! assert_eq!((ufc.id(), enter.id()), (17, 3016));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(rust_2018_idioms)]

pub mod registry;
pub mod table;

pub use dtc_errors::{RegistryError, RegistryResult};
pub use registry::{Action, ActionRegistry, Device, RegistryBuilder};
pub use table::{ActionSpec, DIGIT_LABELS, digit_keys};
