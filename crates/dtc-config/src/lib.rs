//! Typed avionics configuration.
//!
//! Records here are what an editor hands to the generator: already
//! validated, read-only for one generation pass. Every subsystem can say
//! whether it is still at its defaults, which is what decides whether a
//! builder emits anything for it.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod aircraft;
pub mod countermeasures;
pub mod datalink;
pub mod navpoint;
pub mod radio;
pub mod waypoints;

pub use aircraft::{
    A10Configuration, Aircraft, AircraftConfiguration, F16Configuration, FA18Configuration,
    M2000Configuration, UnknownAircraft,
};
pub use countermeasures::{Ale47Program, Ale47System, CmdsProgram, CmdsSystem, DispenseProgram};
pub use datalink::{DatalinkSystem, TeamMember};
pub use navpoint::{Navpoint, NavpointList};
pub use radio::{Radio, RadioPreset, RadioSystem};
pub use waypoints::WaypointSystem;

/// Default-state query shared by every subsystem record.
pub trait SystemState {
    /// True when every field is empty or unset.
    fn is_default(&self) -> bool;
}

/// Trimmed text, or `None` when absent or blank.
pub(crate) fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}
