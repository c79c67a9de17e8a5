//! Per-aircraft device tables and keystroke builders.
//!
//! Each aircraft module declares the cockpit devices its builders press, one
//! [`SystemBuilder`] per avionics subsystem, and an [`AircraftProfile`] that
//! fixes the order subsystems are uploaded in.
//!
//! Builders share one contract:
//!
//! 1. resolve every device they need, failing on a table/builder mismatch;
//! 2. emit nothing at all when the subsystem is at its defaults;
//! 3. otherwise emit the aircraft's keystroke protocol in a fixed order,
//!    silently skipping entries that are not valid.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(rust_2018_idioms)]

pub mod a10c;
pub mod f16c;
pub mod fa18c;
pub mod m2000c;
pub mod profile;

mod entry;

pub use profile::{AircraftProfile, aircraft_profiles, profile_for};

use dtc_config::SystemState;
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::CommandAssembler;

/// Turns one subsystem's configuration into device actions.
pub trait SystemBuilder {
    /// Configuration record this builder reads.
    type Config: SystemState;

    /// Subsystem name used in stream markers and logs.
    fn name(&self) -> &'static str;

    /// Append this subsystem's actions.
    ///
    /// # Errors
    ///
    /// Registry errors when `devices` lacks a device or action the builder
    /// needs; these are programming errors and abort the upload.
    fn build(
        &self,
        config: &Self::Config,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Run one builder and render its records with [`dtc_stream::explain`].
    pub(crate) fn explained<B: SystemBuilder>(
        builder: &B,
        config: &B::Config,
        devices: &ActionRegistry,
    ) -> Result<Vec<String>> {
        let mut out = CommandAssembler::new();
        builder.build(config, devices, &mut out)?;
        Ok(dtc_stream::explain(out.records(), devices))
    }

    /// `"DEVICE LABEL"` lines for a run of labels on one device.
    pub(crate) fn presses(device: &str, labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| format!("{device} {label}")).collect()
    }
}
