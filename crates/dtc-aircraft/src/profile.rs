//! Upload profiles: which registry and which subsystem order each aircraft
//! uses.

use dtc_config::{Aircraft, AircraftConfiguration};
use dtc_errors::{DtcError, RegistryResult, Result};
use dtc_registry::ActionRegistry;
use dtc_stream::CommandAssembler;
use tracing::debug;

use crate::{a10c, f16c, fa18c, m2000c};

/// Builds an aircraft's device table.
pub type RegistryFactory = fn() -> RegistryResult<ActionRegistry>;

/// Runs an aircraft's subsystem builders in upload order.
pub type SystemsFactory =
    fn(&AircraftConfiguration, &ActionRegistry, &mut CommandAssembler) -> Result<()>;

/// Static description of one aircraft's upload.
#[derive(Debug, Clone, Copy)]
pub struct AircraftProfile {
    pub aircraft: Aircraft,
    pub setup_marker: &'static str,
    pub teardown_marker: &'static str,
    /// Subsystem names in upload order.
    pub systems: &'static [&'static str],
    registry: RegistryFactory,
    build: SystemsFactory,
}

impl AircraftProfile {
    pub(crate) const fn new(
        aircraft: Aircraft,
        markers: (&'static str, &'static str),
        systems: &'static [&'static str],
        registry: RegistryFactory,
        build: SystemsFactory,
    ) -> Self {
        Self {
            aircraft,
            setup_marker: markers.0,
            teardown_marker: markers.1,
            systems,
            registry,
            build,
        }
    }

    /// Build this aircraft's device table.
    ///
    /// # Errors
    ///
    /// Registration errors from a malformed table.
    pub fn registry(&self) -> RegistryResult<ActionRegistry> {
        (self.registry)()
    }

    /// Run every subsystem builder, without markers.
    ///
    /// # Errors
    ///
    /// [`DtcError::Config`] when `config` belongs to another aircraft, and
    /// registry errors when `devices` does not match the builders.
    pub fn build_systems(
        &self,
        config: &AircraftConfiguration,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        (self.build)(config, devices, out)
    }

    /// Setup marker, every subsystem, teardown marker.
    ///
    /// # Errors
    ///
    /// Same as [`build_systems`](Self::build_systems); nothing is appended
    /// for a configuration of the wrong aircraft.
    pub fn assemble(
        &self,
        config: &AircraftConfiguration,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        if config.aircraft() != self.aircraft {
            return Err(mismatched_profile(self.aircraft, config));
        }
        debug!(aircraft = %self.aircraft, systems = self.systems.len(), "assembling upload");
        out.emit_marker(self.setup_marker, &[])?;
        self.build_systems(config, devices, out)?;
        out.emit_marker(self.teardown_marker, &[])
    }
}

/// Error for a configuration handed to another aircraft's profile.
pub(crate) fn mismatched_profile(expected: Aircraft, config: &AircraftConfiguration) -> DtcError {
    DtcError::config(format!(
        "{} configuration handed to the {expected} profile",
        config.aircraft()
    ))
}

/// Every supported aircraft's profile.
pub fn aircraft_profiles() -> &'static [AircraftProfile] {
    static PROFILES: [AircraftProfile; 4] = [
        f16c::PROFILE,
        fa18c::PROFILE,
        a10c::PROFILE,
        m2000c::PROFILE,
    ];
    &PROFILES
}

/// Profile for `aircraft`.
pub fn profile_for(aircraft: Aircraft) -> &'static AircraftProfile {
    match aircraft {
        Aircraft::F16C => &f16c::PROFILE,
        Aircraft::FA18C => &fa18c::PROFILE,
        Aircraft::A10C => &a10c::PROFILE,
        Aircraft::M2000C => &m2000c::PROFILE,
    }
}
