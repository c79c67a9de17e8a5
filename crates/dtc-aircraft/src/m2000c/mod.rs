//! Mirage 2000C: waypoints are prepared on the PCN.

pub mod devices;
pub mod waypoints;

pub use devices::registry;
pub use waypoints::WaypointBuilder;

use dtc_config::{Aircraft, AircraftConfiguration};
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::CommandAssembler;

use crate::SystemBuilder;
use crate::profile::{AircraftProfile, mismatched_profile};

pub const PROFILE: AircraftProfile = AircraftProfile::new(
    Aircraft::M2000C,
    ("M-2000C upload start", "M-2000C upload end"),
    &["waypoints"],
    registry,
    build_systems,
);

fn build_systems(
    config: &AircraftConfiguration,
    devices: &ActionRegistry,
    out: &mut CommandAssembler,
) -> Result<()> {
    let AircraftConfiguration::M2000C(config) = config else {
        return Err(mismatched_profile(Aircraft::M2000C, config));
    };
    WaypointBuilder.build(&config.waypoints, devices, out)
}
