//! A-10C Warthog: waypoints are created one by one on the CDU WAYPOINT page.

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
    Aircraft::A10C,
    ("A-10C upload start", "A-10C upload end"),
    &["waypoints"],
    registry,
    build_systems,
);

fn build_systems(
    config: &AircraftConfiguration,
    devices: &ActionRegistry,
    out: &mut CommandAssembler,
) -> Result<()> {
    let AircraftConfiguration::A10C(config) = config else {
        return Err(mismatched_profile(Aircraft::A10C, config));
    };
    WaypointBuilder.build(&config.waypoints, devices, out)
}
