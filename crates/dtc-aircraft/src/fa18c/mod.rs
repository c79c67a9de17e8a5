//! F/A-18C Hornet: pages are selected on the AMPCD, values are typed on the
//! UFC scratchpad.
//!
//! Upload order is waypoints, radios, ALE-47.

pub mod ale47;
pub mod devices;
pub mod radios;
pub mod waypoints;

pub use ale47::Ale47Builder;
pub use devices::registry;
pub use radios::RadioBuilder;
pub use waypoints::WaypointBuilder;

use dtc_config::{Aircraft, AircraftConfiguration};
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::CommandAssembler;

use crate::SystemBuilder;
use crate::profile::{AircraftProfile, mismatched_profile};

pub const PROFILE: AircraftProfile = AircraftProfile::new(
    Aircraft::FA18C,
    ("F/A-18C upload start", "F/A-18C upload end"),
    &["waypoints", "radios", "ale47"],
    registry,
    build_systems,
);

fn build_systems(
    config: &AircraftConfiguration,
    devices: &ActionRegistry,
    out: &mut CommandAssembler,
) -> Result<()> {
    let AircraftConfiguration::FA18C(config) = config else {
        return Err(mismatched_profile(Aircraft::FA18C, config));
    };
    WaypointBuilder.build(&config.waypoints, devices, out)?;
    RadioBuilder.build(&config.radios, devices, out)?;
    Ale47Builder.build(&config.ale47, devices, out)
}
