//! F-16C Viper: everything is keyed through the ICP and read back on the DED.
//!
//! Upload order is steerpoints, radios, CMDS, datalink.

pub mod cmds;
pub mod datalink;
pub mod devices;
pub mod radios;
pub mod steerpoints;

pub use cmds::CmdsBuilder;
pub use datalink::DatalinkBuilder;
pub use devices::registry;
pub use radios::RadioBuilder;
pub use steerpoints::SteerpointBuilder;

use dtc_config::{Aircraft, AircraftConfiguration};
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::CommandAssembler;

use crate::SystemBuilder;
use crate::profile::{AircraftProfile, mismatched_profile};

pub const PROFILE: AircraftProfile = AircraftProfile::new(
    Aircraft::F16C,
    ("F-16C upload start", "F-16C upload end"),
    &["steerpoints", "radios", "cmds", "datalink"],
    registry,
    build_systems,
);

fn build_systems(
    config: &AircraftConfiguration,
    devices: &ActionRegistry,
    out: &mut CommandAssembler,
) -> Result<()> {
    let AircraftConfiguration::F16C(config) = config else {
        return Err(mismatched_profile(Aircraft::F16C, config));
    };
    SteerpointBuilder.build(&config.steerpoints, devices, out)?;
    RadioBuilder.build(&config.radios, devices, out)?;
    CmdsBuilder.build(&config.cmds, devices, out)?;
    DatalinkBuilder.build(&config.datalink, devices, out)
}
