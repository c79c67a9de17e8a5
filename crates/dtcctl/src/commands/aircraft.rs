//! Supported aircraft

use anyhow::Result;
use dtc_aircraft::aircraft_profiles;

use crate::commands::AircraftCommands;
use crate::output;

/// Execute aircraft command
pub fn execute(cmd: &AircraftCommands, json: bool) -> Result<()> {
    match cmd {
        AircraftCommands::List => output::print_aircraft_list(aircraft_profiles(), json),
    }
    Ok(())
}
