//! HSI DATA page waypoint entry.
//!
//! The Hornet has no slot number entry: the DATA page steps through
//! waypoints with the "next" bezel button, starting at waypoint 0.

use dtc_config::{SystemState, WaypointSystem};
use dtc_coords::CoordinateFormat;
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::{CommandAssembler, HemisphereKeys};
use tracing::{debug, trace, warn};

use super::devices::{AMPCD, UFC};
use crate::SystemBuilder;
use crate::entry::{entered_altitude, relative_steps, stripped_position};

pub const COORDINATE_FORMAT: CoordinateFormat = CoordinateFormat::DMS;
pub const HEMISPHERE_KEYS: HemisphereKeys = HemisphereKeys::distinct("2", "8", "6", "4");
pub const MAX_WAYPOINT: u32 = 59;

#[derive(Debug, Clone, Copy, Default)]
pub struct WaypointBuilder;

impl SystemBuilder for WaypointBuilder {
    type Config = WaypointSystem;

    fn name(&self) -> &'static str {
        "waypoints"
    }

    fn build(
        &self,
        config: &WaypointSystem,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        let ufc = devices.resolve_device(UFC)?;
        let ampcd = devices.resolve_device(AMPCD)?;
        if config.is_default() || !config.has_valid_entries() {
            trace!("no waypoints to upload");
            return Ok(());
        }

        let entries = relative_steps(config);
        debug!(count = entries.len(), append = config.append_mode, "uploading waypoints");
        out.emit_marker(self.name(), &[])?;
        // HSI, DATA
        out.emit_actions(ampcd, &["PB18", "PB10"])?;

        for entry in entries {
            if entry.slot > MAX_WAYPOINT {
                warn!(
                    slot = entry.slot,
                    name = %entry.navpoint.name,
                    "waypoint beyond last slot, skipped"
                );
                continue;
            }
            let Some((lat, lon)) = stripped_position(entry.navpoint, COORDINATE_FORMAT)? else {
                continue;
            };

            out.emit_repeated(ampcd, "PB12", entry.steps as usize)?;
            out.emit_action(ampcd, "PB05")?;
            out.emit_actions(ufc, &["OS1", "OS1"])?;
            out.emit_coordinate(ufc, &lat, &HEMISPHERE_KEYS)?;
            out.emit_actions(ufc, &["ENT", "OS3"])?;
            out.emit_coordinate(ufc, &lon, &HEMISPHERE_KEYS)?;
            out.emit_action(ufc, "ENT")?;
            if let Some(feet) = entered_altitude(entry.navpoint) {
                out.emit_action(ufc, "OS4")?;
                out.emit_digits(ufc, &feet.to_string())?;
                out.emit_action(ufc, "ENT")?;
            }
            out.emit_action(ampcd, "PB05")?;
        }

        out.emit_actions(ampcd, &["PB10", "PB18"])
    }
}
