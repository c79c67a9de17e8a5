//! STPT page entry.

use dtc_config::{SystemState, WaypointSystem};
use dtc_coords::CoordinateFormat;
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::{CommandAssembler, HemisphereKeys};
use tracing::{debug, trace, warn};

use super::devices::UFC;
use crate::SystemBuilder;
use crate::entry::{FieldCursor, absolute_slots, entered_altitude, stripped_position};

pub const COORDINATE_FORMAT: CoordinateFormat = CoordinateFormat::DDM_3;
pub const HEMISPHERE_KEYS: HemisphereKeys = HemisphereKeys::distinct("2", "8", "6", "4");
pub const MAX_STEERPOINT: u32 = 99;

const STPT_ROW: usize = 0;
const LAT_ROW: usize = 1;
const LON_ROW: usize = 2;
const ELEV_ROW: usize = 3;

/// Writes steerpoints through the STPT page, one slot at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteerpointBuilder;

impl SystemBuilder for SteerpointBuilder {
    type Config = WaypointSystem;

    fn name(&self) -> &'static str {
        "steerpoints"
    }

    fn build(
        &self,
        config: &WaypointSystem,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        let ufc = devices.resolve_device(UFC)?;
        if config.is_default() || !config.has_valid_entries() {
            trace!("no steerpoints to upload");
            return Ok(());
        }

        let slots = absolute_slots(config);
        debug!(count = slots.len(), append = config.append_mode, "uploading steerpoints");
        out.emit_marker(self.name(), &[])?;
        out.emit_action(ufc, "4")?;

        let mut cursor = FieldCursor::new("DOWN", "UP");
        for (slot, navpoint) in slots {
            if !(1..=MAX_STEERPOINT).contains(&slot) {
                warn!(slot, name = %navpoint.name, "steerpoint slot out of range, skipped");
                continue;
            }
            let Some((lat, lon)) = stripped_position(navpoint, COORDINATE_FORMAT)? else {
                continue;
            };

            cursor.move_to(STPT_ROW, ufc, out)?;
            out.emit_digits(ufc, &slot.to_string())?;
            out.emit_action(ufc, "ENTR")?;

            cursor.move_to(LAT_ROW, ufc, out)?;
            out.emit_coordinate(ufc, &lat, &HEMISPHERE_KEYS)?;
            out.emit_action(ufc, "ENTR")?;

            cursor.move_to(LON_ROW, ufc, out)?;
            out.emit_coordinate(ufc, &lon, &HEMISPHERE_KEYS)?;
            out.emit_action(ufc, "ENTR")?;

            if let Some(feet) = entered_altitude(navpoint) {
                cursor.move_to(ELEV_ROW, ufc, out)?;
                out.emit_digits(ufc, &feet.to_string())?;
                out.emit_action(ufc, "ENTR")?;
            }
            cursor.move_to(STPT_ROW, ufc, out)?;
        }

        out.emit_action(ufc, "RTN")
    }
}
