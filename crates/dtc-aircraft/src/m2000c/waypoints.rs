//! PCN waypoint preparation (PREP page).

use dtc_config::{SystemState, WaypointSystem};
use dtc_coords::CoordinateFormat;
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::{CommandAssembler, HemisphereKeys};
use tracing::{debug, trace, warn};

use super::devices::PCN;
use crate::SystemBuilder;
use crate::entry::{absolute_slots, stripped_position};

pub const COORDINATE_FORMAT: CoordinateFormat = CoordinateFormat::DDM_1;
pub const HEMISPHERE_KEYS: HemisphereKeys = HemisphereKeys::shared("NE", "SW");
pub const MAX_WAYPOINT: u32 = 20;

/// Writes waypoints by slot number. Altitude is never entered.
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
        let pcn = devices.resolve_device(PCN)?;
        if config.is_default() || !config.has_valid_entries() {
            trace!("no waypoints to upload");
            return Ok(());
        }

        let slots = absolute_slots(config);
        debug!(count = slots.len(), append = config.append_mode, "uploading waypoints");
        out.emit_marker(self.name(), &[])?;

        for (slot, navpoint) in slots {
            if !(1..=MAX_WAYPOINT).contains(&slot) {
                warn!(slot, name = %navpoint.name, "waypoint slot out of range, skipped");
                continue;
            }
            let Some((lat, lon)) = stripped_position(navpoint, COORDINATE_FORMAT)? else {
                continue;
            };

            out.emit_action(pcn, "PREP")?;
            out.emit_digits(pcn, &slot.to_string())?;
            out.emit_action(pcn, "EFF")?;
            out.emit_coordinate(pcn, &lat, &HEMISPHERE_KEYS)?;
            out.emit_action(pcn, "INS")?;
            out.emit_coordinate(pcn, &lon, &HEMISPHERE_KEYS)?;
            out.emit_actions(pcn, &["INS", "EFF"])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::m2000c::registry;
    use crate::test_support::{explained, presses};
    use dtc_config::NavpointList;

    #[test]
    fn test_waypoint_sequence_uses_shared_hemisphere_keys() -> Result<()> {
        let mut list = NavpointList::new();
        list.append("", Some(42.0 + 10.5 / 60.0), Some(-(3.0 + 0.25 / 60.0)), Some(1500));
        let lines = explained(&WaypointBuilder, &WaypointSystem::new(list), &registry()?)?;

        let mut expected = vec!["# waypoints".to_string()];
        expected.extend(presses(
            "PCN",
            &[
                "PREP", "1", "EFF", "NE", "4", "2", "1", "0", "5", "INS", "SW", "3", "0", "2", "INS",
                "EFF",
            ],
        ));
        assert_eq!(lines, expected);
        Ok(())
    }

    #[test]
    fn test_slots_past_twenty_skipped() -> Result<()> {
        let mut list = NavpointList::new();
        for _ in 0..21 {
            list.append("", Some(1.0), Some(1.0), None);
        }
        let lines = explained(&WaypointBuilder, &WaypointSystem::new(list), &registry()?)?;
        assert_eq!(lines.iter().filter(|l| *l == "PCN PREP").count(), 20);
        Ok(())
    }
}
