//! CDU waypoint creation.
//!
//! Every valid entry becomes a new waypoint appended after the last one in
//! the database, so the append-mode flag has no effect here and skipped
//! entries never use up a number.

use dtc_config::{SystemState, WaypointSystem};
use dtc_coords::CoordinateFormat;
use dtc_errors::Result;
use dtc_registry::{ActionRegistry, Device};
use dtc_stream::{CommandAssembler, HemisphereKeys};
use tracing::{debug, trace};

use super::devices::CDU;
use crate::SystemBuilder;
use crate::entry::{entered_altitude, stripped_position};

pub const COORDINATE_FORMAT: CoordinateFormat = CoordinateFormat::DDM_3;
pub const HEMISPHERE_KEYS: HemisphereKeys = HemisphereKeys::distinct("N", "S", "E", "W");
pub const MAX_NAME_LEN: usize = 12;

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
        let cdu = devices.resolve_device(CDU)?;
        if config.is_default() || !config.has_valid_entries() {
            trace!("no waypoints to upload");
            return Ok(());
        }

        debug!(count = config.waypoints.valid().count(), "appending waypoints");
        out.emit_marker(self.name(), &[])?;
        out.emit_actions(cdu, &["WP", "LSK_3L"])?;

        for navpoint in config.waypoints.valid() {
            let Some((lat, lon)) = stripped_position(navpoint, COORDINATE_FORMAT)? else {
                continue;
            };

            // NEW WP
            out.emit_actions(cdu, &["CLR", "LSK_7R"])?;

            let name = cdu_name(&navpoint.name);
            if !name.is_empty() {
                out.emit_action(cdu, "CLR")?;
                emit_text(cdu, &name, out)?;
                out.emit_action(cdu, "LSK_3R")?;
            }

            out.emit_action(cdu, "CLR")?;
            out.emit_coordinate(cdu, &lat, &HEMISPHERE_KEYS)?;
            out.emit_action(cdu, "LSK_7L")?;

            out.emit_action(cdu, "CLR")?;
            out.emit_coordinate(cdu, &lon, &HEMISPHERE_KEYS)?;
            out.emit_action(cdu, "LSK_9L")?;

            if let Some(feet) = entered_altitude(navpoint) {
                out.emit_action(cdu, "CLR")?;
                out.emit_digits(cdu, &feet.to_string())?;
                out.emit_action(cdu, "LSK_5L")?;
            }
        }

        out.emit_action(cdu, "FPM")
    }
}

/// Name as the CDU accepts it: upper case letters and digits, at most
/// [`MAX_NAME_LEN`] characters.
pub fn cdu_name(name: &str) -> String {
    name.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_NAME_LEN)
        .collect()
}

fn emit_text(cdu: &Device, text: &str, out: &mut CommandAssembler) -> Result<()> {
    let labels: Vec<String> = text.chars().map(String::from).collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
    out.emit_actions(cdu, &labels)
}
