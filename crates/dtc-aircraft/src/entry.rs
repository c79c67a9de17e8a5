//! Keypad entry helpers shared by the aircraft builders.

use dtc_config::{Navpoint, WaypointSystem};
use dtc_coords::{CoordinateFormat, strip_zero_fill};
use dtc_errors::Result;
use dtc_registry::Device;
use dtc_stream::CommandAssembler;

/// Tracks the highlighted row of a display page so moves are relative.
#[derive(Debug)]
pub(crate) struct FieldCursor {
    position: usize,
    down: &'static str,
    up: &'static str,
}

impl FieldCursor {
    /// Cursor on row 0 that moves with the given labels.
    pub(crate) const fn new(down: &'static str, up: &'static str) -> Self {
        Self {
            position: 0,
            down,
            up,
        }
    }

    pub(crate) fn move_to(
        &mut self,
        target: usize,
        device: &Device,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        if target > self.position {
            out.emit_repeated(device, self.down, target - self.position)?;
        } else if target < self.position {
            out.emit_repeated(device, self.up, self.position - target)?;
        }
        self.position = target;
        Ok(())
    }
}

/// Valid entries paired with the slot they are written to under absolute
/// addressing: their own number in append mode, consecutive slots from 1
/// otherwise.
pub(crate) fn absolute_slots(system: &WaypointSystem) -> Vec<(u32, &Navpoint)> {
    system
        .waypoints
        .valid()
        .zip(1u32..)
        .map(|(navpoint, packed)| {
            let slot = if system.append_mode {
                navpoint.number
            } else {
                packed
            };
            (slot, navpoint)
        })
        .collect()
}

/// A valid entry under relative addressing.
#[derive(Debug)]
pub(crate) struct RelativeEntry<'a> {
    /// "Next waypoint" presses needed before writing this entry.
    pub steps: u32,
    /// Slot reached after those presses.
    pub slot: u32,
    pub navpoint: &'a Navpoint,
}

/// Valid entries with the number of "next" presses that reach their slot,
/// starting from slot 0. In append mode gaps left by skipped entries are
/// stepped over so numbering is preserved.
pub(crate) fn relative_steps(system: &WaypointSystem) -> Vec<RelativeEntry<'_>> {
    let mut current = 0u32;
    system
        .waypoints
        .valid()
        .map(|navpoint| {
            let slot = if system.append_mode {
                navpoint.number.max(current.saturating_add(1))
            } else {
                current.saturating_add(1)
            };
            let steps = slot - current;
            current = slot;
            RelativeEntry {
                steps,
                slot,
                navpoint,
            }
        })
        .collect()
}

/// Latitude and longitude keypad text with zero fill removed.
pub(crate) fn stripped_position(
    navpoint: &Navpoint,
    format: CoordinateFormat,
) -> Result<Option<(String, String)>> {
    let (Some(lat), Some(lon)) = (
        navpoint.latitude_text(format)?,
        navpoint.longitude_text(format)?,
    ) else {
        return Ok(None);
    };
    Ok(Some((strip_zero_fill(&lat), strip_zero_fill(&lon))))
}

/// Altitude worth keying in; negative values are left to the avionics.
pub(crate) fn entered_altitude(navpoint: &Navpoint) -> Option<i32> {
    navpoint.altitude.filter(|feet| *feet >= 0)
}
