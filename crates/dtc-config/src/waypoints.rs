//! Waypoint/steerpoint subsystem.

use serde::{Deserialize, Serialize};

use crate::SystemState;
use crate::navpoint::NavpointList;

/// A navpoint list plus the slot addressing mode used to upload it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaypointSystem {
    #[serde(default)]
    pub waypoints: NavpointList,
    /// Keep each entry at its own number instead of packing valid entries
    /// into consecutive slots. Aircraft without absolute addressing ignore it.
    #[serde(default)]
    pub append_mode: bool,
}

impl WaypointSystem {
    pub fn new(waypoints: NavpointList) -> Self {
        Self {
            waypoints,
            append_mode: false,
        }
    }

    pub fn with_append_mode(mut self, append_mode: bool) -> Self {
        self.append_mode = append_mode;
        self
    }

    /// Whether at least one entry would be uploaded.
    pub fn has_valid_entries(&self) -> bool {
        self.waypoints.valid().next().is_some()
    }
}

impl SystemState for WaypointSystem {
    fn is_default(&self) -> bool {
        self.waypoints.is_empty()
    }
}
