//! Datalink team subsystem.

use serde::{Deserialize, Serialize};

use crate::{SystemState, non_blank};

/// A flight member in a team slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamMember {
    /// Team row, 1..=8.
    pub slot: u8,
    /// Source track number, five octal digits as entered.
    #[serde(default)]
    pub stn: Option<String>,
}

impl TeamMember {
    pub fn stn(&self) -> Option<&str> {
        non_blank(self.stn.as_ref())
    }
}

/// Team composition and the ownship's own slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatalinkSystem {
    #[serde(default)]
    pub ownship_slot: Option<u8>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl SystemState for DatalinkSystem {
    fn is_default(&self) -> bool {
        self.ownship_slot.is_none() && self.members.iter().all(|m| m.stn().is_none())
    }
}
