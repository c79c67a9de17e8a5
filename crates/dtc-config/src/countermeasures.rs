//! Countermeasure dispenser programs.

use serde::{Deserialize, Serialize};

use crate::{SystemState, non_blank};

/// One side (chaff or flare) of a CMDS program.
///
/// Fields are kept as entered, e.g. `"0.020"` for a burst interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispenseProgram {
    #[serde(default)]
    pub burst_quantity: Option<String>,
    #[serde(default)]
    pub burst_interval: Option<String>,
    #[serde(default)]
    pub salvo_quantity: Option<String>,
    #[serde(default)]
    pub salvo_interval: Option<String>,
}

impl DispenseProgram {
    /// Fields in display order: BQ, BI, SQ, SI.
    pub fn fields(&self) -> [Option<&str>; 4] {
        [
            non_blank(self.burst_quantity.as_ref()),
            non_blank(self.burst_interval.as_ref()),
            non_blank(self.salvo_quantity.as_ref()),
            non_blank(self.salvo_interval.as_ref()),
        ]
    }
}

impl SystemState for DispenseProgram {
    fn is_default(&self) -> bool {
        self.fields().iter().all(Option::is_none)
    }
}

/// A numbered CMDS program (1..=6).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CmdsProgram {
    pub number: u8,
    #[serde(default)]
    pub chaff: DispenseProgram,
    #[serde(default)]
    pub flare: DispenseProgram,
}

impl SystemState for CmdsProgram {
    fn is_default(&self) -> bool {
        self.chaff.is_default() && self.flare.is_default()
    }
}

/// F-16 countermeasures management programs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CmdsSystem {
    #[serde(default)]
    pub programs: Vec<CmdsProgram>,
}

impl SystemState for CmdsSystem {
    fn is_default(&self) -> bool {
        self.programs.iter().all(SystemState::is_default)
    }
}

/// A numbered ALE-47 manual program (1..=6).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ale47Program {
    pub number: u8,
    #[serde(default)]
    pub chaff_quantity: Option<u8>,
    #[serde(default)]
    pub flare_quantity: Option<u8>,
    #[serde(default)]
    pub repeat: Option<u8>,
    /// Seconds between repeats as entered, e.g. `"0.50"`.
    #[serde(default)]
    pub interval: Option<String>,
}

impl Ale47Program {
    /// Fields in page order: chaff, flare, repeat, interval.
    pub fn fields(&self) -> [Option<String>; 4] {
        [
            self.chaff_quantity.map(|q| q.to_string()),
            self.flare_quantity.map(|q| q.to_string()),
            self.repeat.map(|r| r.to_string()),
            non_blank(self.interval.as_ref()).map(str::to_string),
        ]
    }
}

impl SystemState for Ale47Program {
    fn is_default(&self) -> bool {
        self.fields().iter().all(Option::is_none)
    }
}

/// F/A-18 ALE-47 programs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ale47System {
    #[serde(default)]
    pub programs: Vec<Ale47Program>,
}

impl SystemState for Ale47System {
    fn is_default(&self) -> bool {
        self.programs.iter().all(SystemState::is_default)
    }
}
