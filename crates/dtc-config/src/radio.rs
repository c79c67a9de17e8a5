//! Radio preset subsystem.

use serde::{Deserialize, Serialize};

use crate::{SystemState, non_blank};

/// One preset channel. The frequency is kept as entered (`"305.000"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadioPreset {
    pub number: u8,
    #[serde(default)]
    pub frequency: Option<String>,
}

impl RadioPreset {
    pub fn new(number: u8, frequency: impl Into<String>) -> Self {
        Self {
            number,
            frequency: Some(frequency.into()),
        }
    }

    /// Trimmed frequency, `None` when unset or blank.
    pub fn frequency(&self) -> Option<&str> {
        non_blank(self.frequency.as_ref())
    }
}

impl SystemState for RadioPreset {
    fn is_default(&self) -> bool {
        self.frequency().is_none()
    }
}

/// Presets of a single radio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Radio {
    #[serde(default)]
    pub presets: Vec<RadioPreset>,
}

impl Radio {
    /// Presets with a frequency, in stored order.
    pub fn populated(&self) -> impl Iterator<Item = &RadioPreset> {
        self.presets.iter().filter(|p| !p.is_default())
    }
}

impl SystemState for Radio {
    fn is_default(&self) -> bool {
        self.presets.iter().all(SystemState::is_default)
    }
}

/// The two preset radios of an aircraft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadioSystem {
    #[serde(default)]
    pub com1: Radio,
    #[serde(default)]
    pub com2: Radio,
}

impl SystemState for RadioSystem {
    fn is_default(&self) -> bool {
        self.com1.is_default() && self.com2.is_default()
    }
}
