//! Aircraft types and their per-aircraft configuration records.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SystemState;
use crate::countermeasures::{Ale47System, CmdsSystem};
use crate::datalink::DatalinkSystem;
use crate::radio::RadioSystem;
use crate::waypoints::WaypointSystem;

/// Supported aircraft, identified on the wire by the simulator's module id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Aircraft {
    #[serde(rename = "F-16C_50")]
    F16C,
    #[serde(rename = "FA-18C_hornet")]
    FA18C,
    #[serde(rename = "A-10C")]
    A10C,
    #[serde(rename = "M-2000C")]
    M2000C,
}

impl Aircraft {
    pub const ALL: [Aircraft; 4] = [
        Aircraft::F16C,
        Aircraft::FA18C,
        Aircraft::A10C,
        Aircraft::M2000C,
    ];

    /// Simulator module id.
    pub const fn module_id(self) -> &'static str {
        match self {
            Aircraft::F16C => "F-16C_50",
            Aircraft::FA18C => "FA-18C_hornet",
            Aircraft::A10C => "A-10C",
            Aircraft::M2000C => "M-2000C",
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Aircraft::F16C => "F-16C",
            Aircraft::FA18C => "F/A-18C",
            Aircraft::A10C => "A-10C",
            Aircraft::M2000C => "M-2000C",
        }
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name that matches no supported aircraft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAircraft(pub String);

impl fmt::Display for UnknownAircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown aircraft: {}", self.0)
    }
}

impl std::error::Error for UnknownAircraft {}

/// Accepts the module id or the display name, ignoring case.
impl FromStr for Aircraft {
    type Err = UnknownAircraft;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Aircraft::ALL
            .into_iter()
            .find(|a| {
                a.module_id().eq_ignore_ascii_case(wanted) || a.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownAircraft(s.to_string()))
    }
}

/// F-16C: steerpoints, COM1/COM2 presets, CMDS programs, datalink team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct F16Configuration {
    #[serde(default)]
    pub steerpoints: WaypointSystem,
    #[serde(default)]
    pub radios: RadioSystem,
    #[serde(default)]
    pub cmds: CmdsSystem,
    #[serde(default)]
    pub datalink: DatalinkSystem,
}

impl SystemState for F16Configuration {
    fn is_default(&self) -> bool {
        self.steerpoints.is_default()
            && self.radios.is_default()
            && self.cmds.is_default()
            && self.datalink.is_default()
    }
}

/// F/A-18C: waypoints, COMM1/COMM2 presets, ALE-47 programs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FA18Configuration {
    #[serde(default)]
    pub waypoints: WaypointSystem,
    #[serde(default)]
    pub radios: RadioSystem,
    #[serde(default)]
    pub ale47: Ale47System,
}

impl SystemState for FA18Configuration {
    fn is_default(&self) -> bool {
        self.waypoints.is_default() && self.radios.is_default() && self.ale47.is_default()
    }
}

/// A-10C: CDU waypoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct A10Configuration {
    #[serde(default)]
    pub waypoints: WaypointSystem,
}

impl SystemState for A10Configuration {
    fn is_default(&self) -> bool {
        self.waypoints.is_default()
    }
}

/// M-2000C: PCN waypoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct M2000Configuration {
    #[serde(default)]
    pub waypoints: WaypointSystem,
}

impl SystemState for M2000Configuration {
    fn is_default(&self) -> bool {
        self.waypoints.is_default()
    }
}

/// Configuration for one aircraft, tagged by module id.
///
/// ```
/// use dtc_config::{Aircraft, AircraftConfiguration};
///
/// let config: AircraftConfiguration = serde_json::from_str(r#"{"aircraft": "M-2000C"}"#)?;
/// assert_eq!(config.aircraft(), Aircraft::M2000C);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "aircraft")]
pub enum AircraftConfiguration {
    #[serde(rename = "F-16C_50")]
    F16C(F16Configuration),
    #[serde(rename = "FA-18C_hornet")]
    FA18C(FA18Configuration),
    #[serde(rename = "A-10C")]
    A10C(A10Configuration),
    #[serde(rename = "M-2000C")]
    M2000C(M2000Configuration),
}

impl AircraftConfiguration {
    /// All-default configuration for `aircraft`.
    pub fn empty(aircraft: Aircraft) -> Self {
        match aircraft {
            Aircraft::F16C => Self::F16C(F16Configuration::default()),
            Aircraft::FA18C => Self::FA18C(FA18Configuration::default()),
            Aircraft::A10C => Self::A10C(A10Configuration::default()),
            Aircraft::M2000C => Self::M2000C(M2000Configuration::default()),
        }
    }

    pub fn aircraft(&self) -> Aircraft {
        match self {
            Self::F16C(_) => Aircraft::F16C,
            Self::FA18C(_) => Aircraft::FA18C,
            Self::A10C(_) => Aircraft::A10C,
            Self::M2000C(_) => Aircraft::M2000C,
        }
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed documents, unknown
    /// aircraft tags and unknown fields in subsystem records.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl SystemState for AircraftConfiguration {
    fn is_default(&self) -> bool {
        match self {
            Self::F16C(c) => c.is_default(),
            Self::FA18C(c) => c.is_default(),
            Self::A10C(c) => c.is_default(),
            Self::M2000C(c) => c.is_default(),
        }
    }
}
