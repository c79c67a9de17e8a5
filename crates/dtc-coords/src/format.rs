//! Angular text formats and the axis they apply to.

use core::fmt;
use core::str::FromStr;

use dtc_errors::{CoordResult, CoordinateError};
use serde::{Deserialize, Serialize};

/// Which half of a position a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// North/south, -90..=90
    Latitude,
    /// East/west, -180..=180
    Longitude,
}

impl Axis {
    /// Largest absolute value in whole degrees.
    pub const fn limit(self) -> u64 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }

    /// Width of the zero-filled degree field.
    pub const fn degree_width(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }

    /// Hemisphere letters as (positive, negative).
    pub const fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }

    /// Hemisphere letter for a signed value.
    pub fn hemisphere_for(self, value: f64) -> char {
        let (positive, negative) = self.hemispheres();
        if value < 0.0 { negative } else { positive }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// How the magnitude is split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AngularFormat {
    /// Degrees, minutes and integer seconds
    Dms,
    /// Degrees and minutes with a fixed number of fractional minute digits
    Ddm {
        /// Fractional minute digits, 0..=3
        decimals: u8,
    },
}

/// A complete text format: angular split plus zero-fill convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinateFormat {
    angular: AngularFormat,
    zero_fill: bool,
}

impl CoordinateFormat {
    /// Largest supported number of fractional minute digits.
    pub const MAX_DECIMALS: u8 = 3;

    /// Zero-filled degrees, minutes, seconds.
    pub const DMS: Self = Self::new(AngularFormat::Dms);
    /// Zero-filled degrees and whole minutes.
    pub const DDM_0: Self = Self::new(AngularFormat::Ddm { decimals: 0 });
    /// Zero-filled degrees and minutes with one decimal.
    pub const DDM_1: Self = Self::new(AngularFormat::Ddm { decimals: 1 });
    /// Zero-filled degrees and minutes with two decimals.
    pub const DDM_2: Self = Self::new(AngularFormat::Ddm { decimals: 2 });
    /// Zero-filled degrees and minutes with three decimals.
    pub const DDM_3: Self = Self::new(AngularFormat::Ddm { decimals: 3 });

    /// Every supported format, zero-filled variants first.
    pub const ALL: [Self; 10] = [
        Self::DMS,
        Self::DDM_0,
        Self::DDM_1,
        Self::DDM_2,
        Self::DDM_3,
        Self::DMS.without_zero_fill(),
        Self::DDM_0.without_zero_fill(),
        Self::DDM_1.without_zero_fill(),
        Self::DDM_2.without_zero_fill(),
        Self::DDM_3.without_zero_fill(),
    ];

    const fn new(angular: AngularFormat) -> Self {
        Self {
            angular,
            zero_fill: true,
        }
    }

    /// Zero-filled degrees-decimal-minutes with `decimals` fractional digits.
    pub fn ddm(decimals: u8) -> CoordResult<Self> {
        if decimals > Self::MAX_DECIMALS {
            return Err(CoordinateError::UnsupportedPrecision(decimals));
        }
        Ok(Self::new(AngularFormat::Ddm { decimals }))
    }

    /// The same split without leading-zero padding on integer fields.
    pub const fn without_zero_fill(self) -> Self {
        Self {
            angular: self.angular,
            zero_fill: false,
        }
    }

    /// The same split with fixed-width integer fields.
    pub const fn with_zero_fill(self) -> Self {
        Self {
            angular: self.angular,
            zero_fill: true,
        }
    }

    /// Angular split of this format.
    pub const fn angular(self) -> AngularFormat {
        self.angular
    }

    /// Whether integer fields are padded to a fixed width.
    pub const fn is_zero_filled(self) -> bool {
        self.zero_fill
    }

    /// Fractional minute digits; zero for DMS.
    pub const fn decimals(self) -> u8 {
        match self.angular {
            AngularFormat::Dms => 0,
            AngularFormat::Ddm { decimals } => decimals,
        }
    }

    /// 10^decimals: smallest minute unit per whole minute.
    pub(crate) const fn minute_scale(self) -> u64 {
        10u64.pow(self.decimals() as u32)
    }

    /// Smallest representable unit per whole degree.
    pub(crate) const fn units_per_degree(self) -> u64 {
        match self.angular {
            AngularFormat::Dms => 3600,
            AngularFormat::Ddm { .. } => 60 * self.minute_scale(),
        }
    }

    /// Size of one representable unit in decimal degrees.
    pub fn resolution(self) -> f64 {
        1.0 / self.units_per_degree() as f64
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angular {
            AngularFormat::Dms => write!(f, "DMS")?,
            AngularFormat::Ddm { decimals } => write!(f, "DDM-{decimals}")?,
        }
        if self.zero_fill {
            write!(f, " zero-filled")?;
        }
        Ok(())
    }
}

/// Parses command-line style names: `dms`, `ddm0`..`ddm3`, optionally suffixed
/// with `-nofill`.
impl FromStr for CoordinateFormat {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let (base, zero_fill) = match lowered.strip_suffix("-nofill") {
            Some(base) => (base, false),
            None => (lowered.as_str(), true),
        };
        let format = match base {
            "dms" => Self::DMS,
            other => {
                let decimals = other
                    .strip_prefix("ddm")
                    .and_then(|d| d.parse::<u8>().ok())
                    .ok_or_else(|| CoordinateError::UnknownFormat(s.to_string()))?;
                Self::ddm(decimals)?
            }
        };
        Ok(if zero_fill {
            format
        } else {
            format.without_zero_fill()
        })
    }
}
