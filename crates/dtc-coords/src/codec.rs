//! Conversion between decimal degrees and coordinate text.
//!
//! Text layout, with `’` (U+2019) after minutes and `”` (U+201D) after seconds:
//!
//! | format | latitude          | longitude          |
//! |--------|-------------------|--------------------|
//! | DDM-3  | `N 41° 36.123’`   | `E 041° 36.123’`   |
//! | DDM-0  | `N 41° 36’`       | `E 041° 36’`       |
//! | DMS    | `N 41° 36’ 07”`   | `E 041° 36’ 07”`   |
//!
//! Without zero fill the integer fields lose their leading zeros; fractional
//! minute digits always keep their declared width.

use std::collections::HashMap;
use std::sync::OnceLock;

use dtc_errors::{CoordResult, CoordinateError};
use regex::{Captures, Regex};

use crate::format::{AngularFormat, Axis, CoordinateFormat};

/// Added to the scaled magnitude before truncation so values that sit exactly
/// on a unit boundary are not pushed below it by binary representation error.
const TRUNCATION_EPSILON: f64 = 1e-6;

/// Format a signed decimal-degree value.
///
/// # Errors
///
/// Returns [`CoordinateError::OutOfRange`] for non-finite values or values
/// beyond ±90 (latitude) / ±180 (longitude).
pub fn to_text(value: f64, format: CoordinateFormat, axis: Axis) -> CoordResult<String> {
    let limit = axis.limit() as f64;
    if !value.is_finite() || value.abs() > limit {
        return Err(CoordinateError::out_of_range(value, -limit, limit));
    }

    let hemisphere = axis.hemisphere_for(value);
    let units = format.units_per_degree();
    let total = truncate_units(value.abs(), units);
    let degrees = integer_field(total / units, axis.degree_width(), format);
    let remainder = total % units;

    let text = match format.angular() {
        AngularFormat::Ddm { decimals: 0 } => {
            let minutes = integer_field(remainder, 2, format);
            format!("{hemisphere} {degrees}° {minutes}’")
        }
        AngularFormat::Ddm { decimals } => {
            let scale = format.minute_scale();
            let minutes = integer_field(remainder / scale, 2, format);
            let fraction = remainder % scale;
            let width = usize::from(decimals);
            format!("{hemisphere} {degrees}° {minutes}.{fraction:0width$}’")
        }
        AngularFormat::Dms => {
            let minutes = integer_field(remainder / 60, 2, format);
            let seconds = integer_field(remainder % 60, 2, format);
            format!("{hemisphere} {degrees}° {minutes}’ {seconds}”")
        }
    };
    Ok(text)
}

/// Parse coordinate text that must match `format` exactly.
///
/// `S` and `W` produce negative values.
///
/// # Errors
///
/// Returns [`CoordinateError::Format`] when the hemisphere letter, field
/// widths or separators do not match, when minutes or seconds reach 60, or
/// when the value exceeds the axis limit.
pub fn from_text(text: &str, format: CoordinateFormat, axis: Axis) -> CoordResult<f64> {
    let mismatch = || CoordinateError::format(text, format.to_string());

    let caps = pattern(format, axis)
        .and_then(|re| re.captures(text))
        .ok_or_else(mismatch)?;

    let degrees = field(&caps, "deg").ok_or_else(mismatch)?;
    let minutes = field(&caps, "min").ok_or_else(mismatch)?;
    if minutes >= 60 {
        return Err(mismatch());
    }

    let units = format.units_per_degree();
    let minute_units = match format.angular() {
        AngularFormat::Dms => {
            let seconds = field(&caps, "sec").ok_or_else(mismatch)?;
            if seconds >= 60 {
                return Err(mismatch());
            }
            minutes * 60 + seconds
        }
        AngularFormat::Ddm { decimals: 0 } => minutes,
        AngularFormat::Ddm { .. } => {
            let fraction = field(&caps, "frac").ok_or_else(mismatch)?;
            minutes * format.minute_scale() + fraction
        }
    };

    let total = degrees * units + minute_units;
    if total > axis.limit() * units {
        return Err(mismatch());
    }

    let magnitude = total as f64 / units as f64;
    let negative = caps
        .name("hemi")
        .is_some_and(|m| m.as_str().starts_with(axis.hemispheres().1));
    Ok(if negative { -magnitude } else { magnitude })
}

/// Remove leading zeros from every integer field, keeping at least one digit.
///
/// Fractional minute digits, the hemisphere letter and separators are left
/// untouched, so the result is a fixed point: stripping twice changes nothing.
pub fn strip_zero_fill(text: &str) -> String {
    match strip_pattern() {
        Some(re) => re.replace_all(text, "${lead}${digit}").into_owned(),
        None => text.to_string(),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "magnitude is non-negative and at most 180 degrees, so the scaled value fits in u64"
)]
fn truncate_units(magnitude: f64, units_per_degree: u64) -> u64 {
    (magnitude * units_per_degree as f64 + TRUNCATION_EPSILON).floor() as u64
}

fn integer_field(value: u64, width: usize, format: CoordinateFormat) -> String {
    if format.is_zero_filled() {
        format!("{value:0width$}")
    } else {
        value.to_string()
    }
}

fn field(caps: &Captures<'_>, name: &str) -> Option<u64> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

fn pattern(format: CoordinateFormat, axis: Axis) -> Option<&'static Regex> {
    static PATTERNS: OnceLock<HashMap<(CoordinateFormat, Axis), Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            CoordinateFormat::ALL
                .iter()
                .flat_map(|&format| {
                    [Axis::Latitude, Axis::Longitude].map(move |axis| (format, axis))
                })
                .filter_map(|(format, axis)| {
                    Regex::new(&pattern_source(format, axis))
                        .ok()
                        .map(|re| ((format, axis), re))
                })
                .collect()
        })
        .get(&(format, axis))
}

fn pattern_source(format: CoordinateFormat, axis: Axis) -> String {
    let (positive, negative) = axis.hemispheres();
    let integer = |width: usize| {
        if format.is_zero_filled() {
            format!(r"\d{{{width}}}")
        } else {
            format!(r"0|[1-9]\d{{0,{}}}", width - 1)
        }
    };
    let degrees = integer(axis.degree_width());
    let minutes = integer(2);

    let body = match format.angular() {
        AngularFormat::Dms => {
            format!(r"(?P<deg>{degrees})° (?P<min>{minutes})’ (?P<sec>{minutes})”")
        }
        AngularFormat::Ddm { decimals: 0 } => format!(r"(?P<deg>{degrees})° (?P<min>{minutes})’"),
        AngularFormat::Ddm { decimals } => {
            format!(r"(?P<deg>{degrees})° (?P<min>{minutes})\.(?P<frac>\d{{{decimals}}})’")
        }
    };
    format!(r"^(?P<hemi>[{positive}{negative}]) {body}$")
}

fn strip_pattern() -> Option<&'static Regex> {
    static STRIP: OnceLock<Option<Regex>> = OnceLock::new();
    STRIP
        .get_or_init(|| Regex::new(r"(?P<lead>^|[^0-9.])0+(?P<digit>[0-9])").ok())
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), CoordinateError>;

    fn spec_latitude() -> f64 {
        8.0 + 5.05 / 60.0
    }

    #[test]
    fn test_ddm2_zero_filled_example() -> TestResult {
        let text = to_text(spec_latitude(), CoordinateFormat::DDM_2, Axis::Latitude)?;
        assert_eq!(text, "N 08° 05.05’");
        assert_eq!(strip_zero_fill(&text), "N 8° 5.05’");
        Ok(())
    }

    #[test]
    fn test_both_forms_decode_within_a_hundredth_minute() -> TestResult {
        let filled = from_text("N 08° 05.05’", CoordinateFormat::DDM_2, Axis::Latitude)?;
        let stripped = from_text(
            "N 8° 5.05’",
            CoordinateFormat::DDM_2.without_zero_fill(),
            Axis::Latitude,
        )?;
        let tolerance = 0.01 / 60.0;
        assert!((filled - spec_latitude()).abs() <= tolerance);
        assert!((stripped - spec_latitude()).abs() <= tolerance);
        Ok(())
    }

    #[test]
    fn test_truncates_instead_of_rounding() -> TestResult {
        // 36.1239 minutes must show as 36.123, never 36.124
        let value = 41.0 + 36.1239 / 60.0;
        let text = to_text(value, CoordinateFormat::DDM_3, Axis::Latitude)?;
        assert_eq!(text, "N 41° 36.123’");

        // 59.9 seconds stays 59
        let value = -(41.0 + 36.0 / 60.0 + 59.9 / 3600.0);
        let text = to_text(value, CoordinateFormat::DMS, Axis::Longitude)?;
        assert_eq!(text, "W 041° 36’ 59”");
        Ok(())
    }

    #[test]
    fn test_ddm0_has_no_fraction() -> TestResult {
        let text = to_text(-0.5, CoordinateFormat::DDM_0, Axis::Longitude)?;
        assert_eq!(text, "W 000° 30’");
        let stripped = strip_zero_fill(&text);
        assert_eq!(stripped, "W 0° 30’");
        let back = from_text(
            &stripped,
            CoordinateFormat::DDM_0.without_zero_fill(),
            Axis::Longitude,
        )?;
        assert!((back + 0.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_unpadded_format_keeps_fraction_width() -> TestResult {
        let format = CoordinateFormat::DDM_3.without_zero_fill();
        let text = to_text(3.0 + 4.05 / 60.0, format, Axis::Latitude)?;
        assert_eq!(text, "N 3° 4.050’");
        Ok(())
    }

    #[test]
    fn test_limits() -> TestResult {
        assert_eq!(
            to_text(90.0, CoordinateFormat::DMS, Axis::Latitude)?,
            "N 90° 00’ 00”"
        );
        assert_eq!(
            to_text(-180.0, CoordinateFormat::DDM_1, Axis::Longitude)?,
            "W 180° 00.0’"
        );
        assert!(to_text(90.0001, CoordinateFormat::DMS, Axis::Latitude).is_err());
        assert!(to_text(f64::NAN, CoordinateFormat::DMS, Axis::Latitude).is_err());
        assert!(from_text("N 90° 00.1’", CoordinateFormat::DDM_1, Axis::Latitude).is_err());
        Ok(())
    }

    #[test]
    fn test_rejects_malformed_text() {
        let cases = [
            ("N 8° 05.05’", CoordinateFormat::DDM_2),
            ("N 08° 05.050’", CoordinateFormat::DDM_2),
            ("N 08° 60.00’", CoordinateFormat::DDM_2),
            ("E 08° 05.05’", CoordinateFormat::DDM_2),
            ("N 08°05.05’", CoordinateFormat::DDM_2),
            ("N 08° 05’ 60”", CoordinateFormat::DMS),
            ("N 08° 05.05'", CoordinateFormat::DDM_2),
            ("", CoordinateFormat::DMS),
        ];
        for (text, format) in cases {
            assert!(
                from_text(text, format, Axis::Latitude).is_err(),
                "{text:?} should not parse as {format}"
            );
        }
    }

    #[test]
    fn test_unpadded_parser_rejects_leading_zeros() {
        let format = CoordinateFormat::DMS.without_zero_fill();
        assert!(from_text("N 08° 5’ 3”", format, Axis::Latitude).is_err());
        assert!(from_text("N 8° 5’ 3”", format, Axis::Latitude).is_ok());
        assert!(from_text("N 0° 0’ 0”", format, Axis::Latitude).is_ok());
    }

    #[test]
    fn test_strip_zero_fill_keeps_fraction_digits() {
        assert_eq!(strip_zero_fill("S 00° 00.005’"), "S 0° 0.005’");
        assert_eq!(strip_zero_fill("E 100° 05’ 00”"), "E 100° 5’ 0”");
        assert_eq!(strip_zero_fill("N 8° 5.05’"), "N 8° 5.05’");
    }
}
