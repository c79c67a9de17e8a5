//! Property-based tests for the coordinate codec laws.

use dtc_coords::{AngularFormat, Axis, CoordinateFormat, from_text, strip_zero_fill, to_text};
use proptest::prelude::*;

fn any_format() -> impl Strategy<Value = CoordinateFormat> {
    prop::sample::select(CoordinateFormat::ALL.to_vec())
}

fn any_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Latitude), Just(Axis::Longitude)]
}

fn units(format: CoordinateFormat) -> u64 {
    match format.angular() {
        AngularFormat::Dms => 3600,
        AngularFormat::Ddm { decimals } => 60 * 10u64.pow(u32::from(decimals)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_round_trip_at_format_resolution(
        format in any_format(),
        axis in any_axis(),
        raw in any::<u64>(),
        negative in any::<bool>(),
    ) {
        let per_degree = units(format);
        let steps = raw % (axis.limit() * per_degree + 1);
        let magnitude = steps as f64 / per_degree as f64;
        let value = if negative { -magnitude } else { magnitude };

        let text = to_text(value, format, axis)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back = from_text(&text, format, axis)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!((back - value).abs() < 1e-9, "{value} -> {text} -> {back}");
    }

    #[test]
    fn test_truncation_never_rounds_up(
        format in any_format(),
        axis in any_axis(),
        fraction in -1.0f64..=1.0,
    ) {
        let value = fraction * axis.limit() as f64;
        let text = to_text(value, format, axis)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back = from_text(&text, format, axis)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(back.abs() <= value.abs() + 1e-9);
        prop_assert!(value.abs() - back.abs() < format.resolution() + 1e-9);
    }

    #[test]
    fn test_strip_zero_fill_is_idempotent(
        format in any_format(),
        axis in any_axis(),
        fraction in -1.0f64..=1.0,
    ) {
        let text = to_text(fraction * axis.limit() as f64, format, axis)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let once = strip_zero_fill(&text);
        prop_assert_eq!(strip_zero_fill(&once), once);
    }

    #[test]
    fn test_stripped_text_matches_unpadded_format(
        format in any_format(),
        axis in any_axis(),
        fraction in -1.0f64..=1.0,
    ) {
        let value = fraction * axis.limit() as f64;
        let filled = to_text(value, format.with_zero_fill(), axis)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let unpadded = to_text(value, format.without_zero_fill(), axis)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(strip_zero_fill(&filled), unpadded.clone());
        prop_assert!(from_text(&unpadded, format.without_zero_fill(), axis).is_ok());
    }

    #[test]
    fn test_parsed_values_stay_in_range(text in "\\PC{0,24}", format in any_format(), axis in any_axis()) {
        if let Ok(value) = from_text(&text, format, axis) {
            prop_assert!(value.abs() <= axis.limit() as f64);
        }
    }
}
