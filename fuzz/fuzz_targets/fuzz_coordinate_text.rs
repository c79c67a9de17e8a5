//! Fuzzes the coordinate text parser and zero-fill stripping.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_coordinate_text

#![no_main]

use dtc_coords::{Axis, CoordinateFormat, from_text, strip_zero_fill, to_text};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let stripped = strip_zero_fill(text);
    // Stripping is idempotent.
    assert_eq!(strip_zero_fill(&stripped), stripped);

    for format in CoordinateFormat::ALL {
        for axis in [Axis::Latitude, Axis::Longitude] {
            // Must never panic; accepted text re-renders in the same format.
            if let Ok(value) = from_text(text, format, axis) {
                assert!(to_text(value, format, axis).is_ok());
            }
        }
    }
});
