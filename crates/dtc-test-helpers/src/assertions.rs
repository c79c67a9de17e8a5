//! Assertion macros.

/// Assert that two floating-point values are within `tolerance`.
///
/// ```rust
/// use dtc_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(8.084166, 8.0 + 5.05 / 60.0, 1e-5);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
}

/// Assert that `needle` occurs in `haystack` as a contiguous run.
///
/// Used on explained keystroke lines to pin one entry's sequence without
/// spelling out the whole upload.
///
/// ```rust
/// use dtc_test_helpers::assert_contains_run;
///
/// let lines = ["UFC 4", "UFC 1", "UFC ENTR", "UFC RTN"];
/// assert_contains_run!(lines, ["UFC 1", "UFC ENTR"]);
/// ```
#[macro_export]
macro_rules! assert_contains_run {
    ($haystack:expr, $needle:expr $(,)?) => {
        let haystack: Vec<String> = $haystack.iter().map(|s| s.to_string()).collect();
        let needle: Vec<String> = $needle.iter().map(|s| s.to_string()).collect();
        let found = needle.is_empty()
            || haystack
                .windows(needle.len())
                .any(|window| window == needle.as_slice());
        if !found {
            panic!(
                "assertion failed: run not found\n  run: `{:?}`,\n  in: `{:?}`",
                needle, haystack
            );
        }
    };
}
