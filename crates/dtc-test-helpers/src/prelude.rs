//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use dtc_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_parse, must_some, must_with};
pub use crate::{assert_approx_eq, assert_contains_run};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    dispense, gapped_route, hornet_mission, mirage_route, mission, route, viper_mission,
    warthog_route,
};

#[cfg(feature = "mock")]
pub use crate::mock::RecordingTransport;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
