//! Fuzzes configuration parsing and stream generation end to end.
//!
//! Any configuration that parses must assemble without error: builders skip
//! entries they cannot enter instead of failing.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_configuration_upload

#![no_main]

use dtc_aircraft::profile_for;
use dtc_config::AircraftConfiguration;
use dtc_stream::CommandAssembler;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = AircraftConfiguration::from_json_str(text) else {
        return;
    };
    let profile = profile_for(config.aircraft());
    let Ok(registry) = profile.registry() else {
        return;
    };
    let mut out = CommandAssembler::new();
    if profile.assemble(&config, &registry, &mut out).is_ok() {
        assert!(out.finalize().is_ok());
    }
});
