//! Fuzzes decoding of command stream text.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_stream_decode

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Must never panic on arbitrary text.
        let _ = dtc_stream::decode(text);
    }
});
