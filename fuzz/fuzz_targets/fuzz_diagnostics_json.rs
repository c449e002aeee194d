//! Fuzz target for the diagnostics JSON input adapter.
//!
//! Goal: parsing should **never panic** on any input. Malformed documents are errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_diagnostics_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Documents larger than 1MB are not interesting here
    if data.len() > 1024 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = lint2prompt_source::fuzz::parse_diagnostics(text);
    }
});
