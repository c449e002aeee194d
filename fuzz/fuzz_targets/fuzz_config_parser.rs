//! Fuzz target for `lint2prompt.toml` parsing and resolution.
//!
//! Goal: config loading should **never panic**; invalid TOML, unknown keys, and bad ignore
//! patterns must surface as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use lint2prompt_settings::{Overrides, load_config};

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = load_config(text, Overrides::default());
    }
});
