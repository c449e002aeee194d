//! Fuzz target for ignore pattern compilation and tool-name matching.
//!
//! Goal: compiling patterns and matching tool names should **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_ignore_patterns
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lint2prompt_domain::IgnoreList;

#[derive(Arbitrary, Debug)]
struct IgnoreInput {
    /// Patterns such as "eslint*" or "cSpell"
    patterns: Vec<String>,
    /// Tool names to match against
    tools: Vec<String>,
}

fuzz_target!(|input: IgnoreInput| {
    if input.patterns.len() > 20 || input.tools.len() > 100 {
        return;
    }

    let patterns: Vec<String> = input
        .patterns
        .into_iter()
        .filter(|p| p.len() <= 256)
        .collect();

    let Ok(list) = IgnoreList::new(patterns.as_slice()) else {
        return;
    };

    for tool in input.tools.iter().filter(|t| t.len() <= 512) {
        let _ = list.matches_tool(tool);
    }
});
