//! Fuzz target for merging and rendering arbitrary diagnostics.
//!
//! Goal: the pipeline should **never panic**, and merging must keep every occurrence.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_merge_render
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lint2prompt_domain::{InMemoryContext, build_diagnostics_data, merge_entries};
use lint2prompt_render::{render_compact, render_json, render_text};
use lint2prompt_types::{
    DiagnosticCode, DiagnosticRecord, DiagnosticSeverity, FileDiagnostics, Range,
};

#[derive(Arbitrary, Debug)]
struct FuzzDiagnostic {
    severity: u8,
    code: Option<String>,
    message: String,
    start_line: u32,
    start_col: u32,
    line_span: u8,
}

#[derive(Arbitrary, Debug)]
struct FuzzFile {
    path: String,
    text: String,
    diagnostics: Vec<FuzzDiagnostic>,
}

fn record(d: FuzzDiagnostic) -> DiagnosticRecord {
    let severity = match d.severity % 5 {
        0 => DiagnosticSeverity::Error,
        1 => DiagnosticSeverity::Warning,
        2 => DiagnosticSeverity::Information,
        3 => DiagnosticSeverity::Hint,
        _ => DiagnosticSeverity::Unrecognized,
    };
    let end_line = d.start_line.saturating_add(u32::from(d.line_span));
    DiagnosticRecord {
        severity,
        code: d.code.map(DiagnosticCode::Scalar).unwrap_or_default(),
        message: d.message,
        range: Range::lines(d.start_line, d.start_col, end_line, 0),
        source: None,
    }
}

fuzz_target!(|input: Vec<FuzzFile>| {
    if input.len() > 16 {
        return;
    }

    let mut ctx = InMemoryContext::new();
    let mut files = Vec::new();
    for file in input {
        if file.diagnostics.len() > 64 || file.text.len() > 4096 {
            return;
        }
        ctx.insert(file.path.as_str(), file.text);
        files.push(FileDiagnostics::new(
            file.path,
            file.diagnostics.into_iter().map(record).collect(),
        ));
    }

    // Per-entry merging keeps every occurrence, repeated paths included.
    let reports = merge_entries(&files, &ctx);
    let merged: usize = reports
        .iter()
        .flat_map(|r| r.issues.iter())
        .map(|i| i.locations.len())
        .sum();
    let total: usize = files.iter().map(|f| f.diagnostics.len()).sum();
    assert_eq!(merged, total);

    let data = build_diagnostics_data(&files, &ctx);

    // The keyed view keeps the issues of a repeated path's last non-empty entry.
    let mut expected = 0;
    for report in data.files() {
        let last = files
            .iter()
            .rev()
            .find(|f| f.path == report.path && !f.diagnostics.is_empty());
        expected += last.map(|f| f.diagnostics.len()).unwrap_or(0);
    }
    assert_eq!(data.location_count(), expected);

    let _ = render_compact(&reports);
    let _ = render_text(&files);
    let _ = render_json(&data);
});
