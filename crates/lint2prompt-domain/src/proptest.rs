//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Severity and code normalization totality
//! - Ignore filtering
//! - Merge ordering and occurrence preservation
//! - Context slicing bounds

use crate::context::{InMemoryContext, slice_lines};
use crate::filter::{IgnoreList, filter_diagnostics};
use crate::merge::{build_diagnostics_data, merge_file};
use crate::normalize::{code_label, severity_label};
use camino::Utf8Path;
use lint2prompt_types::{
    DiagnosticCode, DiagnosticRecord, DiagnosticSeverity, FileDiagnostics, Range, SeverityLabel,
};
use proptest::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// Strategies
// ============================================================================

fn arb_severity() -> impl Strategy<Value = DiagnosticSeverity> {
    prop_oneof![
        Just(DiagnosticSeverity::Error),
        Just(DiagnosticSeverity::Warning),
        Just(DiagnosticSeverity::Information),
        Just(DiagnosticSeverity::Hint),
        Just(DiagnosticSeverity::Unrecognized),
    ]
}

/// Arbitrary JSON shapes a source may attach as a code.
fn arb_code_json() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        any::<String>().prop_map(|s| Some(json!(s))),
        any::<i64>().prop_map(|n| Some(json!(n))),
        any::<bool>().prop_map(|b| Some(json!(b))),
        any::<String>().prop_map(|s| Some(json!({ "value": s }))),
        any::<String>().prop_map(|s| Some(json!({ "target": s }))),
    ]
}

fn arb_tool() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        prop::string::string_regex("[A-Za-z][A-Za-z0-9_-]{0,12}")
            .unwrap()
            .prop_map(Some),
    ]
}

fn arb_diagnostic() -> impl Strategy<Value = DiagnosticRecord> {
    (
        arb_severity(),
        prop::sample::select(vec!["E1", "E2", "W1"]),
        prop::sample::select(vec!["bad", "worse"]),
        0u32..40,
        0u32..5,
        0u32..80,
        arb_tool(),
    )
        .prop_map(|(severity, code, message, line, span, col, source)| {
            DiagnosticRecord {
                severity,
                code: DiagnosticCode::scalar(code),
                message: message.to_string(),
                range: Range::lines(line, col, line + span, col + 1),
                source,
            }
        })
}

proptest! {
    #[test]
    fn severity_label_is_one_of_five(severity in arb_severity()) {
        prop_assert!(SeverityLabel::ALL.contains(&severity_label(severity)));
    }

    #[test]
    fn code_label_is_empty_only_for_an_empty_value_member(raw in arb_code_json()) {
        let label = code_label(&DiagnosticCode::from_json(raw.as_ref()));
        prop_assert_eq!(label.is_empty(), raw == Some(json!({ "value": "" })));
    }

    #[test]
    fn empty_ignore_list_keeps_everything(diags in prop::collection::vec(arb_diagnostic(), 0..20)) {
        let kept = filter_diagnostics(&IgnoreList::empty(), &diags);
        prop_assert_eq!(kept, diags);
    }

    #[test]
    fn ignore_list_never_drops_unnamed_sources(
        patterns in prop::collection::vec("[a-z*]{0,6}", 1..4),
        diags in prop::collection::vec(arb_diagnostic(), 0..20),
    ) {
        let ignore = IgnoreList::new(patterns.as_slice()).expect("escaped patterns compile");
        let kept = filter_diagnostics(&ignore, &diags);
        let unnamed_before = diags.iter().filter(|d| d.source_name().is_none()).count();
        let unnamed_after = kept.iter().filter(|d| d.source_name().is_none()).count();
        prop_assert_eq!(unnamed_before, unnamed_after);
        prop_assert!(kept.iter().all(|d| !ignore.is_ignored(d)));
    }

    #[test]
    fn merge_preserves_every_occurrence(diags in prop::collection::vec(arb_diagnostic(), 0..30)) {
        let ctx = InMemoryContext::new();
        let issues = merge_file(Utf8Path::new("/f.rs"), &diags, &ctx);
        let total: usize = issues.iter().map(|i| i.locations.len()).sum();
        prop_assert_eq!(total, diags.len());
    }

    #[test]
    fn merged_identities_are_unique(diags in prop::collection::vec(arb_diagnostic(), 0..30)) {
        let ctx = InMemoryContext::new();
        let issues = merge_file(Utf8Path::new("/f.rs"), &diags, &ctx);
        for (i, a) in issues.iter().enumerate() {
            for b in issues.iter().skip(i + 1) {
                prop_assert!(
                    (a.code.as_str(), a.severity, a.message.as_str())
                        != (b.code.as_str(), b.severity, b.message.as_str())
                );
            }
        }
    }

    #[test]
    fn locations_ascend_within_an_issue(diags in prop::collection::vec(arb_diagnostic(), 0..30)) {
        let ctx = InMemoryContext::new();
        let issues = merge_file(Utf8Path::new("/f.rs"), &diags, &ctx);
        for issue in &issues {
            for pair in issue.locations.windows(2) {
                prop_assert!(pair[0].start_line() <= pair[1].start_line());
            }
        }
    }

    #[test]
    fn merging_is_deterministic(diags in prop::collection::vec(arb_diagnostic(), 0..30)) {
        let ctx = InMemoryContext::new();
        let files = vec![FileDiagnostics::new("/f.rs", diags)];
        prop_assert_eq!(
            build_diagnostics_data(&files, &ctx),
            build_diagnostics_data(&files, &ctx)
        );
    }

    #[test]
    fn slice_never_exceeds_requested_line_count(
        lines in prop::collection::vec("[a-z ]{0,8}", 1..20),
        start in 0u32..30,
        len in 0u32..10,
    ) {
        let text = lines.join("\n");
        let out = slice_lines(&text, start, start + len);
        if start as usize >= lines.len() {
            prop_assert_eq!(out, "");
        } else {
            let end = ((start + len) as usize).min(lines.len() - 1);
            prop_assert_eq!(out, lines[start as usize..=end].join("\n"));
        }
    }
}
