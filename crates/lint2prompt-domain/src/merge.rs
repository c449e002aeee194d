use crate::normalize::{code_label, severity_label};
use crate::ports::ContextSource;
use camino::Utf8Path;
use lint2prompt_types::{
    DiagnosticRecord, DiagnosticsData, FileDiagnostics, FileReport, Issue, Location, SeverityLabel,
};
use std::collections::HashMap;

/// Diagnostics ordered by (start line, start column). Stable: ties keep source order.
pub fn sorted_diagnostics(diagnostics: &[DiagnosticRecord]) -> Vec<&DiagnosticRecord> {
    let mut sorted: Vec<&DiagnosticRecord> = diagnostics.iter().collect();
    sorted.sort_by_key(|d| (d.range.start.line, d.range.start.character));
    sorted
}

/// Merge one file's diagnostics into issues keyed by `(code, severity, message)`.
///
/// Issues come out in first-encounter order; each issue's locations follow the sorted order.
pub fn merge_file<C: ContextSource + ?Sized>(
    path: &Utf8Path,
    diagnostics: &[DiagnosticRecord],
    context: &C,
) -> Vec<Issue> {
    let mut issues: Vec<Issue> = Vec::new();
    let mut index: HashMap<(String, SeverityLabel, String), usize> = HashMap::new();

    for diagnostic in sorted_diagnostics(diagnostics) {
        let code = code_label(&diagnostic.code);
        let severity = severity_label(diagnostic.severity);
        let key = (code, severity, diagnostic.message.clone());

        let slot = match index.get(&key).copied() {
            Some(slot) => slot,
            None => {
                issues.push(Issue {
                    code: key.0.clone(),
                    severity,
                    message: diagnostic.message.clone(),
                    locations: Vec::new(),
                });
                index.insert(key, issues.len() - 1);
                issues.len() - 1
            }
        };

        let range = diagnostic.range;
        issues[slot].locations.push(Location {
            lines: range.one_based_lines(),
            context: context.read_context(path, range.start.line, range.end.line),
        });
    }

    issues
}

/// Merge each input entry with at least one diagnostic on its own.
///
/// Entries are never combined, so a path listed twice yields two reports in input order.
pub fn merge_entries<C: ContextSource + ?Sized>(
    files: &[FileDiagnostics],
    context: &C,
) -> Vec<FileReport> {
    files
        .iter()
        .filter(|f| !f.diagnostics.is_empty())
        .map(|file| FileReport {
            path: file.path.clone(),
            issues: merge_file(&file.path, &file.diagnostics, context),
        })
        .collect()
}

/// Merged issues keyed by path, keeping input file order.
///
/// A repeated path keeps its first position and takes the issues of its last entry.
pub fn build_diagnostics_data<C: ContextSource + ?Sized>(
    files: &[FileDiagnostics],
    context: &C,
) -> DiagnosticsData {
    let mut data = DiagnosticsData::new();
    for report in merge_entries(files, context) {
        data.insert(report);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::InMemoryContext;
    use crate::test_support::{diag, file};
    use lint2prompt_types::{DiagnosticCode, DiagnosticSeverity, Range};

    fn source_text() -> String {
        (1..=30)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn identical_identity_merges_into_one_issue() {
        let ctx = InMemoryContext::new().with_file("/a.ts", source_text());
        let diags = vec![
            diag(DiagnosticSeverity::Error, "E1", "bad", Range::lines(19, 0, 19, 4)),
            diag(DiagnosticSeverity::Error, "E1", "bad", Range::lines(9, 0, 9, 1)),
        ];

        let issues = merge_file(Utf8Path::new("/a.ts"), &diags, &ctx);
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.code, "E1");
        assert_eq!(issue.severity, SeverityLabel::Error);
        assert_eq!(issue.locations.len(), 2);
        assert_eq!(issue.locations[0].lines, [10, 10]);
        assert_eq!(issue.locations[0].context, "line 10");
        assert_eq!(issue.locations[1].lines, [20, 20]);
        assert_eq!(issue.locations[1].context, "line 20");
    }

    #[test]
    fn identity_distinguishes_code_severity_and_message() {
        let ctx = InMemoryContext::new();
        let r = Range::lines(0, 0, 0, 1);
        let diags = vec![
            diag(DiagnosticSeverity::Error, "E1", "bad", r),
            diag(DiagnosticSeverity::Warning, "E1", "bad", r),
            diag(DiagnosticSeverity::Error, "E2", "bad", r),
            diag(DiagnosticSeverity::Error, "E1", "worse", r),
            diag(DiagnosticSeverity::Error, "E1", "bad", r),
        ];

        let issues = merge_file(Utf8Path::new("/a.ts"), &diags, &ctx);
        assert_eq!(issues.len(), 4);
        assert_eq!(issues[0].locations.len(), 2);
    }

    #[test]
    fn issues_follow_first_encounter_in_sorted_order() {
        let ctx = InMemoryContext::new();
        let diags = vec![
            diag(DiagnosticSeverity::Error, "late", "m", Range::lines(5, 0, 5, 1)),
            diag(DiagnosticSeverity::Error, "col2", "m", Range::lines(1, 2, 1, 3)),
            diag(DiagnosticSeverity::Error, "col0", "m", Range::lines(1, 0, 1, 1)),
            diag(DiagnosticSeverity::Error, "late", "m", Range::lines(0, 0, 0, 1)),
        ];

        let issues = merge_file(Utf8Path::new("/a.ts"), &diags, &ctx);
        let codes: Vec<&str> = issues.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["late", "col0", "col2"]);
        assert_eq!(issues[0].locations[0].lines, [1, 1]);
        assert_eq!(issues[0].locations[1].lines, [6, 6]);
    }

    #[test]
    fn sort_is_stable_for_equal_positions() {
        let r = Range::lines(3, 1, 3, 2);
        let diags = vec![
            diag(DiagnosticSeverity::Error, "first", "m", r),
            diag(DiagnosticSeverity::Error, "second", "m", r),
        ];
        let sorted = sorted_diagnostics(&diags);
        assert_eq!(sorted[0].code, DiagnosticCode::scalar("first"));
        assert_eq!(sorted[1].code, DiagnosticCode::scalar("second"));
    }

    #[test]
    fn absent_codes_merge_under_na() {
        let ctx = InMemoryContext::new();
        let mut a = diag(DiagnosticSeverity::Hint, "", "m", Range::lines(0, 0, 0, 1));
        a.code = DiagnosticCode::Absent;
        let b = diag(DiagnosticSeverity::Hint, "", "m", Range::lines(2, 0, 2, 1));

        let issues = merge_file(Utf8Path::new("/a.ts"), &[a, b], &ctx);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "N/A");
        assert_eq!(issues[0].locations.len(), 2);
    }

    #[test]
    fn multi_line_locations_carry_all_lines() {
        let ctx = InMemoryContext::new().with_file("/a.ts", source_text());
        let diags = vec![diag(
            DiagnosticSeverity::Warning,
            "W1",
            "msg",
            Range::lines(9, 2, 11, 0),
        )];

        let issues = merge_file(Utf8Path::new("/a.ts"), &diags, &ctx);
        assert_eq!(issues[0].locations[0].lines, [10, 12]);
        assert_eq!(
            issues[0].locations[0].context,
            "line 10\nline 11\nline 12"
        );
    }

    #[test]
    fn data_skips_empty_files_and_keeps_order() {
        let ctx = InMemoryContext::new();
        let r = Range::lines(0, 0, 0, 1);
        let files = vec![
            file("/z.ts", vec![diag(DiagnosticSeverity::Error, "E", "m", r)]),
            file("/empty.ts", Vec::new()),
            file("/a.ts", vec![diag(DiagnosticSeverity::Error, "E", "m", r)]),
        ];

        let data = build_diagnostics_data(&files, &ctx);
        let paths: Vec<&str> = data.files().iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["/z.ts", "/a.ts"]);
        assert!(data.get(Utf8Path::new("/empty.ts")).is_none());
    }

    #[test]
    fn repeated_path_entries_stay_separate_when_merged_per_entry() {
        let ctx = InMemoryContext::new().with_file("/a.ts", source_text());
        let files = vec![
            file(
                "/a.ts",
                vec![diag(DiagnosticSeverity::Error, "E1", "first", Range::lines(0, 0, 0, 1))],
            ),
            file(
                "/a.ts",
                vec![diag(DiagnosticSeverity::Error, "L1", "second", Range::lines(1, 0, 1, 1))],
            ),
        ];

        let reports = merge_entries(&files, &ctx);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].issues[0].message, "first");
        assert_eq!(reports[1].issues[0].message, "second");
        assert_eq!(reports[1].issues[0].locations[0].context, "line 2");

        let data = build_diagnostics_data(&files, &ctx);
        assert_eq!(data.files().len(), 1);
        assert_eq!(data.files()[0].issues[0].message, "second");
    }
}
