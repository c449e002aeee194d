use anyhow::Context;
use lint2prompt_domain::{DiagnosticSource, IgnoreList, filter_files};
use lint2prompt_types::FileDiagnostics;

/// Pull diagnostics from the source and drop the ignored ones.
///
/// Files left without diagnostics are removed.
pub fn collect_diagnostics(
    source: &dyn DiagnosticSource,
    ignore: &IgnoreList,
) -> anyhow::Result<Vec<FileDiagnostics>> {
    let files = source.diagnostics().context("load diagnostics")?;
    let total: usize = files.iter().map(|f| f.diagnostics.len()).sum();

    let kept = filter_files(ignore, &files);
    let kept_count: usize = kept.iter().map(|f| f.diagnostics.len()).sum();

    tracing::debug!(
        files = kept.len(),
        kept = kept_count,
        ignored = total - kept_count,
        "collected diagnostics"
    );
    Ok(kept)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lint2prompt_types::{DiagnosticCode, DiagnosticRecord, DiagnosticSeverity, Range};

    /// Fixed list of files, for use-case tests.
    pub(crate) struct StaticSource(pub(crate) Vec<FileDiagnostics>);

    impl DiagnosticSource for StaticSource {
        fn diagnostics(&self) -> anyhow::Result<Vec<FileDiagnostics>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl DiagnosticSource for FailingSource {
        fn diagnostics(&self) -> anyhow::Result<Vec<FileDiagnostics>> {
            anyhow::bail!("editor went away")
        }
    }

    pub(crate) fn record(
        tool: Option<&str>,
        code: &str,
        message: &str,
        line: u32,
    ) -> DiagnosticRecord {
        DiagnosticRecord {
            severity: DiagnosticSeverity::Error,
            code: DiagnosticCode::scalar(code),
            message: message.to_string(),
            range: Range::lines(line, 0, line, 1),
            source: tool.map(str::to_string),
        }
    }

    #[test]
    fn ignored_tools_are_dropped_with_their_files() {
        let source = StaticSource(vec![
            FileDiagnostics::new("/a.ts", vec![record(Some("eslint"), "E1", "x", 0)]),
            FileDiagnostics::new(
                "/b.ts",
                vec![
                    record(Some("cSpell"), "S1", "typo", 0),
                    record(Some("tsc"), "T1", "type", 1),
                    record(None, "N1", "anon", 2),
                ],
            ),
        ]);
        let ignore = IgnoreList::new(&["eslint*", "cspell"]).expect("patterns");

        let files = collect_diagnostics(&source, &ignore).expect("collect");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "/b.ts");
        let codes: Vec<_> = files[0].diagnostics.iter().map(|d| d.code.clone()).collect();
        assert_eq!(
            codes,
            vec![DiagnosticCode::scalar("T1"), DiagnosticCode::scalar("N1")]
        );
    }

    #[test]
    fn source_failures_carry_context() {
        let err = collect_diagnostics(&FailingSource, &IgnoreList::empty()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("load diagnostics"));
        assert!(msg.contains("editor went away"));
    }
}
