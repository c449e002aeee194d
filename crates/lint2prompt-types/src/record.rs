use crate::{DiagnosticCode, DiagnosticSeverity, Range};
use camino::Utf8PathBuf;

/// One diagnostic as handed over by the diagnostic source. Read-only to the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub severity: DiagnosticSeverity,
    pub code: DiagnosticCode,
    pub message: String,
    pub range: Range,
    /// Name of the tool that produced the diagnostic (`eslint`, `rustc`, ...).
    pub source: Option<String>,
}

impl DiagnosticRecord {
    /// Originating tool name, with an empty name treated as missing.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}

/// All diagnostics reported for a single file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDiagnostics {
    pub path: Utf8PathBuf,
    pub diagnostics: Vec<DiagnosticRecord>,
}

impl FileDiagnostics {
    pub fn new<P: Into<Utf8PathBuf>>(path: P, diagnostics: Vec<DiagnosticRecord>) -> Self {
        Self {
            path: path.into(),
            diagnostics,
        }
    }
}
