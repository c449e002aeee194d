use lint2prompt_types::{
    DiagnosticCode, DiagnosticRecord, DiagnosticSeverity, FileDiagnostics, Range,
};

pub fn diag(
    severity: DiagnosticSeverity,
    code: &str,
    message: &str,
    range: Range,
) -> DiagnosticRecord {
    DiagnosticRecord {
        severity,
        code: DiagnosticCode::scalar(code),
        message: message.to_string(),
        range,
        source: None,
    }
}

/// An error diagnostic at the top of the file, reported by `tool`.
pub fn diag_from(tool: &str) -> DiagnosticRecord {
    DiagnosticRecord {
        source: Some(tool.to_string()),
        ..diag(
            DiagnosticSeverity::Error,
            "E0",
            "problem",
            Range::lines(0, 0, 0, 1),
        )
    }
}

pub fn file(path: &str, diagnostics: Vec<DiagnosticRecord>) -> FileDiagnostics {
    FileDiagnostics::new(path, diagnostics)
}
