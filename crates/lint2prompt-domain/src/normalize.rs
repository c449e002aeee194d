use lint2prompt_types::{CODE_NOT_AVAILABLE, DiagnosticCode, DiagnosticSeverity, SeverityLabel};

pub fn severity_label(severity: DiagnosticSeverity) -> SeverityLabel {
    match severity {
        DiagnosticSeverity::Error => SeverityLabel::Error,
        DiagnosticSeverity::Warning => SeverityLabel::Warning,
        DiagnosticSeverity::Information => SeverityLabel::Info,
        DiagnosticSeverity::Hint => SeverityLabel::Hint,
        DiagnosticSeverity::Unrecognized => SeverityLabel::Unknown,
    }
}

/// Display string for a diagnostic code.
///
/// Only a `value` member that is itself empty yields `""`.
pub fn code_label(code: &DiagnosticCode) -> String {
    match code {
        DiagnosticCode::Absent => CODE_NOT_AVAILABLE.to_string(),
        DiagnosticCode::Scalar(v) if v.is_empty() => CODE_NOT_AVAILABLE.to_string(),
        DiagnosticCode::Scalar(v) | DiagnosticCode::WithValueField(v) => v.clone(),
    }
}
