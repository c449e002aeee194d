use serde::Serialize;
use std::fmt;

/// Severity as reported by the diagnostic source.
///
/// Editors expose a four-valued level; anything the source sends outside of it is kept as
/// `Unrecognized` so normalization stays total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
    Unrecognized,
}

/// Normalized severity label used in every rendered output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLabel {
    Error,
    Warning,
    Info,
    Hint,
    Unknown,
}

impl SeverityLabel {
    pub const ALL: [SeverityLabel; 5] = [
        SeverityLabel::Error,
        SeverityLabel::Warning,
        SeverityLabel::Info,
        SeverityLabel::Hint,
        SeverityLabel::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLabel::Error => "error",
            SeverityLabel::Warning => "warning",
            SeverityLabel::Info => "info",
            SeverityLabel::Hint => "hint",
            SeverityLabel::Unknown => "unknown",
        }
    }

    /// Label with the first letter upper-cased (`Error`, `Warning`, ...).
    pub fn capitalized(self) -> &'static str {
        match self {
            SeverityLabel::Error => "Error",
            SeverityLabel::Warning => "Warning",
            SeverityLabel::Info => "Info",
            SeverityLabel::Hint => "Hint",
            SeverityLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
