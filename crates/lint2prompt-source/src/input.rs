use anyhow::Context;
use lint2prompt_types::{
    DiagnosticCode, DiagnosticRecord, DiagnosticSeverity, FileDiagnostics, Position, Range,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Top-level diagnostics document: one entry per file.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RawDiagnosticsDocument(pub Vec<RawFileEntry>);

/// A file with its diagnostics, either as an object or as a `[path, diagnostics]` pair.
#[derive(Clone, Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawFileEntry {
    Object {
        path: String,
        #[serde(default)]
        diagnostics: Vec<RawDiagnostic>,
    },
    Pair(String, Vec<RawDiagnostic>),
}

#[derive(Clone, Debug, Deserialize, JsonSchema)]
pub struct RawDiagnostic {
    /// LSP level (1 = error .. 4 = hint) or a level name. Absent means error.
    #[serde(default)]
    pub severity: Option<RawSeverity>,
    /// Any JSON value; objects carrying a `value` member use that member.
    #[serde(default)]
    pub code: Option<Value>,
    pub message: String,
    pub range: RawRange,
    /// Name of the producing tool.
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Clone, Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawSeverity {
    Level(i64),
    Name(String),
    Other(Value),
}

#[derive(Clone, Copy, Debug, Deserialize, JsonSchema)]
pub struct RawRange {
    pub start: RawPosition,
    pub end: RawPosition,
}

#[derive(Clone, Copy, Debug, Deserialize, JsonSchema)]
pub struct RawPosition {
    pub line: u32,
    pub character: u32,
}

/// Parse a diagnostics document into per-file records, in document order.
///
/// Blank input is an empty workspace.
pub fn parse_diagnostics_json(text: &str) -> anyhow::Result<Vec<FileDiagnostics>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc: RawDiagnosticsDocument =
        serde_json::from_str(text).context("parse diagnostics JSON")?;

    Ok(doc.0.into_iter().map(file_diagnostics).collect())
}

fn file_diagnostics(entry: RawFileEntry) -> FileDiagnostics {
    let (path, raw) = match entry {
        RawFileEntry::Object { path, diagnostics } => (path, diagnostics),
        RawFileEntry::Pair(path, diagnostics) => (path, diagnostics),
    };
    FileDiagnostics::new(path, raw.into_iter().map(record).collect())
}

fn record(raw: RawDiagnostic) -> DiagnosticRecord {
    DiagnosticRecord {
        severity: severity(raw.severity.as_ref()),
        code: DiagnosticCode::from_json(raw.code.as_ref()),
        message: raw.message,
        range: Range::new(position(raw.range.start), position(raw.range.end)),
        source: raw.source,
    }
}

fn position(raw: RawPosition) -> Position {
    Position::new(raw.line, raw.character)
}

fn severity(raw: Option<&RawSeverity>) -> DiagnosticSeverity {
    match raw {
        None => DiagnosticSeverity::Error,
        Some(RawSeverity::Level(1)) => DiagnosticSeverity::Error,
        Some(RawSeverity::Level(2)) => DiagnosticSeverity::Warning,
        Some(RawSeverity::Level(3)) => DiagnosticSeverity::Information,
        Some(RawSeverity::Level(4)) => DiagnosticSeverity::Hint,
        Some(RawSeverity::Name(name)) => match name.to_ascii_lowercase().as_str() {
            "error" => DiagnosticSeverity::Error,
            "warning" => DiagnosticSeverity::Warning,
            "information" | "info" => DiagnosticSeverity::Information,
            "hint" => DiagnosticSeverity::Hint,
            _ => DiagnosticSeverity::Unrecognized,
        },
        Some(_) => DiagnosticSeverity::Unrecognized,
    }
}
