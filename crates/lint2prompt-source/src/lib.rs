//! Input adapters: diagnostics JSON documents and source files on disk.
//!
//! This crate is allowed to do filesystem IO. Everything it produces is handed to the
//! pure pipeline through the `DiagnosticSource` and `ContextSource` traits.

#![forbid(unsafe_code)]

mod context;
mod input;

use anyhow::Context;
use camino::Utf8PathBuf;
use lint2prompt_domain::DiagnosticSource;
use lint2prompt_types::FileDiagnostics;
use std::fmt;
use std::io::Read;

pub use context::FsContextReader;
pub use input::{
    RawDiagnostic, RawDiagnosticsDocument, RawFileEntry, RawPosition, RawRange, RawSeverity,
    parse_diagnostics_json,
};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a diagnostics document.
    ///
    /// Returns the number of files on success. **Never panics** on any input.
    pub fn parse_diagnostics(text: &str) -> anyhow::Result<usize> {
        Ok(super::parse_diagnostics_json(text)?.len())
    }
}

/// Where the diagnostics document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticsInput {
    Stdin,
    File(Utf8PathBuf),
    /// Document already held in memory.
    Text(String),
}

impl DiagnosticsInput {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            DiagnosticsInput::Stdin
        } else {
            DiagnosticsInput::File(Utf8PathBuf::from(arg))
        }
    }
}

impl fmt::Display for DiagnosticsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticsInput::Stdin => f.write_str("stdin"),
            DiagnosticsInput::File(path) => write!(f, "{path}"),
            DiagnosticsInput::Text(_) => f.write_str("inline document"),
        }
    }
}

/// Diagnostic source reading an editor-style JSON dump.
#[derive(Clone, Debug)]
pub struct JsonDiagnosticSource {
    input: DiagnosticsInput,
}

impl JsonDiagnosticSource {
    pub fn new(input: DiagnosticsInput) -> Self {
        Self { input }
    }

    fn read_document(&self) -> anyhow::Result<String> {
        match &self.input {
            DiagnosticsInput::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("read diagnostics from stdin")?;
                Ok(text)
            }
            DiagnosticsInput::File(path) => {
                std::fs::read_to_string(path).with_context(|| format!("read {path}"))
            }
            DiagnosticsInput::Text(text) => Ok(text.clone()),
        }
    }
}

impl DiagnosticSource for JsonDiagnosticSource {
    fn diagnostics(&self) -> anyhow::Result<Vec<FileDiagnostics>> {
        let text = self.read_document()?;
        let files = parse_diagnostics_json(&text)
            .with_context(|| format!("parse diagnostics from {}", self.input))?;
        tracing::debug!(input = %self.input, files = files.len(), "loaded diagnostics");
        Ok(files)
    }
}
