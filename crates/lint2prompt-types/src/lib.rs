//! Stable DTOs used across the lint2prompt workspace.
//!
//! This crate is intentionally boring:
//! - diagnostic records as handed over by a diagnostic source
//! - severity levels and their normalized labels
//! - the tagged diagnostic code variant
//! - the merged, context-annotated report rendered downstream

#![forbid(unsafe_code)]

pub mod code;
pub mod range;
pub mod record;
pub mod report;
pub mod severity;

pub use code::{CODE_NOT_AVAILABLE, DiagnosticCode};
pub use range::{Position, Range};
pub use record::{DiagnosticRecord, FileDiagnostics};
pub use report::{DiagnosticsData, FileReport, Issue, Location};
pub use severity::{DiagnosticSeverity, SeverityLabel};
