//! Pure diagnostics pipeline (no IO).
//!
//! Input: per-file diagnostic records plus collaborators that supply them and their source text.
//! Output: filtered records and the merged, context-annotated `DiagnosticsData`.

#![forbid(unsafe_code)]

pub mod context;
pub mod filter;
pub mod merge;
pub mod normalize;
pub mod ports;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use context::{InMemoryContext, slice_lines};
pub use filter::{IgnoreList, filter_diagnostics, filter_files};
pub use merge::{build_diagnostics_data, merge_entries, merge_file, sorted_diagnostics};
pub use normalize::{code_label, severity_label};
pub use ports::{ContextSource, DiagnosticSource};
