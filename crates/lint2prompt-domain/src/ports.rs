//! Collaborators the pipeline consumes. Hosts provide the implementations.

use camino::Utf8Path;
use lint2prompt_types::FileDiagnostics;

/// Supplies the current diagnostics of the whole workspace.
pub trait DiagnosticSource {
    fn diagnostics(&self) -> anyhow::Result<Vec<FileDiagnostics>>;
}

/// Supplies the literal text of a zero-based inclusive line range of a file.
///
/// Implementations never fail: anything unreadable yields an empty string.
pub trait ContextSource {
    fn read_context(&self, path: &Utf8Path, start_line: u32, end_line: u32) -> String;
}

impl<T: ContextSource + ?Sized> ContextSource for &T {
    fn read_context(&self, path: &Utf8Path, start_line: u32, end_line: u32) -> String {
        (**self).read_context(path, start_line, end_line)
    }
}
