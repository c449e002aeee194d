use crate::ports::ContextSource;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;

/// Lines `start_line..=end_line` (zero-based) of `content`, joined by `\n`.
///
/// Lines are split on `\n` only, so a trailing `\r` stays part of its line. `end_line` is
/// clamped to the last line; a range starting past it yields an empty string.
pub fn slice_lines(content: &str, start_line: u32, end_line: u32) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    let start = start_line as usize;
    let end = (end_line as usize).min(last);
    if start > end {
        return String::new();
    }
    lines[start..=end].join("\n")
}

/// Context source backed by text already in memory (open editor buffers, test fixtures).
#[derive(Clone, Debug, Default)]
pub struct InMemoryContext {
    files: HashMap<Utf8PathBuf, String>,
}

impl InMemoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P: Into<Utf8PathBuf>, S: Into<String>>(mut self, path: P, text: S) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert<P: Into<Utf8PathBuf>, S: Into<String>>(&mut self, path: P, text: S) {
        self.files.insert(path.into(), text.into());
    }
}

impl ContextSource for InMemoryContext {
    fn read_context(&self, path: &Utf8Path, start_line: u32, end_line: u32) -> String {
        self.files
            .get(path)
            .map(|text| slice_lines(text, start_line, end_line))
            .unwrap_or_default()
    }
}
