use camino::{Utf8Path, Utf8PathBuf};
use lint2prompt_domain::{ContextSource, slice_lines};
use lint2prompt_types::FileDiagnostics;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Context reader over the local filesystem.
///
/// Files can be preloaded in parallel; lookups for files not in the cache read them directly.
/// Missing or unreadable files yield empty context.
#[derive(Clone, Debug, Default)]
pub struct FsContextReader {
    cache: HashMap<Utf8PathBuf, Option<String>>,
}

impl FsContextReader {
    /// Reader without a cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every distinct path up front, in parallel.
    pub fn preloaded<'a, I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'a Utf8Path>,
    {
        let unique: BTreeSet<Utf8PathBuf> = paths.into_iter().map(Utf8Path::to_path_buf).collect();
        let cache: HashMap<Utf8PathBuf, Option<String>> = unique
            .into_par_iter()
            .map(|path| {
                let text = read_text(&path);
                (path, text)
            })
            .collect();

        tracing::debug!(files = cache.len(), "preloaded context files");
        Self { cache }
    }

    /// Preload every file that has at least one diagnostic.
    pub fn for_files(files: &[FileDiagnostics]) -> Self {
        Self::preloaded(
            files
                .iter()
                .filter(|f| !f.diagnostics.is_empty())
                .map(|f| f.path.as_path()),
        )
    }

    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }
}

impl ContextSource for FsContextReader {
    fn read_context(&self, path: &Utf8Path, start_line: u32, end_line: u32) -> String {
        let slice = |text: &str| slice_lines(text, start_line, end_line);
        match self.cache.get(path) {
            Some(Some(text)) => slice(text),
            Some(None) => String::new(),
            None => read_text(path).map(|text| slice(&text)).unwrap_or_default(),
        }
    }
}

/// File contents, decoded lossily. `None` when the file cannot be read.
fn read_text(path: &Utf8Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            tracing::debug!(path = %path, error = %err, "context file unreadable");
            None
        }
    }
}
