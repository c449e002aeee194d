use crate::SeverityLabel;
use camino::{Utf8Path, Utf8PathBuf};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One occurrence of an issue: a 1-based inclusive line pair plus the source text of those lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub lines: [u32; 2],
    pub context: String,
}

impl Location {
    pub fn start_line(&self) -> u32 {
        self.lines[0]
    }

    pub fn end_line(&self) -> u32 {
        self.lines[1]
    }
}

/// Deduplicated issue. Identity is `(code, severity, message)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub code: String,
    pub severity: SeverityLabel,
    pub message: String,
    pub locations: Vec<Location>,
}

/// Merged issues of one file, in first-occurrence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub path: Utf8PathBuf,
    pub issues: Vec<Issue>,
}

/// File path -> merged issues, in the order files were encountered.
///
/// Serializes as a JSON object keyed by path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticsData {
    files: Vec<FileReport>,
}

impl DiagnosticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file report. A path seen before keeps its position and takes the new issues.
    pub fn insert(&mut self, report: FileReport) {
        match self.files.iter_mut().find(|f| f.path == report.path) {
            Some(existing) => existing.issues = report.issues,
            None => self.files.push(report),
        }
    }

    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    pub fn get(&self, path: &Utf8Path) -> Option<&[Issue]> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.issues.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.issue_count() == 0
    }

    pub fn issue_count(&self) -> usize {
        self.files.iter().map(|f| f.issues.len()).sum()
    }

    pub fn location_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| f.issues.iter())
            .map(|i| i.locations.len())
            .sum()
    }
}

impl Serialize for DiagnosticsData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for file in &self.files {
            map.serialize_entry(file.path.as_str(), &file.issues)?;
        }
        map.end()
    }
}
