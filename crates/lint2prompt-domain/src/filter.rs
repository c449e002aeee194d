use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use lint2prompt_types::{DiagnosticRecord, FileDiagnostics};

/// Compiled `linterIgnored` patterns.
///
/// `*` matches zero or more characters (including `/`); every other character is literal.
/// Patterns match the whole tool name, case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct IgnoreList {
    patterns: Vec<String>,
    set: Option<GlobSet>,
}

impl IgnoreList {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, globset::Error> {
        if patterns.is_empty() {
            return Ok(Self::empty());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(&wildcard_to_glob(pattern.as_ref()))
                .case_insensitive(true)
                .literal_separator(false)
                .backslash_escape(false)
                .build()?;
            builder.add(glob);
        }

        Ok(Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
            set: Some(builder.build()?),
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_none()
    }

    pub fn matches_tool(&self, tool: &str) -> bool {
        self.set.as_ref().is_some_and(|set| set.is_match(tool))
    }

    /// Diagnostics without a tool name are never ignored.
    pub fn is_ignored(&self, diagnostic: &DiagnosticRecord) -> bool {
        diagnostic
            .source_name()
            .is_some_and(|tool| self.matches_tool(tool))
    }
}

/// Rewrite a `*`-wildcard pattern into an equivalent glob with every other meta character escaped.
fn wildcard_to_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut prev_star = false;
    for c in pattern.chars() {
        match c {
            // `**` has path semantics in globs; a run of stars means the same as one here.
            '*' if prev_star => continue,
            '*' => out.push('*'),
            '?' | '[' | ']' | '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
        prev_star = c == '*';
    }
    out
}

pub fn filter_diagnostics(
    ignore: &IgnoreList,
    diagnostics: &[DiagnosticRecord],
) -> Vec<DiagnosticRecord> {
    diagnostics
        .iter()
        .filter(|d| !ignore.is_ignored(d))
        .cloned()
        .collect()
}

/// Filter every file; files left without diagnostics are dropped.
pub fn filter_files(ignore: &IgnoreList, files: &[FileDiagnostics]) -> Vec<FileDiagnostics> {
    files
        .iter()
        .filter_map(|file| {
            let kept = filter_diagnostics(ignore, &file.diagnostics);
            (!kept.is_empty()).then(|| FileDiagnostics::new(file.path.clone(), kept))
        })
        .collect()
}
