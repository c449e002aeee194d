use lint2prompt_types::{FileReport, Issue, Location};

pub const NO_PROBLEMS_FOUND: &str = "No problems found.";

/// Compact rendering meant to be pasted into an LLM prompt.
///
/// One fenced block per merged issue, with each location's source lines inside. Reports are
/// rendered in order as given, so a path with several entries gets several sections.
pub fn render_compact(reports: &[FileReport]) -> String {
    if reports.iter().all(|f| f.issues.is_empty()) {
        return NO_PROBLEMS_FOUND.to_string();
    }

    let mut out = String::new();

    for file in reports.iter().filter(|f| !f.issues.is_empty()) {
        out.push_str(&format!("{}:\n", file.path));
        for issue in &file.issues {
            push_issue(&mut out, issue);
        }
    }

    out.truncate(out.trim_end().len());
    out
}

fn push_issue(out: &mut String, issue: &Issue) {
    out.push_str(&format!(
        "```{}: {}, {}\n",
        issue.severity.capitalized(),
        issue.code,
        issue.message
    ));

    for (i, loc) in issue.locations.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_location(out, loc);
    }

    out.push_str("```\n\n");
}

fn push_location(out: &mut String, loc: &Location) {
    let [start, end] = loc.lines;
    if start == end {
        out.push_str(&format!("# Line {start}\n"));
    } else {
        out.push_str(&format!("# Line {start} to {end}\n"));
    }
    out.push_str(&loc.context);
    out.push('\n');
}
