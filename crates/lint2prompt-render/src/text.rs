use lint2prompt_domain::{code_label, severity_label, sorted_diagnostics};
use lint2prompt_types::FileDiagnostics;

/// Verbose listing: every diagnostic on its own line, unmerged, sorted by position.
///
/// Format per file:
/// ```text
/// File: <path>
/// Line <N>, Column <C> - <severity>: [<code>] <message>
/// Lines <N1>-<N2>, Column <C> - <severity>: [<code>] <message>
///
/// ```
///
/// The `[<code>] ` prefix is left out when the code label is empty.
pub fn render_text(files: &[FileDiagnostics]) -> String {
    let mut out = String::new();

    for file in files.iter().filter(|f| !f.diagnostics.is_empty()) {
        out.push_str(&format!("File: {}\n", file.path));

        for d in sorted_diagnostics(&file.diagnostics) {
            let [start, end] = d.range.one_based_lines();
            let column = d.range.one_based_column();
            let severity = severity_label(d.severity);
            let code = code_label(&d.code);
            let code = if code.is_empty() {
                code
            } else {
                format!("[{code}] ")
            };

            if start == end {
                out.push_str(&format!(
                    "Line {start}, Column {column} - {severity}: {code}{}\n",
                    d.message
                ));
            } else {
                out.push_str(&format!(
                    "Lines {start}-{end}, Column {column} - {severity}: {code}{}\n",
                    d.message
                ));
            }
        }

        out.push('\n');
    }

    out
}
