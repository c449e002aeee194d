//! The prompt use case: filter, merge, render compactly, wrap, deliver.

use crate::collect::collect_diagnostics;
use crate::sink::ClipboardSink;
use anyhow::Context;
use lint2prompt_domain::{ContextSource, DiagnosticSource, merge_entries};
use lint2prompt_render::{assemble_prompt, render_compact};
use lint2prompt_settings::ResolvedConfig;
use lint2prompt_types::FileDiagnostics;

pub const COPIED_NOTICE: &str = "Problems copied to clipboard.";
pub const NO_PROBLEMS_NOTICE: &str = "No problems found in the workspace.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutput {
    /// Nothing survived filtering; no prompt is produced.
    NoProblems,
    Prompt(String),
}

/// Build the prompt text for the current diagnostics.
pub fn run_prompt<C, F>(
    source: &dyn DiagnosticSource,
    config: &ResolvedConfig,
    context: F,
) -> anyhow::Result<PromptOutput>
where
    C: ContextSource,
    F: FnOnce(&[FileDiagnostics]) -> C,
{
    let files = collect_diagnostics(source, &config.ignore)?;
    if files.is_empty() {
        return Ok(PromptOutput::NoProblems);
    }

    let ctx = context(&files);
    let reports = merge_entries(&files, &ctx);
    tracing::debug!(
        entries = reports.len(),
        issues = reports.iter().map(|r| r.issues.len()).sum::<usize>(),
        "merged diagnostics"
    );

    let text = render_compact(&reports);
    Ok(PromptOutput::Prompt(assemble_prompt(
        &config.prompt_prefix,
        &config.prompt_suffix,
        &text,
    )))
}

/// Build the prompt and hand it to `sink`.
///
/// Returns `false` when there was nothing to deliver; the sink is then left untouched.
pub fn copy_diagnostics<C, F>(
    source: &dyn DiagnosticSource,
    config: &ResolvedConfig,
    context: F,
    sink: &mut dyn ClipboardSink,
) -> anyhow::Result<bool>
where
    C: ContextSource,
    F: FnOnce(&[FileDiagnostics]) -> C,
{
    let text = match run_prompt(source, config, context)? {
        PromptOutput::NoProblems => return Ok(false),
        PromptOutput::Prompt(text) => text,
    };

    sink.write_text(&text)
        .with_context(|| format!("deliver prompt to {}", sink.describe()))?;
    tracing::info!(sink = %sink.describe(), bytes = text.len(), "prompt delivered");
    Ok(true)
}
