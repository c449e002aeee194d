//! The `render` use case: one of the three renderings over the filtered diagnostics.

use crate::collect::collect_diagnostics;
use anyhow::Context;
use lint2prompt_domain::{ContextSource, DiagnosticSource, build_diagnostics_data, merge_entries};
use lint2prompt_render::{render_compact, render_json, render_text};
use lint2prompt_settings::ResolvedConfig;
use lint2prompt_types::FileDiagnostics;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderFormat {
    /// Merged issues as a JSON object keyed by path.
    Json,
    /// Every diagnostic on its own line.
    Text,
    /// Fenced blocks for LLM prompts.
    Compact,
}

pub fn parse_render_format(v: &str) -> anyhow::Result<RenderFormat> {
    match v {
        "json" => Ok(RenderFormat::Json),
        "text" | "verbose" => Ok(RenderFormat::Text),
        "compact" => Ok(RenderFormat::Compact),
        other => anyhow::bail!("unknown render format: {other} (expected json, text or compact)"),
    }
}

/// Load, filter, and render diagnostics.
///
/// `context` builds the source-text reader once the surviving files are known; it is not
/// called for the text format, which shows no source lines.
pub fn run_render<C, F>(
    source: &dyn DiagnosticSource,
    config: &ResolvedConfig,
    format: RenderFormat,
    context: F,
) -> anyhow::Result<String>
where
    C: ContextSource,
    F: FnOnce(&[FileDiagnostics]) -> C,
{
    let files = collect_diagnostics(source, &config.ignore)?;

    if format == RenderFormat::Text {
        return Ok(render_text(&files));
    }

    let ctx = context(&files);

    match format {
        RenderFormat::Json => {
            render_json(&build_diagnostics_data(&files, &ctx)).context("serialize diagnostics JSON")
        }
        _ => Ok(render_compact(&merge_entries(&files, &ctx))),
    }
}
