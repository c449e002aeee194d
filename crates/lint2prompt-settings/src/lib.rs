//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod defaults;
mod model;
mod resolve;

pub use defaults::{CONFIG_SCHEMA_V1, DEFAULT_PROMPT_PREFIX, DEFAULT_PROMPT_SUFFIX};
pub use model::Lint2PromptConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `lint2prompt.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<Lint2PromptConfigV1> {
    let cfg: Lint2PromptConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the pipeline (defaults + overrides + validation).
pub fn resolve_config(
    cfg: Lint2PromptConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Parse then resolve; empty or whitespace-only text means "no config file".
pub fn load_config(text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    use anyhow::Context;

    let cfg = if text.trim().is_empty() {
        Lint2PromptConfigV1::default()
    } else {
        parse_config_toml(text).context("parse config")?
    };
    resolve_config(cfg, overrides).context("resolve config")
}
