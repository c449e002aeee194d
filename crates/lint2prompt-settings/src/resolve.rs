use crate::defaults::{CONFIG_SCHEMA_V1, DEFAULT_PROMPT_PREFIX, DEFAULT_PROMPT_SUFFIX};
use crate::model::Lint2PromptConfigV1;
use anyhow::Context;
use lint2prompt_domain::IgnoreList;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Extra ignore patterns, appended to the configured ones.
    pub ignore: Vec<String>,
    pub prompt_prefix: Option<String>,
    pub prompt_suffix: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub ignore: IgnoreList,
    pub prompt_prefix: String,
    pub prompt_suffix: String,
}

pub fn resolve_config(
    cfg: Lint2PromptConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != CONFIG_SCHEMA_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {CONFIG_SCHEMA_V1})");
    }

    let mut patterns = cfg.linter_ignored;
    patterns.extend(overrides.ignore);
    validate_patterns(&patterns)?;
    let ignore = IgnoreList::new(patterns.as_slice()).context("compile linterIgnored patterns")?;

    let prompt_prefix = pick_text(
        overrides.prompt_prefix,
        cfg.prompt_prefix,
        DEFAULT_PROMPT_PREFIX,
    );
    let prompt_suffix = pick_text(
        overrides.prompt_suffix,
        cfg.prompt_suffix,
        DEFAULT_PROMPT_SUFFIX,
    );

    Ok(ResolvedConfig {
        ignore,
        prompt_prefix,
        prompt_suffix,
    })
}

/// First non-empty of override, configured value, default.
fn pick_text(overridden: Option<String>, configured: Option<String>, default: &str) -> String {
    overridden
        .filter(|s| !s.is_empty())
        .or(configured.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| default.to_string())
}

fn validate_patterns(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        IgnoreList::new(std::slice::from_ref(pattern))
            .with_context(|| format!("invalid linterIgnored pattern: {pattern}"))?;
    }
    Ok(())
}
