use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `lint2prompt.toml` schema v1.
///
/// Key names follow the editor setting names (`linterIgnored`, `promptPrefix`, `promptSuffix`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Lint2PromptConfigV1 {
    /// Optional schema string for tooling (`lint2prompt.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Tool names whose diagnostics are dropped. `*` matches any run of characters;
    /// matching is case-insensitive and covers the whole name.
    #[serde(default)]
    pub linter_ignored: Vec<String>,

    /// Text placed before the diagnostics block. Empty means the built-in default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_prefix: Option<String>,

    /// Text placed after the diagnostics block. Empty means the built-in default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_suffix: Option<String>,
}
