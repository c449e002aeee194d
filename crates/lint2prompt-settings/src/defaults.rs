pub const CONFIG_SCHEMA_V1: &str = "lint2prompt.config.v1";

pub const DEFAULT_PROMPT_PREFIX: &str = "For the code present, we get these lints:";

pub const DEFAULT_PROMPT_SUFFIX: &str =
    "How can I resolve this? If you propose a fix, please make it concise.";
