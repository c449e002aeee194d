/// Wraps diagnostic text between the prompt prefix and suffix.
///
/// The text is trimmed and fenced with triple quotes.
pub fn assemble_prompt(prefix: &str, suffix: &str, text: &str) -> String {
    format!("{prefix}\n\n\"\"\"\n{}\n\"\"\"\n\n{suffix}", text.trim())
}
