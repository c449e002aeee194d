//! Rendering of diagnostics for people and for LLM prompts.

#![forbid(unsafe_code)]

mod compact;
mod json;
mod prompt;
mod text;

pub use compact::{NO_PROBLEMS_FOUND, render_compact};
pub use json::render_json;
pub use prompt::assemble_prompt;
pub use text::render_text;
