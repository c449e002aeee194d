//! Use case orchestration for lint2prompt.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. Diagnostics, source text, and the output sink are all injected.
//!
//! The CLI crate depends on this; it only handles argument parsing and process wiring.

#![forbid(unsafe_code)]

mod collect;
mod prompt;
mod render;
mod sink;

pub use collect::collect_diagnostics;
pub use prompt::{
    COPIED_NOTICE, NO_PROBLEMS_NOTICE, PromptOutput, copy_diagnostics, run_prompt,
};
pub use render::{RenderFormat, parse_render_format, run_render};
pub use sink::{ClipboardSink, CommandSink, FileSink, MemorySink, SinkError, StdoutSink};
