//! CLI entry point for lint2prompt.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, sink selection,
//! and exit codes. All business logic lives in the `lint2prompt-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use lint2prompt_app::{
    COPIED_NOTICE, ClipboardSink, CommandSink, FileSink, NO_PROBLEMS_NOTICE, StdoutSink,
    copy_diagnostics, parse_render_format, run_render,
};
use lint2prompt_settings::{Overrides, ResolvedConfig};
use lint2prompt_source::{DiagnosticsInput, FsContextReader, JsonDiagnosticSource};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "LINT2PROMPT_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "lint2prompt",
    version,
    about = "Turn editor diagnostics into a ready-to-paste LLM prompt"
)]
struct Cli {
    /// Diagnostics JSON document (`-` reads stdin).
    #[arg(long, default_value = "-", global = true)]
    diagnostics: String,

    /// Path to lint2prompt config TOML (a missing file means defaults).
    #[arg(long, default_value = "lint2prompt.toml", global = true)]
    config: Utf8PathBuf,

    /// Ignore diagnostics from tools matching this pattern (`*` wildcard, case-insensitive).
    #[arg(long = "ignore", value_name = "PATTERN", global = true)]
    ignore: Vec<String>,

    /// Override the text placed before the diagnostics.
    #[arg(long, global = true)]
    prompt_prefix: Option<String>,

    /// Override the text placed after the diagnostics.
    #[arg(long, global = true)]
    prompt_suffix: Option<String>,

    /// Log pipeline details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the LLM prompt and deliver it (clipboard program, file, or stdout).
    Prompt {
        /// Clipboard command to pipe the prompt into, e.g. "pbcopy" or "wl-copy".
        #[arg(long, conflicts_with = "out")]
        copy_cmd: Option<String>,

        /// Write the prompt to this file instead of stdout.
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Render diagnostics as json, text, or compact.
    Render {
        /// Output format (json|text|compact).
        #[arg(long, default_value = "compact")]
        format: String,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("lint2prompt error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let source = JsonDiagnosticSource::new(DiagnosticsInput::from_arg(&cli.diagnostics));

    match cli.cmd {
        Commands::Prompt { copy_cmd, out } => cmd_prompt(&source, &config, copy_cmd, out),
        Commands::Render { format, out } => cmd_render(&source, &config, &format, out),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ResolvedConfig> {
    let text = read_optional(&cli.config)?;
    let overrides = Overrides {
        ignore: cli.ignore.clone(),
        prompt_prefix: cli.prompt_prefix.clone(),
        prompt_suffix: cli.prompt_suffix.clone(),
    };
    lint2prompt_settings::load_config(&text, overrides)
        .with_context(|| format!("config: {}", cli.config))
}

/// Contents of `path`, or an empty string when it does not exist.
fn read_optional(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn cmd_prompt(
    source: &JsonDiagnosticSource,
    config: &ResolvedConfig,
    copy_cmd: Option<String>,
    out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let (mut sink, notice): (Box<dyn ClipboardSink>, Option<String>) = match (copy_cmd, out) {
        (Some(line), _) => {
            let sink = CommandSink::from_command_line(&line)
                .context("--copy-cmd needs a program name")?;
            (Box::new(sink), Some(COPIED_NOTICE.to_string()))
        }
        (None, Some(path)) => {
            let notice = format!("Prompt written to {path}.");
            (Box::new(FileSink::new(path)), Some(notice))
        }
        (None, None) => (Box::new(StdoutSink), None),
    };

    let copied = copy_diagnostics(source, config, FsContextReader::for_files, sink.as_mut())?;

    if !copied {
        eprintln!("{NO_PROBLEMS_NOTICE}");
    } else if let Some(notice) = notice {
        eprintln!("{notice}");
    }
    Ok(())
}

fn cmd_render(
    source: &JsonDiagnosticSource,
    config: &ResolvedConfig,
    format: &str,
    out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let format = parse_render_format(format)?;
    let text = run_render(source, config, format, FsContextReader::for_files)?;

    match out {
        Some(path) => FileSink::new(path)
            .write_text(&text)
            .context("write render output")?,
        None => StdoutSink.write_text(&text).context("write render output")?,
    }
    Ok(())
}
