//! Output sinks for rendered text and assembled prompts.

use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

/// Errors raised while delivering text to a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The sink program could not be started.
    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The sink program ran but reported failure.
    #[error("`{program}` exited with {status}")]
    Exit { program: String, status: ExitStatus },

    /// Writing to the sink failed.
    #[error("failed to write to {target}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for one piece of text, typically the system clipboard.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError>;

    /// Short human-readable name used in logs.
    fn describe(&self) -> String;
}

/// Prints to standard output, adding a final newline to non-empty text when missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl ClipboardSink for StdoutSink {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io {
            target: "stdout".to_string(),
            source,
        };
        let mut out = std::io::stdout().lock();
        out.write_all(text.as_bytes()).map_err(io_err)?;
        if !text.is_empty() && !text.ends_with('\n') {
            out.write_all(b"\n").map_err(io_err)?;
        }
        out.flush().map_err(io_err)
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}

/// Writes the text to a file, creating parent directories.
#[derive(Clone, Debug)]
pub struct FileSink {
    path: Utf8PathBuf,
}

impl FileSink {
    pub fn new<P: Into<Utf8PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl ClipboardSink for FileSink {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io {
            target: self.path.to_string(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&self.path, text).map_err(io_err)
    }

    fn describe(&self) -> String {
        self.path.to_string()
    }
}

/// Pipes the text into a clipboard program such as `pbcopy` or `wl-copy`.
#[derive(Clone, Debug)]
pub struct CommandSink {
    program: String,
    args: Vec<String>,
}

impl CommandSink {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a command line on whitespace: first word is the program.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self::new(program, words.collect()))
    }
}

impl ClipboardSink for CommandSink {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| SinkError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take()
            && let Err(source) = stdin.write_all(text.as_bytes())
        {
            // The program stopped reading; close the pipe and reap it before reporting.
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(SinkError::Io {
                target: self.program.clone(),
                source,
            });
        }

        let status = child.wait().map_err(|source| SinkError::Io {
            target: self.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(SinkError::Exit {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Keeps every delivered text in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub writes: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardSink for MemorySink {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        self.writes.push(text.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
