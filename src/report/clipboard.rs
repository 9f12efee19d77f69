//! Clipboard write through the platform's copy command.

use std::io::{self, Write};
use std::process::{Command, Stdio};

pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> io::Result<()>;
}

/// Pipes text into an external copy command.
///
/// A configured command is tried first, then the platform defaults.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    pub command: Option<String>,
}

impl SystemClipboard {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn candidates(&self) -> Vec<Vec<String>> {
        let mut out: Vec<Vec<String>> = Vec::new();

        if let Some(cmd) = &self.command {
            let parts: Vec<String> = cmd.split_whitespace().map(str::to_string).collect();
            if !parts.is_empty() {
                out.push(parts);
            }
        }

        if cfg!(target_os = "macos") {
            out.push(argv(&["pbcopy"]));
        } else if cfg!(target_os = "windows") {
            out.push(argv(&["clip"]));
        } else {
            out.push(argv(&["wl-copy"]));
            out.push(argv(&["xclip", "-selection", "clipboard"]));
            out.push(argv(&["xsel", "--clipboard", "--input"]));
        }

        out
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn pipe_to(argv: &[String], text: &str) -> io::Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::other("empty clipboard command"))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin is dropped (closed) before waiting so the command sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("'{program}' exited with {status}")))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> io::Result<()> {
        let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no clipboard command available");

        for argv in self.candidates() {
            match pipe_to(&argv, text) {
                Ok(()) => {
                    tracing::debug!(command = %argv.join(" "), "report copied");
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(command = %argv.join(" "), error = %e, "clipboard command failed");
                    last_err = e;
                }
            }
        }

        Err(last_err)
    }
}

pub const COPIED_MESSAGE: &str = "Report copied to clipboard.";

/// Copies the exact report text. A failure is logged and handed back as the
/// line to show the user, never as an `AppError`.
pub fn copy_report(sink: &dyn ClipboardSink, text: &str) -> Result<(), String> {
    sink.write_text(text).map_err(|e| {
        tracing::warn!(error = %e, "clipboard write failed");
        format!("Could not copy the report to the clipboard: {e}")
    })
}
