//! Tool execution trait and the production process-spawning implementation.
//!
//! The [`ToolRunner`] trait is the seam between pipeline logic and the two
//! external binaries. The production implementation is [`SystemRunner`];
//! tests swap in the recording [`MockRunner`](tests::MockRunner) so the
//! whole pipeline can be exercised without ImageMagick or jpegoptim
//! installed.

use super::command::ToolCommand;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0} not found on PATH. Please install it first.")]
    NotFound(&'static str),
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("{command}: {message}")]
    Failed { command: String, message: String },
}

/// Executes prepared tool commands.
///
/// A run must either complete with exit status zero or produce an error
/// carrying whatever the child wrote to stderr — callers never inspect
/// child output themselves.
pub trait ToolRunner {
    fn run(&self, command: &ToolCommand) -> Result<(), ToolError>;
}

/// Production runner: spawns the real process with captured output.
///
/// Output is captured, not inherited — stdout of the optimizer stays fully
/// owned by the report formatting, and child stderr surfaces only inside
/// error values.
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> Result<(), ToolError> {
        let output = Command::new(command.program)
            .args(&command.args)
            .output()
            .map_err(|source| ToolError::Spawn {
                command: command.rendered(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let detail = match output.status.code() {
            Some(code) => format!("exited with code {code}"),
            None => "terminated by signal".to_string(),
        };
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            detail
        } else {
            format!("{detail}: {stderr}")
        };
        Err(ToolError::Failed {
            command: command.rendered(),
            message,
        })
    }
}
