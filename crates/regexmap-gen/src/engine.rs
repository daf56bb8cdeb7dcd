//! Conversion engine boundary.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::GenerateError;

/// What one engine invocation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineReply {
    pub lines: Vec<String>,
    /// False when the engine ran but exited unsuccessfully.
    pub success: bool,
}

impl EngineReply {
    pub fn ok<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            success: true,
        }
    }
}

/// Anything that can answer "which characters does this letter convert to".
pub trait ConversionEngine {
    fn query(&self, input: &str) -> Result<EngineReply, GenerateError>;
}

/// Runs a command line through `sh -c`, writing the input on stdin.
pub struct ShellEngine {
    command: String,
}

impl ShellEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl ConversionEngine for ShellEngine {
    fn query(&self, input: &str) -> Result<EngineReply, GenerateError> {
        let spawn_err = |source| GenerateError::Spawn {
            command: self.command.clone(),
            source,
        };

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            // A broken pipe just means the engine didn't read its input.
            if let Err(e) = writeln!(stdin, "{input}") {
                tracing::debug!(input, error = %e, "engine closed stdin early");
            }
        }

        let output = child.wait_with_output().map_err(spawn_err)?;

        // 126/127: the shell could not find or execute the engine.
        if let Some(code @ (126 | 127)) = output.status.code() {
            return Err(GenerateError::EngineUnavailable {
                command: self.command.clone(),
                code,
            });
        }

        if !output.status.success() {
            tracing::warn!(
                input,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "conversion engine failed"
            );
        }

        Ok(EngineReply {
            lines: String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(str::to_string)
                .collect(),
            success: output.status.success(),
        })
    }
}
