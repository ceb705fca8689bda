//! Blocking execution of one external tool at a time.
//!
//! Both entry points return a `ProcessOutcome` and leave the decision about a
//! non-zero exit to the caller through `ProcessOutcome::into_result`.
use std::io::Write;
use std::process::{Output, Stdio};

use tracing::{debug, trace};

use super::command::CommandLine;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub tool: String,
    /// `None` when the child was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutcome {
    fn from_output(tool: String, output: Output) -> Self {
        Self {
            tool,
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Everything the tool printed: stdout followed by stderr.
    pub fn combined_output(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (_, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => {
                let mut text = self.stdout.clone();
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str(&self.stderr);
                text
            }
        }
    }

    pub fn into_result(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            let output = self.combined_output();
            Err(Error::ToolFailed {
                tool: self.tool,
                code: self.code,
                output,
            })
        }
    }
}

fn spawn_error(line: &CommandLine, source: std::io::Error) -> Error {
    Error::Spawn {
        program: line.program().display().to_string(),
        source,
    }
}

/// Run to completion with stdout and stderr captured. No timeout.
pub fn run_captured(line: &CommandLine) -> Result<ProcessOutcome> {
    debug!("Running: {}", line);
    let output = line
        .to_command()
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(line, e))?;
    let outcome = ProcessOutcome::from_output(line.tool_name(), output);
    trace!("{} exited with {:?}", outcome.tool, outcome.code);
    Ok(outcome)
}

/// Run with `payload` written to the child's stdin, which is then closed.
pub fn run_with_stdin(line: &CommandLine, payload: &str) -> Result<ProcessOutcome> {
    debug!("Running: {} (stdin: {:?})", line, payload);
    let mut child = line
        .to_command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(line, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        // A tool that exits without reading its prompt closes the pipe early;
        // its exit status below is the meaningful signal in that case.
        if let Err(e) = stdin.write_all(payload.as_bytes()) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(Error::Io(e));
            }
            debug!("{} closed stdin before reading the prompt", line.tool_name());
        }
    }

    let output = child.wait_with_output()?;
    let outcome = ProcessOutcome::from_output(line.tool_name(), output);
    trace!("{} exited with {:?}", outcome.tool, outcome.code);
    Ok(outcome)
}
