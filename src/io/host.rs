//! Messages relayed back to the GIS host.
//!
//! Toolbox scripts talk to their host through a message channel
//! (AddMessage / AddWarning / AddError). `ConsoleMessenger` writes those lines
//! to stdout, which the host captures. `RecordingMessenger` keeps them in
//! memory for embedding and tests.
use std::io::Write;

use tracing::{error, info, warn};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    Message,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostMessage {
    pub severity: Severity,
    pub timestamp: String,
    pub text: String,
}

impl HostMessage {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            text: text.into(),
        }
    }
}

pub trait HostMessenger {
    fn add_message(&mut self, text: &str);

    fn add_warning(&mut self, text: &str) {
        self.add_message(text);
    }

    fn add_error(&mut self, text: &str) {
        self.add_message(text);
    }
}

/// Writes every message to stdout as one or more lines and mirrors it to `tracing`.
pub struct ConsoleMessenger<W: Write = std::io::Stdout> {
    out: W,
}

impl ConsoleMessenger {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleMessenger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) {
        // The host owns the other end of stdout; a closed pipe is not ours to report.
        let _ = writeln!(self.out, "{}", text.trim_end_matches('\n'));
        let _ = self.out.flush();
    }
}

impl<W: Write> HostMessenger for ConsoleMessenger<W> {
    fn add_message(&mut self, text: &str) {
        info!(target: "host", "{}", text);
        self.write_line(text);
    }

    fn add_warning(&mut self, text: &str) {
        warn!(target: "host", "{}", text);
        self.write_line(text);
    }

    fn add_error(&mut self, text: &str) {
        error!(target: "host", "{}", text);
        self.write_line(text);
    }
}

#[derive(Default, Debug, Clone)]
pub struct RecordingMessenger {
    pub messages: Vec<HostMessage>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.text.as_str()).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.text.contains(needle))
    }
}

impl HostMessenger for RecordingMessenger {
    fn add_message(&mut self, text: &str) {
        self.messages.push(HostMessage::new(Severity::Message, text));
    }

    fn add_warning(&mut self, text: &str) {
        self.messages.push(HostMessage::new(Severity::Warning, text));
    }

    fn add_error(&mut self, text: &str) {
        self.messages.push(HostMessage::new(Severity::Error, text));
    }
}
