//! Message sinks.

use crate::games::bowling::MessageSink;
use derive_new::new;
use std::io::Write;
use tracing::warn;

/// Writes each message on its own line.
#[derive(Debug, new)]
pub struct ConsoleSink<W> {
    output: W,
}

impl ConsoleSink<std::io::Stdout> {
    /// Creates a sink on stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> MessageSink for ConsoleSink<W> {
    fn display_message(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            warn!(error = %e, "Failed to display message");
        }
    }
}

/// Keeps every message in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Vec<String>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages in the order received.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of messages equal to `text`.
    pub fn count(&self, text: &str) -> usize {
        self.messages.iter().filter(|m| m.as_str() == text).count()
    }

    /// Whether any message contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }
}

impl MessageSink for RecordingSink {
    fn display_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
