use std::collections::HashMap;

use cardsmith_rfc::rfc::vcard::serialize;

use super::Sink;
use crate::error::SinkResult;

/// In-memory sink keeping one text stream per destination.
#[derive(Debug, Default)]
pub struct MemorySink {
    streams: HashMap<String, String>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stream written to `destination`, if any.
    #[must_use]
    pub fn stream(&self, destination: &str) -> Option<&str> {
        self.streams.get(destination).map(String::as_str)
    }

    /// Returns the number of records appended to `destination`.
    #[must_use]
    pub fn record_count(&self, destination: &str) -> usize {
        self.stream(destination)
            .map_or(0, |s| s.matches("BEGIN:VCARD\r\n").count())
    }
}

impl Sink for MemorySink {
    fn append(&mut self, destination: &str, lines: &[String]) -> SinkResult<()> {
        self.streams
            .entry(destination.to_string())
            .or_default()
            .push_str(&serialize(lines));
        Ok(())
    }
}
