//! Destinations for finalized records.
//!
//! A sink receives the content lines of one finished record and appends them
//! to a named destination, creating it when absent. Records sent to the same
//! destination accumulate in emission order, which is how several contacts
//! end up in one `.vcf` stream.

mod file;
mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

use crate::error::SinkResult;

/// Append-only destination for finalized records.
pub trait Sink {
    /// Appends one record's content lines to `destination`.
    ///
    /// ## Errors
    /// Returns [`crate::SinkError`] if the destination cannot be written.
    fn append(&mut self, destination: &str, lines: &[String]) -> SinkResult<()>;
}
