//! Batch generation of contact cards from CSV exports.

pub mod cli;
pub mod generate;
pub mod ingest;
