//! vCard value model and line encoder used by the cardsmith record builder.

pub mod error;
pub mod rfc;
