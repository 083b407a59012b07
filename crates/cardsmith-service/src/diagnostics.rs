//! Data-quality diagnostics.
//!
//! A rejected email or phone number drops that one property and the record
//! carries on. Each rejection is logged at `warn` and kept on the record so
//! callers can report or ignore it.

use std::fmt;

/// A non-fatal problem found while adding a contact detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The email validator rejected the address.
    InvalidEmail { address: String },
    /// The number parsed but is not a possible phone number.
    ImpossiblePhone { number: String },
    /// The phone validator could not parse the number at all.
    UnparseablePhone { number: String, reason: String },
}

impl Diagnostic {
    /// Logs the diagnostic at `warn` level.
    pub(crate) fn emit(&self) {
        match self {
            Self::InvalidEmail { address } => {
                tracing::warn!(%address, "Dropping invalid email address");
            }
            Self::ImpossiblePhone { number } => {
                tracing::warn!(%number, "Dropping impossible phone number");
            }
            Self::UnparseablePhone { number, reason } => {
                tracing::warn!(%number, %reason, "Dropping unparseable phone number");
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail { address } => {
                write!(f, "{address} is not a valid email address")
            }
            Self::ImpossiblePhone { number } => {
                write!(f, "{number} is not a possible phone number")
            }
            Self::UnparseablePhone { number, reason } => {
                write!(f, "{number} is not a valid phone number: {reason}")
            }
        }
    }
}
