use thiserror::Error;

/// Encoding and value validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    /// Input is not an ISO 8601 date, date-time or `MM-DD` month-day.
    #[error("Invalid ISO 8601 date: {0:?}")]
    DateFormat(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
