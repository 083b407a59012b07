use thiserror::Error;

use cardsmith_rfc::rfc::vcard::VCardVersion;

/// Structural errors raised by the record builder.
///
/// Contact-detail validation failures (bad email, implausible phone) are not
/// errors; they surface as [`crate::Diagnostic`]s.
#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Date format error: {0}")]
    DateFormat(#[from] cardsmith_rfc::error::RfcError),

    #[error("{property} requires vCard 4.0 or later, record version is {version}")]
    VersionFeature {
        property: &'static str,
        version: VCardVersion,
    },

    #[error("Family name is required")]
    MissingFamilyName,

    #[error("Record is finalized, cannot add {0}")]
    RecordClosed(&'static str),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

pub type BuilderResult<T> = std::result::Result<T, BuilderError>;

/// Destination errors
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Invalid destination name {0:?}")]
    InvalidDestination(String),

    #[error("I/O error on destination {destination}: {source}")]
    Io {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;
