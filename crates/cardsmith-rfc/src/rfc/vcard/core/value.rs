//! vCard value types (RFC 6350 §4).

use super::datetime::VCardDate;
use super::structured::StructuredName;

/// A vCard property value.
///
/// Covers the value types the record builder produces.
#[derive(Debug, Clone, PartialEq)]
pub enum VCardValue {
    /// Text value (RFC 6350 §4.1), escaped on output.
    Text(String),

    /// Multi-valued text (comma-separated on output).
    TextList(Vec<String>),

    /// URI value (RFC 6350 §4.2), never escaped.
    Uri(String),

    /// Date value (RFC 6350 §4.3.1).
    Date(VCardDate),

    /// Structured name (N property).
    StructuredName(StructuredName),

    /// Caller-supplied value written as-is.
    Verbatim(String),
}

impl VCardValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Verbatim(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a URI if applicable.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(s) => Some(s),
            _ => None,
        }
    }
}
