//! vCard version tag.

use std::fmt;

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
}

impl VCardVersion {
    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }

    /// Returns whether ANNIVERSARY (and partial dates) can be encoded.
    ///
    /// RFC 2426 has no ANNIVERSARY property; it was introduced in 4.0.
    #[must_use]
    pub const fn supports_anniversary(self) -> bool {
        matches!(self, Self::V4)
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0" => Ok(Self::V3),
            "4.0" => Ok(Self::V4),
            other => Err(format!("unsupported vCard version: {other:?}")),
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
