//! Structured vCard types (RFC 6350).

/// Display-name ordering for the FN property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameOrder {
    /// Given names before the family name ("John Doe").
    #[default]
    Western,
    /// Family name first ("Doe John"), as in Hungarian or Japanese usage.
    Eastern,
}

impl NameOrder {
    /// Maps an "eastern order" flag to the ordering.
    #[must_use]
    pub const fn from_eastern(eastern: bool) -> Self {
        if eastern { Self::Eastern } else { Self::Western }
    }
}

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// Encoded as `family;given;additional;prefix`. The family name is required;
/// the other components are left blank when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family name (surname).
    pub family: String,
    /// Given name (first name).
    pub given: Option<String>,
    /// Additional name (middle name).
    pub additional: Option<String>,
    /// Honorific prefix (e.g., "Dr.").
    pub prefix: Option<String>,
}

impl StructuredName {
    /// Creates a structured name with only a family name.
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Self::default()
        }
    }

    /// Sets the given name.
    #[must_use]
    pub fn given(mut self, given: impl Into<String>) -> Self {
        self.given = Some(given.into());
        self
    }

    /// Sets the additional (middle) name.
    #[must_use]
    pub fn additional(mut self, additional: impl Into<String>) -> Self {
        self.additional = Some(additional.into());
        self
    }

    /// Sets the honorific prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Formats the display name (FN value).
    ///
    /// The prefix always leads. The middle name is only shown together with a
    /// given name.
    #[must_use]
    pub fn display_name(&self, order: NameOrder) -> String {
        let given = self.given.as_deref();
        let additional = given.and(self.additional.as_deref());

        let mut parts: Vec<&str> = Vec::with_capacity(4);
        parts.extend(self.prefix.as_deref());
        match order {
            NameOrder::Western => {
                parts.extend(given);
                parts.extend(additional);
                parts.push(&self.family);
            }
            NameOrder::Eastern => {
                parts.push(&self.family);
                parts.extend(given);
                parts.extend(additional);
            }
        }
        parts.join(" ")
    }

    /// Returns the components in N order: family, given, additional, prefix.
    #[must_use]
    pub fn components(&self) -> [&str; 4] {
        [
            self.family.as_str(),
            self.given.as_deref().unwrap_or_default(),
            self.additional.as_deref().unwrap_or_default(),
            self.prefix.as_deref().unwrap_or_default(),
        ]
    }
}

/// Telephone URI (per RFC 3966).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelUri {
    /// The telephone number as supplied by the caller.
    pub number: String,
}

impl TelUri {
    /// Creates a tel URI from a phone number.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    /// Formats as a tel: URI string.
    #[must_use]
    pub fn to_uri(&self) -> String {
        format!("tel:{}", self.number)
    }
}
