//! vCard parameter types (RFC 6350).

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=cell,work).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::new("VALUE", type_name)
    }
}

/// VALUE parameter values.
pub mod types {
    pub const URI: &str = "uri";
}
