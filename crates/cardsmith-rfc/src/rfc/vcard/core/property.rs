//! vCard property types (RFC 6350).

use super::datetime::VCardDate;
use super::parameter::VCardParameter;
use super::structured::{StructuredName, TelUri};
use super::value::VCardValue;

/// A vCard property.
#[derive(Debug, Clone, PartialEq)]
pub struct VCardProperty {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Value.
    pub value: VCardValue,
}

impl VCardProperty {
    fn with_value(name: impl Into<String>, value: VCardValue) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, VCardValue::Text(value.into()))
    }

    /// Creates a property with a comma-separated text list value.
    #[must_use]
    pub fn text_list(name: impl Into<String>, values: Vec<String>) -> Self {
        Self::with_value(name, VCardValue::TextList(values))
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, VCardValue::Uri(value.into()))
    }

    /// Creates a property with a date value.
    #[must_use]
    pub fn date(name: impl Into<String>, date: VCardDate) -> Self {
        Self::with_value(name, VCardValue::Date(date))
    }

    /// Creates an N property.
    #[must_use]
    pub fn structured_name(name: StructuredName) -> Self {
        Self::with_value(names::N, VCardValue::StructuredName(name))
    }

    /// Creates a `TEL;VALUE=uri` property with the given TYPE values.
    #[must_use]
    pub fn tel_uri(tel: &TelUri, types: Vec<String>) -> Self {
        let mut prop = Self::uri(names::TEL, tel.to_uri());
        prop.add_param(VCardParameter::value_type(super::parameter::types::URI));
        if !types.is_empty() {
            prop.add_param(VCardParameter::multi("TYPE", types));
        }
        prop
    }

    /// Creates a property whose name and value are written exactly as given.
    ///
    /// Used for properties this crate does not model; the name is not
    /// normalized and the value is not escaped.
    #[must_use]
    pub fn verbatim(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            value: VCardValue::Verbatim(value.into()),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        if let Some(param) = self.params.iter_mut().find(|p| p.name == "TYPE") {
            param.values.push(type_value.into());
        } else {
            self.params.push(VCardParameter::type_param(type_value));
        }
    }
}

/// Property names produced by the record builder.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";

    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";

    pub const CATEGORIES: &str = "CATEGORIES";
    pub const NOTE: &str = "NOTE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_text() {
        let prop = VCardProperty::text("fn", "John Doe");
        assert_eq!(prop.name, "FN");
        assert_eq!(prop.as_text(), Some("John Doe"));
    }

    #[test]
    fn property_with_types() {
        let mut prop = VCardProperty::text(names::EMAIL, "jdoe@example.com");
        prop.add_type("home");
        prop.add_type("pref");

        assert!(prop.has_type("home"));
        assert!(prop.has_type("PREF"));
        assert_eq!(prop.params.len(), 1);
    }

    #[test]
    fn tel_uri_property_carries_value_and_types() {
        let prop = VCardProperty::tel_uri(
            &TelUri::new("+3620-9123-455"),
            vec!["cell".to_string(), "work".to_string()],
        );

        assert_eq!(prop.name, "TEL");
        assert_eq!(prop.value.as_uri(), Some("tel:+3620-9123-455"));
        assert_eq!(prop.get_param("value").and_then(VCardParameter::value), Some("uri"));
        assert!(prop.has_type("cell"));
        assert!(prop.has_type("work"));
    }

    #[test]
    fn verbatim_keeps_name_case() {
        let prop = VCardProperty::verbatim("X-Custom", "a,b");
        assert_eq!(prop.name, "X-Custom");
        assert_eq!(prop.as_text(), Some("a,b"));
    }
}
