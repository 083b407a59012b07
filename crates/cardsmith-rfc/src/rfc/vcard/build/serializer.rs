//! vCard serialization.

use std::fmt::Write as _;

use cardsmith_core::constants::{BEGIN_LINE, CRLF, END_LINE, VERSION_PREFIX};

use super::escape::{escape_component, escape_param_value, escape_text};
use super::fold::fold_line;
use crate::rfc::vcard::core::{
    StructuredName, VCardDate, VCardParameter, VCardProperty, VCardValue, VCardVersion,
};

/// Returns the fixed header lines (`BEGIN`, `VERSION`) for a record.
#[must_use]
pub fn header_lines(version: VCardVersion) -> [String; 2] {
    [
        BEGIN_LINE.to_string(),
        format!("{VERSION_PREFIX}{}", version.as_str()),
    ]
}

/// Returns the fixed footer line of a record.
#[must_use]
pub fn footer_line() -> String {
    END_LINE.to_string()
}

/// Encodes a complete record as unfolded content lines.
///
/// ## Summary
/// Header, then `props` in the given order, then footer. No reordering
/// takes place; callers control property order.
#[must_use]
pub fn record_lines(version: VCardVersion, props: &[VCardProperty]) -> Vec<String> {
    let mut lines = Vec::with_capacity(props.len() + 3);
    lines.extend(header_lines(version));
    lines.extend(props.iter().map(content_line));
    lines.push(footer_line());
    lines
}

/// Joins content lines into a byte-ready stream.
///
/// Each line is folded at 75 octets and terminated with CRLF.
#[must_use]
pub fn serialize<S: AsRef<str>>(lines: &[S]) -> String {
    let mut output = String::new();

    for line in lines {
        output.push_str(&fold_line(line.as_ref()));
        output.push_str(CRLF);
    }

    output
}

/// Encodes one property as a single unfolded content line.
#[must_use]
pub fn content_line(prop: &VCardProperty) -> String {
    let mut line = String::new();

    line.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, &mut line);
    }

    line.push(':');
    serialize_value(&prop.value, &mut line);

    line
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}

fn serialize_value(value: &VCardValue, output: &mut String) {
    match value {
        VCardValue::Text(s) => {
            output.push_str(&escape_text(s));
        }
        VCardValue::TextList(list) => {
            for (i, s) in list.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                output.push_str(&escape_component(s));
            }
        }
        // URIs and caller-supplied values are not escaped
        VCardValue::Uri(s) | VCardValue::Verbatim(s) => {
            output.push_str(s);
        }
        VCardValue::StructuredName(name) => {
            serialize_structured_name(name, output);
        }
        VCardValue::Date(date) => {
            serialize_date(date, output);
        }
    }
}

fn serialize_structured_name(name: &StructuredName, output: &mut String) {
    // family;given;additional;prefix
    for (i, component) in name.components().iter().enumerate() {
        if i > 0 {
            output.push(';');
        }
        output.push_str(&escape_component(component));
    }
}

fn serialize_date(date: &VCardDate, output: &mut String) {
    match date {
        VCardDate::Full(d) => {
            write!(output, "{}", d.format("%Y-%m-%d")).ok();
        }
        VCardDate::MonthDay { month, day } => {
            write!(output, "--{month:02}-{day:02}").ok();
        }
    }
}
