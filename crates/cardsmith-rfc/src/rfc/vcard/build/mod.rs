//! vCard serialization (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use cardsmith_rfc::rfc::vcard::{VCardProperty, VCardVersion};
//! use cardsmith_rfc::rfc::vcard::build::{record_lines, serialize};
//!
//! let props = vec![VCardProperty::text("FN", "John Doe")];
//! let output = serialize(&record_lines(VCardVersion::V4, &props));
//! assert!(output.ends_with("END:VCARD\r\n"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe)
//! - Text escaping per RFC 6350
//! - RFC 6868 caret encoding for parameters
//! - Insertion-order output; only header and footer are fixed

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_component, escape_param_value, escape_text};
pub use fold::fold_line;
pub use serializer::{content_line, footer_line, header_lines, record_lines, serialize};
