//! vCard encoding (RFC 6350).
//!
//! This module provides the value model and line encoder used to generate
//! vCard records. Only generation is supported; nothing here parses existing
//! cards.
//!
//! ## Overview
//!
//! Both vCard 3.0 (RFC 2426) and 4.0 (RFC 6350) headers are produced. Some
//! properties (ANNIVERSARY, partial dates) only exist in 4.0; callers check
//! [`VCardVersion::supports_anniversary`] before encoding them.
//!
//! ## Usage
//!
//! ```rust
//! use cardsmith_rfc::rfc::vcard::{VCardProperty, VCardVersion, build::record_lines};
//!
//! let props = vec![VCardProperty::text("FN", "Jane Doe")];
//! let lines = record_lines(VCardVersion::V4, &props);
//!
//! assert_eq!(lines[0], "BEGIN:VCARD");
//! assert_eq!(lines[2], "FN:Jane Doe");
//! ```
//!
//! ## Ordering
//!
//! Properties are emitted in the order they were added. Only the header
//! (`BEGIN`, `VERSION`) and footer (`END`) positions are fixed.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCardProperty`, `VCardValue`, `VCardDate`, etc.)
//! - [`build`] - Escaping, folding and content-line serialization

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{content_line, record_lines, serialize};
pub use core::{
    NameOrder, StructuredName, VCardDate, VCardParameter, VCardProperty, VCardValue, VCardVersion,
};
