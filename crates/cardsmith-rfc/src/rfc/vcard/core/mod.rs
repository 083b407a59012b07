//! vCard core types (RFC 6350).
//!
//! - [`VCardVersion`] - Declared version of a record
//! - [`VCardProperty`] - Individual property with parameters and value
//! - [`VCardParameter`] - Property parameters
//! - [`VCardValue`] - Property value variants
//! - [`StructuredName`] - N property (family, given, etc.)
//! - [`VCardDate`] - Full or partial (month-day) date
//!
//! ## Example
//!
//! ```rust
//! use cardsmith_rfc::rfc::vcard::core::{VCardProperty, names};
//!
//! let mut prop = VCardProperty::text(names::EMAIL, "john@example.com");
//! prop.add_type("work");
//! assert!(prop.has_type("WORK"));
//! ```

mod datetime;
mod parameter;
mod property;
mod structured;
mod value;
mod version;

pub use datetime::{VCardDate, parse_iso_date, parse_month_day};
pub use parameter::{VCardParameter, types};
pub use property::{VCardProperty, names};
pub use structured::{NameOrder, StructuredName, TelUri};
pub use value::VCardValue;
pub use version::VCardVersion;
