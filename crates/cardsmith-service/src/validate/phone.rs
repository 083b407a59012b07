//! Phone number plausibility and carrier lookup.

use std::collections::HashMap;

use phonenumber::Mode;
use phonenumber::metadata::DATABASE;
use thiserror::Error;

/// A phone number the validator could not parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse phone number {number:?}: {reason}")]
pub struct PhoneParseError {
    pub number: String,
    pub reason: String,
}

/// A parsed phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    /// Input exactly as the caller supplied it.
    pub raw: String,
    /// E.164 form (`+` and digits only).
    pub e164: String,
    /// Country calling code.
    pub country_code: u16,
}

/// Phone number validation contract.
pub trait PhoneValidator: Send + Sync {
    /// Parses a raw phone string.
    ///
    /// ## Errors
    /// Returns [`PhoneParseError`] if the string is not a phone number at all.
    fn parse(&self, raw: &str) -> Result<PhoneNumber, PhoneParseError>;

    /// Returns whether the parsed number is a possible number: its length
    /// fits the numbering plan, whatever the digits are.
    fn is_possible(&self, number: &PhoneNumber) -> bool;

    /// Resolves the carrier the number was originally assigned to, if known.
    fn carrier_name(&self, number: &PhoneNumber, locale: &str) -> Option<String>;
}

/// Carrier names keyed by E.164 prefix (e.g. `+3670` -> `Vodafone`).
///
/// Lookups use the longest matching prefix. Names are not localized; the
/// same name is returned for every locale.
#[derive(Debug, Clone, Default)]
pub struct CarrierTable {
    prefixes: HashMap<String, String>,
}

impl CarrierTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prefix. A missing leading `+` is added.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str, carrier: impl Into<String>) -> Self {
        self.insert(prefix, carrier);
        self
    }

    /// Adds a prefix. A missing leading `+` is added.
    pub fn insert(&mut self, prefix: &str, carrier: impl Into<String>) {
        let digits: String = prefix.chars().filter(char::is_ascii_digit).collect();
        self.prefixes.insert(format!("+{digits}"), carrier.into());
    }

    /// Returns the carrier for the longest prefix of `e164`.
    #[must_use]
    pub fn lookup(&self, e164: &str) -> Option<&str> {
        (1..=e164.len())
            .rev()
            .filter_map(|end| e164.get(..end))
            .find_map(|prefix| self.prefixes.get(prefix))
            .map(String::as_str)
    }

    /// Returns whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for CarrierTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (prefix, carrier) in iter {
            table.insert(prefix.as_ref(), carrier);
        }
        table
    }
}

/// [`PhoneValidator`] backed by the `phonenumber` crate (libphonenumber
/// metadata).
///
/// Numbers must be in international form (leading `+`); there is no default
/// region. Plausibility only checks the national number length against the
/// possible lengths of the country's regions, like libphonenumber's
/// `isPossibleNumber`. Carrier names come from a [`CarrierTable`].
#[derive(Debug, Clone, Default)]
pub struct LibPhoneValidator {
    carriers: CarrierTable,
}

impl LibPhoneValidator {
    /// Creates a validator with the given carrier table.
    #[must_use]
    pub fn new(carriers: CarrierTable) -> Self {
        Self { carriers }
    }
}

impl PhoneValidator for LibPhoneValidator {
    fn parse(&self, raw: &str) -> Result<PhoneNumber, PhoneParseError> {
        let parsed = phonenumber::parse(None, raw).map_err(|e| PhoneParseError {
            number: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(PhoneNumber {
            raw: raw.to_string(),
            e164: parsed.format().mode(Mode::E164).to_string(),
            country_code: parsed.code().value(),
        })
    }

    fn is_possible(&self, number: &PhoneNumber) -> bool {
        let Some(length) = national_length(number) else {
            return false;
        };

        DATABASE
            .by_code(&number.country_code)
            .is_some_and(|regions| {
                regions.iter().any(|metadata| {
                    let general = metadata.descriptors().general();
                    general.possible_length().contains(&length)
                        || general.possible_local_length().contains(&length)
                })
            })
    }

    fn carrier_name(&self, number: &PhoneNumber, locale: &str) -> Option<String> {
        let carrier = self.carriers.lookup(&number.e164).map(str::to_string);
        tracing::trace!(number = %number.e164, %locale, ?carrier, "Carrier lookup");
        carrier
    }
}

/// Digits of the national significant number.
fn national_length(number: &PhoneNumber) -> Option<u16> {
    let prefix = 1 + number.country_code.to_string().len();
    let length = number.e164.len().checked_sub(prefix)?;
    u16::try_from(length).ok().filter(|&l| l > 0)
}
