//! Contact record builder.
//!
//! A [`ContactRecord`] accumulates vCard properties in call order and is
//! finalized exactly once. Structural problems (unparseable dates, version
//! mismatches, a missing family name, writing to a closed record) are
//! returned as [`BuilderError`]s. Rejected emails and phone numbers only drop
//! the affected property and leave a [`Diagnostic`] behind.

#[cfg(test)]
mod tests;

use chrono::{Datelike, Local};

use cardsmith_core::constants::{DEFAULT_CONTACT_TYPE, MOBILE_TYPE};
use cardsmith_rfc::rfc::vcard::build::{content_line, footer_line, header_lines};
use cardsmith_rfc::rfc::vcard::core::{
    NameOrder, StructuredName, TelUri, VCardDate, VCardProperty, VCardVersion, names,
    parse_iso_date, parse_month_day,
};

use crate::diagnostics::Diagnostic;
use crate::error::{BuilderError, BuilderResult};
use crate::sink::Sink;
use crate::validate::Validators;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    Open,
    Closed,
}

/// One contact card under construction.
#[derive(Debug)]
pub struct ContactRecord {
    version: VCardVersion,
    properties: Vec<VCardProperty>,
    state: RecordState,
    validators: Validators,
    diagnostics: Vec<Diagnostic>,
}

impl ContactRecord {
    /// Creates an open record declaring `version`.
    #[must_use]
    pub fn new(version: VCardVersion, validators: Validators) -> Self {
        Self {
            version,
            properties: Vec::new(),
            state: RecordState::Open,
            validators,
            diagnostics: Vec::new(),
        }
    }

    /// ## Summary
    /// Appends the display name (FN) followed by the structured name (N).
    ///
    /// ## Errors
    /// Returns [`BuilderError::MissingFamilyName`] if the family name is blank
    /// and [`BuilderError::RecordClosed`] once the record is finalized.
    pub fn set_name(&mut self, name: StructuredName, order: NameOrder) -> BuilderResult<()> {
        self.ensure_open(names::N)?;

        if name.family.trim().is_empty() {
            return Err(BuilderError::MissingFamilyName);
        }

        let display = name.display_name(order);
        self.push(VCardProperty::text(names::FN, display));
        self.push(VCardProperty::structured_name(name));
        Ok(())
    }

    /// ## Summary
    /// Appends BDAY from an ISO 8601 date or date-time.
    ///
    /// ## Errors
    /// Returns [`BuilderError::DateFormat`] if `date` does not parse.
    pub fn set_birthday(&mut self, date: &str) -> BuilderResult<()> {
        self.ensure_open(names::BDAY)?;

        let date = parse_iso_date(date)?;
        self.push(VCardProperty::date(names::BDAY, VCardDate::full(date)));
        Ok(())
    }

    /// ## Summary
    /// Appends ANNIVERSARY from an ISO 8601 date or date-time.
    ///
    /// ## Errors
    /// Returns [`BuilderError::VersionFeature`] on a 3.0 record and
    /// [`BuilderError::DateFormat`] if `date` does not parse.
    pub fn set_anniversary(&mut self, date: &str) -> BuilderResult<()> {
        self.ensure_open(names::ANNIVERSARY)?;
        self.ensure_anniversary_supported()?;

        let date = parse_iso_date(date)?;
        self.push(VCardProperty::date(names::ANNIVERSARY, VCardDate::full(date)));
        Ok(())
    }

    /// ## Summary
    /// Appends a recurring ANNIVERSARY (`--MM-DD`) from an `MM-DD` nameday.
    ///
    /// The day is checked against the current year, so `02-29` is only
    /// accepted in leap years.
    ///
    /// ## Errors
    /// Returns [`BuilderError::VersionFeature`] on a 3.0 record and
    /// [`BuilderError::DateFormat`] if the day does not exist this year.
    pub fn set_nameday(&mut self, month_day: &str) -> BuilderResult<()> {
        self.set_nameday_in_year(month_day, Local::now().year())
    }

    /// Same as [`Self::set_nameday`], validating against `year`.
    ///
    /// ## Errors
    /// See [`Self::set_nameday`].
    pub fn set_nameday_in_year(&mut self, month_day: &str, year: i32) -> BuilderResult<()> {
        self.ensure_open(names::ANNIVERSARY)?;
        self.ensure_anniversary_supported()?;

        let date = parse_month_day(month_day, year)?;
        self.push(VCardProperty::date(names::ANNIVERSARY, date));
        Ok(())
    }

    /// Appends CATEGORIES from a comma-separated tag list.
    ///
    /// ## Errors
    /// Returns [`BuilderError::RecordClosed`] once the record is finalized.
    pub fn set_categories(&mut self, tags: &str) -> BuilderResult<()> {
        self.ensure_open(names::CATEGORIES)?;

        let tags = tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        self.push(VCardProperty::text_list(names::CATEGORIES, tags));
        Ok(())
    }

    /// Appends NOTE.
    ///
    /// ## Errors
    /// Returns [`BuilderError::RecordClosed`] once the record is finalized.
    pub fn set_note(&mut self, text: &str) -> BuilderResult<()> {
        self.ensure_open(names::NOTE)?;
        self.push(VCardProperty::text(names::NOTE, text));
        Ok(())
    }

    /// Appends `<name>:<value>` exactly as given.
    ///
    /// ## Errors
    /// Returns [`BuilderError::RecordClosed`] once the record is finalized.
    pub fn set_other(&mut self, name: &str, value: &str) -> BuilderResult<()> {
        self.ensure_open("other property")?;
        self.push(VCardProperty::verbatim(name, value));
        Ok(())
    }

    /// ## Summary
    /// Validates `address` and appends EMAIL with the TYPE values in `kind`
    /// (comma-separated).
    ///
    /// Returns `Ok(false)` when the validator rejected the address; a
    /// [`Diagnostic::InvalidEmail`] is recorded and nothing is appended.
    ///
    /// ## Errors
    /// Returns [`BuilderError::RecordClosed`] once the record is finalized.
    pub fn add_email(&mut self, address: &str, kind: &str) -> BuilderResult<bool> {
        self.ensure_open(names::EMAIL)?;

        if !self
            .validators
            .email
            .is_valid(address, self.validators.check_dns)
        {
            self.warn(Diagnostic::InvalidEmail {
                address: address.to_string(),
            });
            return Ok(false);
        }

        let mut prop = VCardProperty::text(names::EMAIL, address);
        for type_value in split_types(kind) {
            prop.add_type(type_value);
        }
        self.push(prop);
        Ok(true)
    }

    /// Adds each address with the default `home` type.
    ///
    /// Returns how many addresses were accepted.
    ///
    /// ## Errors
    /// Returns [`BuilderError::RecordClosed`] once the record is finalized.
    pub fn add_emails<I, S>(&mut self, addresses: I) -> BuilderResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = 0;
        for address in addresses {
            if self.add_email(address.as_ref(), DEFAULT_CONTACT_TYPE)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// ## Summary
    /// Validates `number` and appends `TEL;VALUE=uri;TYPE=<kind>`.
    ///
    /// When `mobile_carriers` is not empty the number's carrier is looked up,
    /// and a match puts `cell` in front of the TYPE values. A `kind` that
    /// already holds `cell` is left as is, never `cell,cell`. The number is
    /// written as supplied.
    ///
    /// Returns `Ok(false)` when the number could not be parsed or is not
    /// possible; a diagnostic is recorded and nothing is appended.
    ///
    /// ## Errors
    /// Returns [`BuilderError::RecordClosed`] once the record is finalized.
    pub fn add_phone(
        &mut self,
        number: &str,
        mobile_carriers: &[&str],
        kind: &str,
    ) -> BuilderResult<bool> {
        self.ensure_open(names::TEL)?;

        let parsed = match self.validators.phone.parse(number) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.warn(Diagnostic::UnparseablePhone {
                    number: number.to_string(),
                    reason: e.reason,
                });
                return Ok(false);
            }
        };

        if !self.validators.phone.is_possible(&parsed) {
            self.warn(Diagnostic::ImpossiblePhone {
                number: number.to_string(),
            });
            return Ok(false);
        }

        let mut types = split_types(kind);

        if !mobile_carriers.is_empty() {
            let carrier = self
                .validators
                .phone
                .carrier_name(&parsed, &self.validators.carrier_locale);

            let is_mobile = carrier
                .as_deref()
                .is_some_and(|name| mobile_carriers.contains(&name));

            if is_mobile && !types.iter().any(|t| t.eq_ignore_ascii_case(MOBILE_TYPE)) {
                types.insert(0, MOBILE_TYPE.to_string());
            }
        }

        self.push(VCardProperty::tel_uri(&TelUri::new(number), types));
        Ok(true)
    }

    /// Adds each number with the default `home` type and a shared carrier
    /// list.
    ///
    /// Returns how many numbers were accepted.
    ///
    /// ## Errors
    /// Returns [`BuilderError::RecordClosed`] once the record is finalized.
    pub fn add_phones<I, S>(&mut self, numbers: I, mobile_carriers: &[&str]) -> BuilderResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = 0;
        for number in numbers {
            if self.add_phone(number.as_ref(), mobile_carriers, DEFAULT_CONTACT_TYPE)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Closes the record. Further calls do nothing.
    pub fn finalize(&mut self) {
        if self.state == RecordState::Open {
            self.state = RecordState::Closed;
            tracing::trace!(properties = self.properties.len(), "Record finalized");
        }
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.state == RecordState::Closed
    }

    /// Returns the record's content lines without finalizing it.
    ///
    /// The footer is only present once the record is closed.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.properties.len() + 3);
        lines.extend(header_lines(self.version));
        lines.extend(self.properties.iter().map(content_line));
        if self.is_finalized() {
            lines.push(footer_line());
        }
        lines
    }

    /// Finalizes the record and returns its unfolded content lines.
    pub fn render(&mut self) -> Vec<String> {
        self.finalize();
        self.lines()
    }

    /// ## Summary
    /// Finalizes the record and appends it to `destination` on `sink`.
    ///
    /// ## Errors
    /// Returns [`BuilderError::Sink`] if the sink cannot write.
    #[tracing::instrument(skip(self, sink), fields(version = %self.version))]
    pub fn emit<S: Sink + ?Sized>(&mut self, sink: &mut S, destination: &str) -> BuilderResult<()> {
        let lines = self.render();
        sink.append(destination, &lines)?;
        tracing::debug!(lines = lines.len(), "Record emitted");
        Ok(())
    }

    /// Returns the data-quality problems found so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn ensure_open(&self, property: &'static str) -> BuilderResult<()> {
        match self.state {
            RecordState::Open => Ok(()),
            RecordState::Closed => Err(BuilderError::RecordClosed(property)),
        }
    }

    fn ensure_anniversary_supported(&self) -> BuilderResult<()> {
        if self.version.supports_anniversary() {
            Ok(())
        } else {
            Err(BuilderError::VersionFeature {
                property: names::ANNIVERSARY,
                version: self.version,
            })
        }
    }

    fn push(&mut self, prop: VCardProperty) {
        tracing::debug!(property = %prop.name, "Appending property");
        self.properties.push(prop);
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit();
        self.diagnostics.push(diagnostic);
    }
}

/// Splits a comma-separated type tag into TYPE values.
fn split_types(kind: &str) -> Vec<String> {
    kind.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
