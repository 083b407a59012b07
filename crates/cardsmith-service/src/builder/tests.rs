use std::sync::Arc;

use chrono::NaiveDate;

use super::*;
use crate::sink::MemorySink;
use crate::validate::{EmailValidator, PhoneNumber, PhoneParseError, PhoneValidator};

/// Accepts `+` followed by at least eight digits (separators ignored).
/// Numbers starting with `+3620` belong to "Vodafone".
struct MockPhone;

impl PhoneValidator for MockPhone {
    fn parse(&self, raw: &str) -> Result<PhoneNumber, PhoneParseError> {
        if !raw.starts_with('+') || raw.chars().any(char::is_alphabetic) {
            return Err(PhoneParseError {
                number: raw.to_string(),
                reason: "not an international number".to_string(),
            });
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        Ok(PhoneNumber {
            raw: raw.to_string(),
            e164: format!("+{digits}"),
            country_code: 36,
        })
    }

    fn is_possible(&self, number: &PhoneNumber) -> bool {
        number.e164.len() > 8
    }

    fn carrier_name(&self, number: &PhoneNumber, _locale: &str) -> Option<String> {
        number
            .e164
            .starts_with("+3620")
            .then(|| "Vodafone".to_string())
    }
}

struct MockEmail;

impl EmailValidator for MockEmail {
    fn is_valid(&self, address: &str, _check_dns: bool) -> bool {
        address
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
    }
}

fn validators() -> Validators {
    Validators::new(Arc::new(MockPhone), Arc::new(MockEmail))
}

fn record() -> ContactRecord {
    ContactRecord::new(VCardVersion::V4, validators())
}

fn full_name() -> StructuredName {
    StructuredName::new("Doe")
        .given("John")
        .additional("Jimmy")
        .prefix("Dr.")
}

#[test]
fn new_record_has_header_only() {
    let record = record();
    assert_eq!(record.lines(), vec!["BEGIN:VCARD", "VERSION:4.0"]);
    assert!(!record.is_finalized());
}

#[test]
fn set_name_western() {
    let mut record = record();
    record.set_name(full_name(), NameOrder::Western).unwrap();

    let lines = record.render();
    assert_eq!(lines[2], "FN:Dr. John Jimmy Doe");
    assert_eq!(lines[3], "N:Doe;John;Jimmy;Dr.");
}

#[test]
fn set_name_eastern() {
    let mut record = record();
    record.set_name(full_name(), NameOrder::Eastern).unwrap();

    let lines = record.render();
    assert_eq!(lines[2], "FN:Dr. Doe John Jimmy");
    assert_eq!(lines[3], "N:Doe;John;Jimmy;Dr.");
}

#[test]
fn set_name_requires_family_name() {
    let mut record = record();
    let err = record
        .set_name(StructuredName::new("  ").given("John"), NameOrder::Western)
        .unwrap_err();

    assert!(matches!(err, BuilderError::MissingFamilyName));
    assert_eq!(record.lines().len(), 2);
}

#[test]
fn birthday_normalizes_iso_input() {
    let mut record = record();
    record.set_birthday("1979-03-28").unwrap();
    record.set_birthday("1979-03-28T10:15:00Z").unwrap();
    record.set_birthday("19790328").unwrap();

    let lines = record.render();
    assert_eq!(&lines[2..5], ["BDAY:1979-03-28"; 3]);
}

#[test]
fn birthday_rejects_garbage() {
    let mut record = record();
    let err = record.set_birthday("28/03/1979").unwrap_err();

    assert!(matches!(err, BuilderError::DateFormat(_)));
    assert_eq!(record.lines().len(), 2);
}

#[test]
fn anniversary_on_v4() {
    let mut record = record();
    record.set_anniversary("2004-06-12").unwrap();
    assert_eq!(record.render()[2], "ANNIVERSARY:2004-06-12");
}

#[test_log::test]
fn anniversary_gated_on_v3() {
    let mut record = ContactRecord::new(VCardVersion::V3, validators());

    let err = record.set_anniversary("2004-06-12").unwrap_err();
    assert!(matches!(
        err,
        BuilderError::VersionFeature {
            version: VCardVersion::V3,
            ..
        }
    ));

    let err = record.set_nameday("06-27").unwrap_err();
    assert!(matches!(err, BuilderError::VersionFeature { .. }));

    assert_eq!(record.render(), vec!["BEGIN:VCARD", "VERSION:3.0", "END:VCARD"]);
}

#[test]
fn nameday_is_recurring() {
    let mut record = record();
    record.set_nameday_in_year("06-27", 2023).unwrap();
    assert_eq!(record.render()[2], "ANNIVERSARY:--06-27");
}

#[test]
fn nameday_leap_day_depends_on_year() {
    let mut record = record();

    let err = record.set_nameday_in_year("02-29", 2023).unwrap_err();
    assert!(matches!(err, BuilderError::DateFormat(_)));

    record.set_nameday_in_year("02-29", 2024).unwrap();
    assert_eq!(record.render()[2], "ANNIVERSARY:--02-29");
}

#[test]
fn nameday_uses_current_year() {
    let year = Local::now().year();
    let leap = NaiveDate::from_ymd_opt(year, 2, 29).is_some();

    let mut record = record();
    assert_eq!(record.set_nameday("02-29").is_ok(), leap);
    assert!(matches!(
        record.set_nameday("02-30"),
        Err(BuilderError::DateFormat(_))
    ));
}

#[test]
fn categories_note_and_other() {
    let mut record = record();
    record.set_categories("family, tester").unwrap();
    record.set_note("Met at the conference; likes tea").unwrap();
    record.set_other("X-CUSTOM", "a,b;c").unwrap();

    let lines = record.render();
    assert_eq!(lines[2], "CATEGORIES:family,tester");
    assert_eq!(lines[3], "NOTE:Met at the conference\\; likes tea");
    assert_eq!(lines[4], "X-CUSTOM:a,b;c");
}

#[test]
fn email_with_type() {
    let mut record = record();
    assert!(record.add_email("jdoe@example.com", "work").unwrap());
    assert_eq!(record.render()[2], "EMAIL;TYPE=work:jdoe@example.com");
}

#[test_log::test]
fn invalid_email_is_dropped_with_warning() {
    let mut record = record();

    assert!(!record.add_email("not-an-email", "home").unwrap());
    assert_eq!(record.lines().len(), 2);
    assert_eq!(
        record.diagnostics(),
        [Diagnostic::InvalidEmail {
            address: "not-an-email".to_string()
        }]
    );
}

#[test]
fn email_batch_uses_home_type() {
    let mut record = record();
    let accepted = record
        .add_emails(["jdoe@example.com", "bogus", "john@example.org"])
        .unwrap();

    assert_eq!(accepted, 2);
    let lines = record.render();
    assert_eq!(lines[2], "EMAIL;TYPE=home:jdoe@example.com");
    assert_eq!(lines[3], "EMAIL;TYPE=home:john@example.org");
    assert_eq!(record.diagnostics().len(), 1);
}

#[test]
fn phone_on_mobile_carrier_gains_cell() {
    let mut record = record();
    assert!(record
        .add_phone("+3620-9123-455", &["Vodafone"], "work")
        .unwrap());

    assert_eq!(
        record.render()[2],
        "TEL;VALUE=uri;TYPE=cell,work:tel:+3620-9123-455"
    );
}

#[test]
fn phone_without_carrier_list_keeps_type() {
    let mut record = record();
    record.add_phone("+3620-9123-455", &[], "home").unwrap();
    record.add_phone("+3614346047", &["Vodafone"], "home").unwrap();

    let lines = record.render();
    assert_eq!(lines[2], "TEL;VALUE=uri;TYPE=home:tel:+3620-9123-455");
    assert_eq!(lines[3], "TEL;VALUE=uri;TYPE=home:tel:+3614346047");
}

#[test]
fn cell_is_not_duplicated() {
    let mut record = record();
    record.add_phone("+36209123455", &["Vodafone"], "cell").unwrap();
    assert_eq!(record.render()[2], "TEL;VALUE=uri;TYPE=cell:tel:+36209123455");
}

#[test]
fn bad_phones_are_dropped_with_warnings() {
    let mut record = record();

    assert!(!record.add_phone("call me", &[], "home").unwrap());
    assert!(!record.add_phone("+36 1", &[], "home").unwrap());

    assert_eq!(record.lines().len(), 2);
    assert!(matches!(
        record.diagnostics(),
        [
            Diagnostic::UnparseablePhone { .. },
            Diagnostic::ImpossiblePhone { .. }
        ]
    ));
}

#[test]
fn phone_batch_shares_carriers() {
    let mut record = record();
    let accepted = record
        .add_phones(["+3620-9123-455", "+3614346047", "nope"], &["Vodafone"])
        .unwrap();

    assert_eq!(accepted, 2);
    let lines = record.render();
    assert_eq!(lines[2], "TEL;VALUE=uri;TYPE=cell,home:tel:+3620-9123-455");
    assert_eq!(lines[3], "TEL;VALUE=uri;TYPE=home:tel:+3614346047");
}

#[test]
fn properties_keep_call_order() {
    let mut record = record();
    record.set_note("first").unwrap();
    record.set_name(StructuredName::new("Doe"), NameOrder::Western).unwrap();
    record.set_birthday("1979-03-28").unwrap();

    let lines = record.render();
    assert_eq!(
        lines,
        vec![
            "BEGIN:VCARD",
            "VERSION:4.0",
            "NOTE:first",
            "FN:Doe",
            "N:Doe;;;",
            "BDAY:1979-03-28",
            "END:VCARD",
        ]
    );
}

#[test]
fn finalize_is_idempotent() {
    let mut record = record();
    record.set_note("x").unwrap();
    record.finalize();
    record.finalize();

    let first = record.render();
    let second = record.render();
    assert_eq!(first, second);
    assert_eq!(first.iter().filter(|l| *l == "END:VCARD").count(), 1);
}

#[test]
fn closed_record_rejects_additions() {
    let mut record = record();
    record.finalize();

    assert!(matches!(
        record.set_note("late"),
        Err(BuilderError::RecordClosed(_))
    ));
    assert!(matches!(
        record.add_email("jdoe@example.com", "home"),
        Err(BuilderError::RecordClosed(_))
    ));
    assert!(record.is_finalized());
    assert_eq!(record.render().len(), 3);
}

#[test_log::test]
fn emit_appends_in_call_order() {
    let mut sink = MemorySink::new();

    let mut john = record();
    john.set_name(StructuredName::new("Doe").given("John"), NameOrder::Western)
        .unwrap();
    let mut jane = record();
    jane.set_name(StructuredName::new("Doe").given("Jane"), NameOrder::Western)
        .unwrap();

    john.emit(&mut sink, "family").unwrap();
    jane.emit(&mut sink, "family").unwrap();

    assert!(john.is_finalized());
    assert_eq!(sink.record_count("family"), 2);

    let stream = sink.stream("family").unwrap();
    assert!(stream.find("FN:John Doe") < stream.find("FN:Jane Doe"));
    assert_eq!(stream.matches("END:VCARD\r\n").count(), 2);
}
