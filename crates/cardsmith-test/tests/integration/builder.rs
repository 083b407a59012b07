//! Tests for building single records with the default adapters.

use cardsmith_test::component::{BuilderError, Diagnostic};
use cardsmith_test::rfc::rfc::vcard::{NameOrder, StructuredName, VCardVersion};

use super::helpers::*;

/// ## Summary
/// The reference contact renders every property in call order.
#[test_log::test]
fn reference_contact_renders_in_call_order() {
    let mut record = john_doe(NameOrder::Western).unwrap();

    assert_eq!(
        record.render(),
        vec![
            "BEGIN:VCARD",
            "VERSION:4.0",
            "FN:Dr. John Jimmy Doe",
            "N:Doe;John;Jimmy;Dr.",
            "BDAY:1979-03-28",
            "ANNIVERSARY:2005-07-12",
            "ANNIVERSARY:2015-09-06",
            "ANNIVERSARY:--06-27",
            "CATEGORIES:family,tester",
            "NOTE:Uncle",
            "NICKNAME:Johnny, Jim",
            "EMAIL;TYPE=home:jdoe@gmail.com",
            "EMAIL;TYPE=home:jimdoe@gmail.com",
            "EMAIL;TYPE=work:jjdoe@gmail.com",
            "TEL;VALUE=uri;TYPE=work:tel:+3620-9123-455",
            "TEL;VALUE=uri;TYPE=work:tel:+3614346047",
            "TEL;VALUE=uri;TYPE=home:tel:+3612451654",
            "TEL;VALUE=uri;TYPE=home:tel:+3630-8025-365",
            "END:VCARD",
        ]
    );
    assert!(record.diagnostics().is_empty());
}

#[test]
fn eastern_order_only_changes_display_name() {
    let mut western = john_doe(NameOrder::Western).unwrap();
    let mut eastern = john_doe(NameOrder::Eastern).unwrap();

    let western = western.render();
    let eastern = eastern.render();

    assert_eq!(eastern[2], "FN:Dr. Doe John Jimmy");
    assert_eq!(western[3], eastern[3]);
    assert_eq!(western[4..], eastern[4..]);
}

/// ## Summary
/// A carrier listed as mobile adds the `cell` type in front of the given one.
#[test_log::test]
fn mobile_carrier_prepends_cell() {
    let mut record = new_record(VCardVersion::V4);

    assert!(record.add_phone("+3620-9123-455", &["Telenor"], "work").unwrap());
    assert!(record.add_phone("+3630-8025-365", &["Telenor"], "work").unwrap());

    let lines = record.render();
    assert_eq!(lines[2], "TEL;VALUE=uri;TYPE=cell,work:tel:+3620-9123-455");
    assert_eq!(lines[3], "TEL;VALUE=uri;TYPE=work:tel:+3630-8025-365");
}

#[test_log::test]
fn bad_contact_details_leave_diagnostics() {
    let mut record = new_record(VCardVersion::V4);

    assert!(!record.add_email("not-an-email", "home").unwrap());
    assert!(!record.add_phone("hello", &[], "home").unwrap());

    assert_eq!(record.render().len(), 3);
    assert_eq!(record.diagnostics().len(), 2);
    assert!(matches!(
        record.diagnostics()[0],
        Diagnostic::InvalidEmail { .. }
    ));
}

#[test]
fn version_three_rejects_anniversaries() {
    let mut record = new_record(VCardVersion::V3);
    record
        .set_name(StructuredName::new("Doe").given("John"), NameOrder::Western)
        .unwrap();

    assert!(matches!(
        record.set_anniversary("2015-09-06"),
        Err(BuilderError::VersionFeature { .. })
    ));
    assert!(matches!(
        record.set_nameday("06-27"),
        Err(BuilderError::VersionFeature { .. })
    ));

    assert_eq!(
        record.render(),
        vec!["BEGIN:VCARD", "VERSION:3.0", "FN:John Doe", "N:Doe;John;;", "END:VCARD"]
    );
}

#[test]
fn finalized_record_stays_closed() {
    let mut record = john_doe(NameOrder::Western).unwrap();
    let rendered = record.render();

    assert!(matches!(
        record.set_note("late"),
        Err(BuilderError::RecordClosed(_))
    ));
    record.finalize();
    assert_eq!(record.render(), rendered);
}
