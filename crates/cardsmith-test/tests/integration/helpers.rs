//! Test helpers for integration tests.
//!
//! Provides validators with the default adapters (no DNS), a Hungarian
//! carrier table and the reference contact used across tests.

use std::sync::Arc;

use cardsmith_test::component::validate::{
    CarrierTable, LibPhoneValidator, StandardEmailValidator, Validators,
};
use cardsmith_test::component::{BuilderResult, ContactRecord};
use cardsmith_test::rfc::rfc::vcard::{NameOrder, StructuredName, VCardVersion};

pub fn hungarian_carriers() -> CarrierTable {
    CarrierTable::new()
        .with_prefix("+3620", "Telenor")
        .with_prefix("+3630", "Magyar Telekom")
        .with_prefix("+3670", "Vodafone")
}

/// Default adapters with the DNS check turned off.
pub fn offline_validators() -> Validators {
    Validators::new(
        Arc::new(LibPhoneValidator::new(hungarian_carriers())),
        Arc::new(StandardEmailValidator::new()),
    )
    .with_dns_check(false)
}

pub fn new_record(version: VCardVersion) -> ContactRecord {
    ContactRecord::new(version, offline_validators())
}

/// Builds the John Doe reference contact.
pub fn john_doe(order: NameOrder) -> BuilderResult<ContactRecord> {
    let mut record = new_record(VCardVersion::V4);

    record.set_name(
        StructuredName::new("Doe")
            .given("John")
            .additional("Jimmy")
            .prefix("Dr."),
        order,
    )?;
    record.set_birthday("1979-03-28")?;
    record.set_anniversary("2005-07-12T08:30:00Z")?;
    record.set_anniversary("2015-09-06")?;
    record.set_nameday_in_year("06-27", 2024)?;
    record.set_categories("family,tester")?;
    record.set_note("Uncle")?;
    record.set_other("NICKNAME", "Johnny, Jim")?;
    record.add_emails(["jdoe@gmail.com", "jimdoe@gmail.com"])?;
    record.add_email("jjdoe@gmail.com", "work")?;
    record.add_phone("+3620-9123-455", &[], "work")?;
    record.add_phone("+3614346047", &[], "work")?;
    record.add_phones(["+3612451654", "+3630-8025-365"], &[])?;

    Ok(record)
}
