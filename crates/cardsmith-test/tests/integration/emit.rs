//! Tests for emitting records through the file sink.

use std::fs;

use cardsmith_test::component::{FileSink, MemorySink};
use cardsmith_test::rfc::rfc::vcard::{NameOrder, StructuredName, VCardVersion};

use super::helpers::*;

fn named(family: &str, given: &str) -> cardsmith_test::component::ContactRecord {
    let mut record = new_record(VCardVersion::V4);
    record
        .set_name(StructuredName::new(family).given(given), NameOrder::Western)
        .unwrap();
    record
}

/// ## Summary
/// Two records emitted to a fresh destination form one stream with two
/// blocks in emission order.
#[test_log::test]
fn two_records_share_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(dir.path());

    let mut first = named("Doe", "John");
    let mut second = named("Smith", "Jane");

    // Emission order, not creation order, decides stream order.
    second.emit(&mut sink, "example2").unwrap();
    first.emit(&mut sink, "example2").unwrap();

    let content = fs::read_to_string(dir.path().join("example2.vcf")).unwrap();
    assert_eq!(
        content,
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Smith\r\nN:Smith;Jane;;\r\nEND:VCARD\r\n\
         BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nN:Doe;John;;\r\nEND:VCARD\r\n"
    );
}

#[test]
fn long_lines_are_folded_in_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(dir.path());

    let mut record = named("Doe", "John");
    let note = "Nagyon hosszú megjegyzés, ".repeat(6);
    record.set_note(&note).unwrap();
    record.emit(&mut sink, "folded").unwrap();

    let content = fs::read_to_string(sink.path_for("folded").unwrap()).unwrap();
    for physical in content.split("\r\n") {
        assert!(physical.len() <= 75, "{physical:?}");
    }
    assert!(content.replace("\r\n ", "").contains("NOTE:Nagyon hosszú"));
}

#[test]
fn reset_starts_a_fresh_stream() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(dir.path());

    named("Old", "Entry").emit(&mut sink, "contacts").unwrap();
    sink.reset("contacts").unwrap();
    named("New", "Entry").emit(&mut sink, "contacts").unwrap();

    let content = fs::read_to_string(sink.path_for("contacts").unwrap()).unwrap();
    assert_eq!(content.matches("BEGIN:VCARD").count(), 1);
    assert!(content.contains("FN:Entry New"));
}

#[test]
fn reference_contact_matches_memory_stream() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = FileSink::new(dir.path());
    let mut memory = MemorySink::new();

    john_doe(NameOrder::Western)
        .unwrap()
        .emit(&mut files, "example1")
        .unwrap();
    john_doe(NameOrder::Western)
        .unwrap()
        .emit(&mut memory, "example1")
        .unwrap();

    let on_disk = fs::read_to_string(files.path_for("example1").unwrap()).unwrap();
    assert_eq!(Some(on_disk.as_str()), memory.stream("example1"));
    assert!(on_disk.ends_with("END:VCARD\r\n"));
}
