//! Shared test fixtures for building records and books.

#![allow(dead_code)]

use address_book::{AddressBook, Record};

/// Build a record with the given phones, panicking on invalid input.
pub fn record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(*phone).expect("valid phone");
    }
    record
}

/// The John/Jane book used by the demonstration routine.
pub fn demo_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(record("John", &["1234567890", "5555555555"]));
    book.add_record(record("Jane", &["9876543210"]));
    book
}

/// Phone values of a record, in stored order.
pub fn phone_values(record: &Record) -> Vec<String> {
    record
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}
