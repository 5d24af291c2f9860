//! Test fixtures: a typical roster of clients.
//!
//! `amy()` and `bob()` are not in [`typical_address_book`] and come with the
//! `VALID_*` constants used to build edited variants.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use tutor_book::domain::PayStatus;
use tutor_book::{AddressBook, Person, PersonBuilder};

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_AMY: &str = "11111111";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_ADDRESS_AMY: &str = "Block 312, Amy Street 1";
pub const VALID_ADDRESS_BOB: &str = "Block 123, Bobby Street 3";
pub const VALID_SUBJECT_MATH: &str = "Math";
pub const VALID_SUBJECT_ENGLISH: &str = "English";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// A minimal valid person with the given name and phone.
pub fn person(name: &str, phone: &str) -> PersonBuilder {
    PersonBuilder::new()
        .name(name)
        .phone(phone)
        .address("123, Jurong West Ave 6, #08-111")
}

pub fn alice() -> Person {
    PersonBuilder::new()
        .name("Alice Pauline")
        .phone("94351253")
        .address("123, Jurong West Ave 6, #08-111")
        .pay_status(PayStatus::Paid)
        .subject("English")
        .build()
        .unwrap()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .address("311, Clementi Ave 2, #02-25")
        .subjects(["Math", "Physics"])
        .next_lesson(date(2025, 6, 11), time(10, 0), time(12, 0))
        .build()
        .unwrap()
}

pub fn carl() -> Person {
    PersonBuilder::new()
        .name("Carl Kurz")
        .phone("95352563")
        .address("wall street")
        .build()
        .unwrap()
}

pub fn daniel() -> Person {
    PersonBuilder::new()
        .name("Daniel Meier")
        .phone("87652533")
        .address("10th street")
        .pay_status(PayStatus::Paid)
        .subject("Chemistry")
        .next_lesson(date(2025, 6, 10), time(15, 0), time(16, 30))
        .build()
        .unwrap()
}

pub fn elle() -> Person {
    PersonBuilder::new()
        .name("Elle Meyer")
        .phone("94822240")
        .address("michegan ave")
        .build()
        .unwrap()
}

pub fn amy() -> Person {
    PersonBuilder::new()
        .name(VALID_NAME_AMY)
        .phone(VALID_PHONE_AMY)
        .address(VALID_ADDRESS_AMY)
        .subject(VALID_SUBJECT_ENGLISH)
        .build()
        .unwrap()
}

pub fn bob() -> Person {
    PersonBuilder::new()
        .name(VALID_NAME_BOB)
        .phone(VALID_PHONE_BOB)
        .address(VALID_ADDRESS_BOB)
        .pay_status(PayStatus::Paid)
        .subjects([VALID_SUBJECT_MATH, VALID_SUBJECT_ENGLISH])
        .build()
        .unwrap()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel(), elle()]
}

pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in typical_persons() {
        book.add_person(person).unwrap();
    }
    book
}
