//! Sample roster used to populate a fresh address book.

use crate::domain::PayStatus;
use crate::models::{AddressBook, Person, PersonBuilder};
use chrono::{NaiveDate, NaiveTime};

fn slot(year: i32, month: u32, day: u32, start: u32, end: u32) -> (NaiveDate, NaiveTime, NaiveTime) {
    (
        NaiveDate::from_ymd_opt(year, month, day).expect("sample date is valid"),
        NaiveTime::from_hms_opt(start, 0, 0).expect("sample start time is valid"),
        NaiveTime::from_hms_opt(end, 0, 0).expect("sample end time is valid"),
    )
}

/// The sample clients, in insertion order.
pub fn sample_persons() -> Vec<Person> {
    let (date, start, end) = slot(2025, 6, 12, 16, 18);
    let alex = PersonBuilder::new()
        .name("Alex Yeoh")
        .phone("87438807")
        .address("Blk 30 Geylang Street 29, #06-40")
        .pay_status(PayStatus::Paid)
        .subject("Math")
        .next_lesson(date, start, end);

    let (date, start, end) = slot(2025, 6, 10, 14, 15);
    let bernice = PersonBuilder::new()
        .name("Bernice Yu")
        .phone("99272758")
        .address("Blk 30 Lorong 3 Serangoon Gardens, #07-18")
        .subjects(["English", "Literature"])
        .next_lesson(date, start, end);

    let charlotte = PersonBuilder::new()
        .name("Charlotte Oliveiro")
        .phone("93210283")
        .address("Blk 11 Ang Mo Kio Street 74, #11-04")
        .pay_status(PayStatus::Paid)
        .subject("Chemistry");

    let (date, start, end) = slot(2025, 6, 12, 9, 11);
    let david = PersonBuilder::new()
        .name("David Li")
        .phone("91031282")
        .address("Blk 436 Serangoon Gardens Street 26, #16-43")
        .subjects(["Physics", "Math"])
        .next_lesson(date, start, end);

    let irfan = PersonBuilder::new()
        .name("Irfan Ibrahim")
        .phone("92492021")
        .address("Blk 47 Tampines Street 20, #17-35")
        .subject("Biology");

    [alex, bernice, charlotte, david, irfan]
        .into_iter()
        .map(|builder| builder.build().expect("sample person is valid"))
        .collect()
}

/// An address book holding [`sample_persons`].
pub fn sample_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.set_persons(sample_persons())
        .expect("sample persons are unique");
    book
}
