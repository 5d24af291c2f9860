//! Integration tests for the AddressBook aggregate.

mod common;

use common::fixtures::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tutor_book::domain::ValidationError;
use tutor_book::{AddressBook, AddressBookError, Person, PersonBuilder, ReadOnlyAddressBook};

/// A snapshot whose persons may violate the address book invariants.
struct AddressBookStub {
    persons: Vec<Person>,
}

impl ReadOnlyAddressBook for AddressBookStub {
    fn persons(&self) -> &[Person] {
        &self.persons
    }
}

fn hash_of(book: &AddressBook) -> u64 {
    let mut hasher = DefaultHasher::new();
    book.hash(&mut hasher);
    hasher.finish()
}

fn names(book: &AddressBook) -> Vec<&str> {
    book.iter().map(|p| p.name().as_str()).collect()
}

#[test]
fn test_new_address_book_is_empty() {
    let book = AddressBook::new();
    assert!(book.is_empty());
    assert!(book.persons().is_empty());
}

#[test]
fn test_reset_data_with_valid_snapshot_replaces_data() {
    let mut book = AddressBook::new();
    book.add_person(amy()).unwrap();

    let new_data = typical_address_book();
    book.reset_data(&new_data).unwrap();
    assert_eq!(book, new_data);
    assert!(!book.has_person(&amy()));
}

#[test]
fn test_reset_data_with_duplicate_persons_fails() {
    let mut book = typical_address_book();
    let edited_alice = PersonBuilder::from(&alice())
        .phone("80001111")
        .address(VALID_ADDRESS_BOB)
        .subjects([VALID_SUBJECT_MATH])
        .build()
        .unwrap();
    let new_data = AddressBookStub {
        persons: vec![alice(), edited_alice],
    };

    let err = book.reset_data(&new_data).unwrap_err();
    assert!(matches!(err, AddressBookError::DuplicatePerson(_)));
    assert_eq!(book, typical_address_book());
}

#[test]
fn test_reset_data_with_duplicate_phone_fails() {
    let mut book = typical_address_book();
    let edited_amy = PersonBuilder::from(&amy())
        .phone(VALID_PHONE_BOB)
        .subjects([VALID_SUBJECT_MATH])
        .build()
        .unwrap();
    let new_data = AddressBookStub {
        persons: vec![bob(), edited_amy],
    };

    let err = book.reset_data(&new_data).unwrap_err();
    assert_eq!(
        err,
        AddressBookError::DuplicatePhone(VALID_PHONE_BOB.to_string())
    );

    // prior contents, in prior order
    assert_eq!(book.persons(), typical_persons().as_slice());
}

#[test]
fn test_has_person_not_in_address_book() {
    let book = AddressBook::new();
    assert!(!book.has_person(&alice()));
    assert!(!book.has_phone(&alice()));
}

#[test]
fn test_has_person_in_address_book() {
    let mut book = AddressBook::new();
    book.add_person(alice()).unwrap();
    assert!(book.has_person(&alice()));
    assert!(book.has_phone(&alice()));
}

#[test]
fn test_has_person_with_same_identity_fields() {
    let mut book = AddressBook::new();
    book.add_person(alice()).unwrap();
    let edited_alice = PersonBuilder::from(&alice())
        .address(VALID_ADDRESS_BOB)
        .subjects([VALID_SUBJECT_MATH])
        .build()
        .unwrap();
    assert!(book.has_person(&edited_alice));
}

#[test]
fn test_has_phone_with_same_phone_number() {
    let mut book = AddressBook::new();
    book.add_person(bob()).unwrap();
    let edited_alice = PersonBuilder::from(&alice())
        .phone(VALID_PHONE_BOB)
        .subjects([VALID_SUBJECT_MATH])
        .build()
        .unwrap();
    assert!(book.has_phone(&edited_alice));
    assert!(!book.has_person(&edited_alice));
}

#[test]
fn test_add_person_duplicate_identity_fails() {
    let mut book = typical_address_book();
    let edited_alice = PersonBuilder::from(&alice())
        .phone("80001111")
        .build()
        .unwrap();

    let err = book.add_person(edited_alice).unwrap_err();
    assert_eq!(
        err,
        AddressBookError::DuplicatePerson("Alice Pauline".to_string())
    );
    assert_eq!(book.len(), 5);
}

#[test]
fn test_add_person_duplicate_phone_fails() {
    let mut book = typical_address_book();
    let clash = PersonBuilder::from(&amy())
        .phone(alice().phone().as_str())
        .build()
        .unwrap();

    let err = book.add_person(clash).unwrap_err();
    assert!(matches!(err, AddressBookError::DuplicatePhone(_)));
    assert!(!book.has_person(&amy()));
}

#[test]
fn test_phone_in_other_digit_scripts_cannot_enter_book() {
    let mut book = AddressBook::new();
    book.add_person(person("Alice", "12345678").build().unwrap())
        .unwrap();

    for twin in ["１２３４５６７８", "١٢٣٤٥٦٧٨"] {
        let err = person("Bob", twin).build().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone(twin.to_string()));
    }
    assert_eq!(names(&book), vec!["Alice"]);
}

#[test]
fn test_set_person_and_remove_person() {
    let mut book = typical_address_book();

    let paid_carl = PersonBuilder::from(&carl())
        .pay_status(tutor_book::domain::PayStatus::Paid)
        .build()
        .unwrap();
    book.set_person(&carl(), paid_carl.clone()).unwrap();
    assert_eq!(book.persons()[2], paid_carl);

    // stale copy is no longer an exact match
    let err = book.remove_person(&carl()).unwrap_err();
    assert!(matches!(err, AddressBookError::PersonNotFound(_)));

    book.remove_person(&paid_carl).unwrap();
    assert!(!book.has_person(&carl()));

    let err = book.set_person(&carl(), paid_carl).unwrap_err();
    assert_eq!(
        err,
        AddressBookError::PersonNotFound("Carl Kurz".to_string())
    );
}

#[test]
fn test_set_person_clash_leaves_book_unchanged() {
    let mut book = typical_address_book();
    let clash = PersonBuilder::from(&carl())
        .phone(benson().phone().as_str())
        .build()
        .unwrap();

    assert!(book.set_person(&carl(), clash).is_err());
    assert_eq!(book.persons(), typical_persons().as_slice());
}

#[test]
fn test_sort_by_next_lesson() {
    let edited_alice = person("Alice", "12345678")
        .next_lesson(date(2025, 6, 10), time(10, 0), time(12, 0))
        .build()
        .unwrap();
    let edited_bob = person("Bob", "23456789")
        .next_lesson(date(2025, 6, 11), time(10, 0), time(12, 0))
        .build()
        .unwrap();
    let edited_charlie = person("Charlie", "34567891")
        .next_lesson(date(2025, 6, 11), time(13, 0), time(15, 0))
        .build()
        .unwrap();
    let edited_david = person("David", "45678912").build().unwrap();

    let mut book = AddressBook::new();
    for p in [&edited_alice, &edited_david, &edited_bob, &edited_charlie] {
        book.add_person(p.clone()).unwrap();
    }
    book.sort_persons_by_next_lesson();
    assert_eq!(names(&book), vec!["Alice", "Bob", "Charlie", "David"]);

    // Ethan has the earliest lesson
    let edited_ethan = person("Ethan", "56789123")
        .next_lesson(date(2025, 6, 10), time(8, 0), time(10, 0))
        .build()
        .unwrap();
    book.add_person(edited_ethan).unwrap();
    book.sort_persons_by_next_lesson();
    assert_eq!(
        names(&book),
        vec!["Ethan", "Alice", "Bob", "Charlie", "David"]
    );
}

#[test]
fn test_sort_by_next_lesson_any_insertion_order() {
    let persons = vec![
        person("Alice", "12345678")
            .next_lesson(date(2025, 6, 10), time(10, 0), time(12, 0))
            .build()
            .unwrap(),
        person("Bob", "23456789")
            .next_lesson(date(2025, 6, 11), time(10, 0), time(12, 0))
            .build()
            .unwrap(),
        person("Charlie", "34567891")
            .next_lesson(date(2025, 6, 11), time(13, 0), time(15, 0))
            .build()
            .unwrap(),
        person("David", "45678912").build().unwrap(),
    ];

    // every rotation and its reverse
    for shift in 0..persons.len() {
        let mut rotated = persons.clone();
        rotated.rotate_left(shift);
        for order in [rotated.clone(), rotated.into_iter().rev().collect()] {
            let mut book = AddressBook::new();
            book.set_persons(order).unwrap();
            book.sort_persons_by_next_lesson();
            assert_eq!(names(&book), vec!["Alice", "Bob", "Charlie", "David"]);
        }
    }
}

#[test]
fn test_sort_keeps_order_of_unscheduled_and_shared_slots() {
    let mut book = AddressBook::new();
    let shared = |name: &str, phone: &str| {
        person(name, phone)
            .next_lesson(date(2025, 6, 12), time(9, 0), time(10, 0))
            .build()
            .unwrap()
    };
    book.add_person(person("Zed", "111").build().unwrap()).unwrap();
    book.add_person(shared("Yan", "222")).unwrap();
    book.add_person(person("Xavier", "333").build().unwrap()).unwrap();
    book.add_person(shared("Will", "444")).unwrap();

    book.sort_persons_by_next_lesson();
    assert_eq!(names(&book), vec!["Yan", "Will", "Zed", "Xavier"]);
}

#[test]
fn test_display() {
    let book = AddressBook::new();
    assert_eq!(book.to_string(), "AddressBook{persons=[]}");
}

#[test]
fn test_equals() {
    let mut book = AddressBook::new();

    // same object -> equal
    assert_eq!(book, book.clone());

    // different persons -> not equal
    let mut copy = AddressBook::new();
    book.add_person(alice()).unwrap();
    assert_ne!(book, copy);

    // same persons -> equal, same hash
    copy.add_person(alice()).unwrap();
    assert_eq!(book, copy);
    assert_eq!(hash_of(&book), hash_of(&copy));

    // same name, different fields -> not equal
    let mut edited = AddressBook::new();
    edited
        .add_person(PersonBuilder::from(&alice()).address("Elsewhere").build().unwrap())
        .unwrap();
    assert_ne!(book, edited);
}

#[test]
fn test_equality_ignores_order() {
    let mut forward = AddressBook::new();
    forward.add_person(alice()).unwrap();
    forward.add_person(benson()).unwrap();

    let mut backward = AddressBook::new();
    backward.add_person(benson()).unwrap();
    backward.add_person(alice()).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
}

#[test]
fn test_read_view_is_a_snapshot_of_current_contents() {
    let mut book = typical_address_book();
    let before: Vec<Person> = book.persons().to_vec();

    book.add_person(amy()).unwrap();
    assert_eq!(before.len() + 1, book.persons().len());
    assert_eq!(book.persons().last(), Some(&amy()));
}
