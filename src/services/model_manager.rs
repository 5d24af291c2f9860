//! In-memory model of the application: the address book plus the current
//! filter applied to it.

use crate::error::AddressBookResult;
use crate::matching::NameContainsKeywords;
use crate::models::{AddressBook, Person, ReadOnlyAddressBook};

/// Which persons are currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonFilter {
    /// Every person.
    #[default]
    All,

    /// Persons whose name contains one of the keywords.
    NameKeywords(NameContainsKeywords),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => keywords.matches(person),
        }
    }
}

/// Owns the address book and the filter the command layer works against.
///
/// All mutations go through the address book, so its invariants and error
/// contracts apply unchanged.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    address_book: AddressBook,
    filter: PersonFilter,
}

impl ModelManager {
    /// Create a model around `address_book`, showing every person.
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            filter: PersonFilter::All,
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replace the whole address book with a copy of `data`.
    pub fn set_address_book(&mut self, data: &dyn ReadOnlyAddressBook) -> AddressBookResult<()> {
        self.address_book.reset_data(data)
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn has_phone(&self, person: &Person) -> bool {
        self.address_book.has_phone(person)
    }

    /// Add a person and clear the filter so the new person is visible.
    pub fn add_person(&mut self, person: Person) -> AddressBookResult<()> {
        self.address_book.add_person(person)?;
        self.filter = PersonFilter::All;
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> AddressBookResult<Person> {
        self.address_book.remove_person(target)
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()> {
        self.address_book.set_person(target, edited)
    }

    pub fn sort_by_next_lesson(&mut self) {
        self.address_book.sort_persons_by_next_lesson();
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        tracing::debug!(filter = ?filter, "Updated person filter");
        self.filter = filter;
    }

    /// Snapshot of the persons passing the current filter, in list order.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .iter()
            .filter(|person| self.filter.matches(person))
            .collect()
    }
}
