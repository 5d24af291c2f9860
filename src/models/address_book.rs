//! The address book aggregate.

use crate::error::AddressBookResult;
use crate::models::{Person, UniquePersonList};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Read-only access to a collection of persons.
///
/// This is what [`AddressBook::reset_data`] copies from. Implementors are not
/// required to uphold the address book invariants; the copy checks them.
pub trait ReadOnlyAddressBook {
    /// The persons, in display order.
    fn persons(&self) -> &[Person];
}

impl ReadOnlyAddressBook for Vec<Person> {
    fn persons(&self) -> &[Person] {
        self
    }
}

/// All the clients a tutor keeps, with no duplicate identities and no shared
/// phone numbers.
///
/// Two address books are equal when they hold the same persons, in any order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    persons: UniquePersonList,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an address book holding a copy of `data`.
    pub fn from_data(data: &dyn ReadOnlyAddressBook) -> AddressBookResult<Self> {
        let mut book = Self::new();
        book.reset_data(data)?;
        Ok(book)
    }

    /// Replace the persons with `persons`.
    ///
    /// Fails without modifying the address book if any two of them are the
    /// same person or share a phone number.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> AddressBookResult<()> {
        let count = persons.len();
        self.persons.set_persons(persons)?;
        tracing::debug!(count, "Replaced all persons");
        Ok(())
    }

    /// Replace the contents of this address book with a copy of `data`.
    pub fn reset_data(&mut self, data: &dyn ReadOnlyAddressBook) -> AddressBookResult<()> {
        self.set_persons(data.persons().to_vec())
    }

    /// Returns true if a person with the same identity is in the address book.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Returns true if a person with the same phone number is in the address
    /// book.
    pub fn has_phone(&self, person: &Person) -> bool {
        self.persons.contains_phone(person)
    }

    /// Add a person to the end of the address book.
    pub fn add_person(&mut self, person: Person) -> AddressBookResult<()> {
        let name = person.name().clone();
        self.persons.add(person)?;
        tracing::debug!(name = %name, "Added person");
        Ok(())
    }

    /// Replace `target` with `edited`.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()> {
        let name = edited.name().clone();
        self.persons.set_person(target, edited)?;
        tracing::debug!(original = %target.name(), name = %name, "Edited person");
        Ok(())
    }

    /// Remove `person` from the address book.
    pub fn remove_person(&mut self, person: &Person) -> AddressBookResult<Person> {
        let removed = self.persons.remove(person)?;
        tracing::debug!(name = %removed.name(), "Removed person");
        Ok(removed)
    }

    /// Order persons by their upcoming lesson, see
    /// [`UniquePersonList::sort_by_next_lesson`].
    pub fn sort_persons_by_next_lesson(&mut self) {
        self.persons.sort_by_next_lesson();
        tracing::debug!(count = self.persons.len(), "Sorted persons by next lesson");
    }

    /// Read-only view of the persons, in order.
    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }
}

impl ReadOnlyAddressBook for AddressBook {
    fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        // Persons are unique by identity, so equal lengths plus containment
        // means equal sets.
        if self.persons.len() != other.persons.len() {
            return false;
        }
        let theirs: HashSet<&Person> = other.persons.iter().collect();
        self.persons.iter().all(|p| theirs.contains(p))
    }
}

impl Eq for AddressBook {}

impl Hash for AddressBook {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Commutative combination so that insertion order does not matter.
        let combined = self
            .persons
            .iter()
            .map(|person| {
                let mut hasher = DefaultHasher::new();
                person.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0u64, u64::wrapping_add);
        state.write_usize(self.persons.len());
        state.write_u64(combined);
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressBook{{persons=[")?;
        for (i, person) in self.persons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", person)?;
        }
        write!(f, "]}}")
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}
