//! Ordered list of persons with unique identities and unique phone numbers.

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Person;

/// A list of persons that enforces two uniqueness constraints at once:
///
/// - no two persons are [the same person](Person::is_same_person),
/// - no two persons share a phone number.
///
/// Insertion order is kept until [`UniquePersonList::sort_by_next_lesson`] is
/// called. Every mutator checks its constraints before touching the list, so a
/// failed call leaves the list exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct UniquePersonList {
    persons: Vec<Person>,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the list contains a person with the same identity.
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Returns true if the list contains a person with the same phone number.
    pub fn contains_phone(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.has_same_phone(person))
    }

    /// Append a person to the end of the list.
    ///
    /// # Errors
    ///
    /// `DuplicatePerson` if the identity is taken, otherwise `DuplicatePhone`
    /// if the phone number is taken.
    pub fn add(&mut self, person: Person) -> AddressBookResult<()> {
        if self.contains(&person) {
            return Err(AddressBookError::DuplicatePerson(person.name().to_string()));
        }
        if self.contains_phone(&person) {
            return Err(AddressBookError::DuplicatePhone(person.phone().to_string()));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// `target` is located by identity. `edited` may keep the target's own name
    /// and phone; it only clashes with the other persons in the list.
    ///
    /// # Errors
    ///
    /// `PersonNotFound` if `target` is not in the list, `DuplicatePerson` or
    /// `DuplicatePhone` if `edited` clashes with another person.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()> {
        let index = self
            .index_of(target)
            .ok_or_else(|| AddressBookError::PersonNotFound(target.name().to_string()))?;

        let clashes_with_other = |clash: fn(&Person, &Person) -> bool| {
            self.persons
                .iter()
                .enumerate()
                .any(|(i, p)| i != index && clash(p, &edited))
        };
        if clashes_with_other(Person::is_same_person) {
            return Err(AddressBookError::DuplicatePerson(edited.name().to_string()));
        }
        if clashes_with_other(Person::has_same_phone) {
            return Err(AddressBookError::DuplicatePhone(edited.phone().to_string()));
        }

        self.persons[index] = edited;
        Ok(())
    }

    /// Remove a person, returning it.
    ///
    /// Only an exact match (every field equal) is removed.
    ///
    /// # Errors
    ///
    /// `PersonNotFound` if no such person is in the list.
    pub fn remove(&mut self, person: &Person) -> AddressBookResult<Person> {
        let index = self
            .persons
            .iter()
            .position(|p| p == person)
            .ok_or_else(|| AddressBookError::PersonNotFound(person.name().to_string()))?;
        Ok(self.persons.remove(index))
    }

    /// Replace the whole list with `persons`.
    ///
    /// The batch is checked pairwise before anything is replaced, so a clash
    /// between two incoming persons is reported just like a clash with an
    /// existing one. Identity clashes are reported before phone clashes.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> AddressBookResult<()> {
        Self::check_unique(&persons)?;
        self.persons = persons;
        Ok(())
    }

    /// Stable sort by upcoming lesson: earliest date and start time first,
    /// persons without a lesson last. Persons sharing a slot keep their
    /// relative order.
    pub fn sort_by_next_lesson(&mut self) {
        self.persons.sort_by_key(Person::next_lesson);
    }

    /// Read-only view of the list, in order.
    pub fn as_slice(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn index_of(&self, person: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p.is_same_person(person))
    }

    fn check_unique(persons: &[Person]) -> AddressBookResult<()> {
        let pairs = || {
            persons
                .iter()
                .enumerate()
                .flat_map(move |(i, a)| persons[i + 1..].iter().map(move |b| (a, b)))
        };
        if let Some((a, _)) = pairs().find(|(a, b)| a.is_same_person(b)) {
            return Err(AddressBookError::DuplicatePerson(a.name().to_string()));
        }
        if let Some((a, _)) = pairs().find(|(a, b)| a.has_same_phone(b)) {
            return Err(AddressBookError::DuplicatePhone(a.phone().to_string()));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a UniquePersonList {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}
