//! Person model representing a tutoring client.

use crate::domain::{
    Address, Lesson, Name, NextLesson, PayStatus, Phone, Subject, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A client in the address book.
///
/// Persons are immutable; an edit builds a new `Person` (see
/// [`PersonBuilder::from`]) which then replaces the old one in the address
/// book.
///
/// Two notions of equality exist:
/// - `==` compares every field,
/// - [`Person::is_same_person`] compares only the name, and is what the address
///   book uses to reject duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    address: Address,
    pay_status: PayStatus,
    #[serde(default)]
    subjects: BTreeSet<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_lesson: Option<Lesson>,
}

impl Person {
    /// Create a person from already-validated fields.
    pub fn new(
        name: Name,
        phone: Phone,
        address: Address,
        pay_status: PayStatus,
        subjects: impl IntoIterator<Item = Subject>,
        next_lesson: Option<Lesson>,
    ) -> Self {
        Self {
            name,
            phone,
            address,
            pay_status,
            subjects: subjects.into_iter().collect(),
            next_lesson,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn pay_status(&self) -> PayStatus {
        self.pay_status
    }

    pub fn subjects(&self) -> &BTreeSet<Subject> {
        &self.subjects
    }

    /// The scheduled lesson, if any.
    pub fn lesson(&self) -> Option<&Lesson> {
        self.next_lesson.as_ref()
    }

    /// Ordering key used when sorting clients by their upcoming lesson.
    pub fn next_lesson(&self) -> NextLesson {
        NextLesson::from(self.next_lesson.as_ref())
    }

    /// Returns true if both persons have the same name.
    ///
    /// This is a weaker notion than `==`: changing a client's phone or pay
    /// status does not make them a different person.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    pub fn has_same_phone(&self, other: &Person) -> bool {
        self.phone == other.phone
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Address: {}; Pay Status: {}; Subjects: ",
            self.name, self.phone, self.address, self.pay_status
        )?;
        for subject in &self.subjects {
            write!(f, "{}", subject)?;
        }
        match &self.next_lesson {
            Some(lesson) => write!(f, "; Next Lesson: {}", lesson),
            None => write!(f, "; Next Lesson: -"),
        }
    }
}

/// Builder for [`Person`].
///
/// Name, phone and address are required; pay status defaults to
/// [`PayStatus::NotPaid`], subjects to none, and there is no lesson until one
/// is scheduled.
///
/// # Example
///
/// ```
/// use tutor_book::models::PersonBuilder;
///
/// let person = PersonBuilder::new()
///     .name("Alice Pauline")
///     .phone("94351253")
///     .address("123, Jurong West Ave 6, #08-111")
///     .subject("Math")
///     .build()
///     .unwrap();
/// assert_eq!(person.name().as_str(), "Alice Pauline");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    name: Option<Result<Name, ValidationError>>,
    phone: Option<Result<Phone, ValidationError>>,
    address: Option<Result<Address, ValidationError>>,
    pay_status: Option<Result<PayStatus, ValidationError>>,
    subjects: Vec<Result<Subject, ValidationError>>,
    next_lesson: Option<Result<Lesson, ValidationError>>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Name::new(name));
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(Phone::new(phone));
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(Address::new(address));
        self
    }

    pub fn pay_status(mut self, pay_status: PayStatus) -> Self {
        self.pay_status = Some(Ok(pay_status));
        self
    }

    /// Set the pay status from its textual form (`PAID` / `NOT PAID`).
    pub fn pay_status_str(mut self, pay_status: &str) -> Self {
        self.pay_status = Some(pay_status.parse());
        self
    }

    /// Add one subject. Adding the same subject twice keeps a single copy.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(Subject::new(subject));
        self
    }

    /// Replace all subjects.
    pub fn subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Subject::new).collect();
        self
    }

    pub fn next_lesson(
        mut self,
        date: chrono::NaiveDate,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
    ) -> Self {
        self.next_lesson = Some(Lesson::new(date, start, end));
        self
    }

    pub fn clear_next_lesson(mut self) -> Self {
        self.next_lesson = None;
        self
    }

    /// Validate every field and build the person.
    ///
    /// # Errors
    ///
    /// The first invalid field's `ValidationError`, or
    /// `ValidationError::MissingField` if name, phone or address was never
    /// set.
    pub fn build(self) -> Result<Person, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))??;
        let phone = self.phone.ok_or(ValidationError::MissingField("phone"))??;
        let address = self
            .address
            .ok_or(ValidationError::MissingField("address"))??;
        let pay_status = self.pay_status.transpose()?.unwrap_or_default();
        let subjects = self
            .subjects
            .into_iter()
            .collect::<Result<BTreeSet<_>, _>>()?;
        let next_lesson = self.next_lesson.transpose()?;

        Ok(Person {
            name,
            phone,
            address,
            pay_status,
            subjects,
            next_lesson,
        })
    }
}

impl From<&Person> for PersonBuilder {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(Ok(person.name.clone())),
            phone: Some(Ok(person.phone.clone())),
            address: Some(Ok(person.address.clone())),
            pay_status: Some(Ok(person.pay_status)),
            subjects: person.subjects.iter().cloned().map(Ok).collect(),
            next_lesson: person.next_lesson.map(Ok),
        }
    }
}
