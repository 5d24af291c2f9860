//! Tutor Book - an address book for private tutors.
//!
//! This library keeps track of tutoring clients: their contact details, whether
//! they have paid, the subjects they take and when their next lesson is.
//!
//! # Architecture
//!
//! - **domain**: Validating value objects (name, phone, address, pay status, subject, lesson)
//! - **models**: The `Person` entity, the unique person list and the `AddressBook` aggregate
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **matching**: Keyword matching behind "find"
//! - **repositories**: Loading and saving the address book
//! - **services**: The model the command layer works against

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::{AddressBookError, ConfigError, StorageError};
pub use matching::NameContainsKeywords;
pub use models::{AddressBook, Person, PersonBuilder, ReadOnlyAddressBook, UniquePersonList};
pub use repositories::{AddressBookRepository, JsonAddressBookRepository};
pub use services::{ModelManager, PersonFilter};
