//! Data models for the tutor address book.

pub mod address_book;
pub mod person;
pub mod sample_data;
pub mod unique_person_list;

pub use address_book::{AddressBook, ReadOnlyAddressBook};
pub use person::{Person, PersonBuilder};
pub use sample_data::{sample_address_book, sample_persons};
pub use unique_person_list::UniquePersonList;
