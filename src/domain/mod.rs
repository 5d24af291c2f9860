//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the scalar fields of a client
//! record: name, phone, address, pay status, subjects and lessons. These value
//! objects validate at construction time and prevent invalid data from being
//! represented in the address book.

pub mod address;
pub mod errors;
pub mod lesson;
pub mod name;
pub mod pay_status;
pub mod phone;
pub mod subject;

pub use address::Address;
pub use errors::ValidationError;
pub use lesson::{Lesson, NextLesson};
pub use name::Name;
pub use pay_status::PayStatus;
pub use phone::Phone;
pub use subject::Subject;
