//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided address is invalid.
    InvalidAddress(String),

    /// The provided pay status is not one of the known statuses.
    InvalidPayStatus(String),

    /// The provided subject is invalid.
    InvalidSubject(String),

    /// The lesson does not end after it starts.
    InvalidLesson { start: String, end: String },

    /// A required person field was never supplied.
    MissingField(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name: {:?} (names should only contain letters, digits and spaces, and must not be blank)",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {:?} (phone numbers should only contain digits, at least 3 of them)",
                phone
            ),
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid address: {:?} (addresses can take any value, but must not start with whitespace)",
                address
            ),
            Self::InvalidPayStatus(status) => write!(
                f,
                "Invalid pay status: {:?} (expected PAID or NOT PAID)",
                status
            ),
            Self::InvalidSubject(subject) => write!(
                f,
                "Invalid subject: {:?} (subjects should be letters and digits only)",
                subject
            ),
            Self::InvalidLesson { start, end } => write!(
                f,
                "Invalid lesson: start time {} must be before end time {}",
                start, end
            ),
            Self::MissingField(field) => write!(f, "Missing required field: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}
