//! Error types for the tutor address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value object validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors raised when an address book operation would break one of its
/// invariants. The address book is left unchanged whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Two persons would share the same identity (name)
    #[error("Operation would result in duplicate persons: {0}")]
    DuplicatePerson(String),

    /// Two persons would share the same phone number
    #[error("Operation would result in duplicate phone numbers: {0}")]
    DuplicatePhone(String),

    /// The person to edit or remove is not in the address book
    #[error("Person not found: {0}")]
    PersonNotFound(String),
}

/// Errors that can occur while reading or writing the address book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or a field failed validation
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The file parsed, but its persons violate the address book invariants
    #[error("Illegal values in address book file: {0}")]
    DataConversion(#[from] AddressBookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
