use crate::error::StorageResult;
use crate::models::{AddressBook, ReadOnlyAddressBook};
use std::path::Path;

/// Repository for loading and saving the address book.
///
/// Provides abstraction over where and how the address book is kept,
/// enabling different implementations (JSON file, in-memory for tests).
pub trait AddressBookRepository {
    /// Location of the backing file.
    fn file_path(&self) -> &Path;

    /// Load the address book.
    ///
    /// Returns `Ok(None)` if nothing has been saved yet.
    fn read_address_book(&self) -> StorageResult<Option<AddressBook>>;

    /// Save the address book, replacing anything saved before.
    fn save_address_book(&self, address_book: &dyn ReadOnlyAddressBook) -> StorageResult<()>;
}
