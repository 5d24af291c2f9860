use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Person, ReadOnlyAddressBook};
use crate::repositories::traits::AddressBookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk shape of the address book file, as read.
#[derive(Debug, Deserialize)]
struct StoredAddressBook {
    #[serde(default)]
    persons: Vec<Person>,
}

/// On-disk shape of the address book file, as written.
#[derive(Debug, Serialize)]
struct StoredAddressBookRef<'a> {
    persons: &'a [Person],
}

/// Address book repository backed by a JSON file.
///
/// Every person is validated through its value objects on load, and the
/// loaded list is checked for duplicate identities and phone numbers.
pub struct JsonAddressBookRepository {
    path: PathBuf,
}

impl JsonAddressBookRepository {
    /// Create a new repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl AddressBookRepository for JsonAddressBookRepository {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Address book file not found");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let stored: StoredAddressBook = serde_json::from_str(&content)?;
        let mut book = AddressBook::new();
        book.set_persons(stored.persons)?;

        tracing::info!(
            path = %self.path.display(),
            count = book.len(),
            "Loaded address book"
        );
        Ok(Some(book))
    }

    fn save_address_book(&self, address_book: &dyn ReadOnlyAddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let stored = StoredAddressBookRef {
            persons: address_book.persons(),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            count = address_book.persons().len(),
            "Saved address book"
        );
        Ok(())
    }
}
