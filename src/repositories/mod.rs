mod json_address_book_repository;
mod traits;

pub use json_address_book_repository::JsonAddressBookRepository;
pub use traits::AddressBookRepository;
