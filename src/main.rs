//! Tutor Book - Main entry point
//!
//! Loads the address book and prints the client roster in the order the
//! lessons come up.

use anyhow::Result;
use tutor_book::models::sample_address_book;
use tutor_book::repositories::{AddressBookRepository, JsonAddressBookRepository};
use tutor_book::{AddressBook, Config, ModelManager};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout carries the roster)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book file {}", config.data_file.display());

    let repository = JsonAddressBookRepository::new(config.data_file.clone());
    let address_book = match repository.read_address_book() {
        Ok(Some(book)) => book,
        Ok(None) if config.seed_sample_data => {
            info!("Data file not found, starting with sample data");
            let book = sample_address_book();
            repository.save_address_book(&book)?;
            book
        }
        Ok(None) => {
            info!("Data file not found, starting with an empty address book");
            AddressBook::new()
        }
        Err(e) => {
            error!("Failed to load address book: {}", e);
            warn!("Starting with an empty address book");
            AddressBook::new()
        }
    };

    let mut model = ModelManager::new(address_book);
    model.sort_by_next_lesson();

    for (index, person) in model.filtered_persons().into_iter().enumerate() {
        println!("{}. {}", index + 1, person);
    }

    Ok(())
}
