//! Contact Book - Main entry point
//!
//! Loads the address book from its data file, runs the interactive shell on
//! stdin/stdout, and saves the book when the session ends.

use anyhow::Result;
use contact_book::{AddressBook, Config, FileAddressBookRepository, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Logs go to stderr; stdout belongs to the shell
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = FileAddressBookRepository::new(&config.data_file);
    let mut book = AddressBook::new();

    if config.autoload && repository.exists() {
        if let Err(e) = book.load_from(&repository) {
            error!(
                "Failed to load address book from {}: {}",
                repository.path().display(),
                e
            );
            return Err(e.into());
        }
    } else {
        info!("Starting with an empty address book");
    }

    let mut session = Session::new(book);
    if config.autosave {
        session = session.with_autosave(Box::new(repository));
    }

    let stdin = io::stdin();
    contact_book::shell::run(&mut session, stdin.lock(), io::stdout())?;

    info!("Contact book shutdown complete");
    Ok(())
}
