//! Contact Book - a command-line contact manager.
//!
//! Stores names, phone numbers and birthdays, validates every field, and
//! keeps the whole book in a local data file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: `Record` and the `AddressBook` collection
//! - **repositories**: Whole-book persistence (bincode data file)
//! - **commands**: Keyword matching, handlers and error translation
//! - **shell**: The interactive read-eval-print loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod shell;

pub use commands::{Command, Response, Session};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use repositories::{AddressBookRepository, FileAddressBookRepository};
