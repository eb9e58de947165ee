//! Data models for the contact book.
//!
//! A [`Record`] groups the validated fields of one contact; an
//! [`AddressBook`] holds every record keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
