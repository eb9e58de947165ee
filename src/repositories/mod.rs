mod file_repository;
mod traits;

pub use file_repository::{FileAddressBookRepository, DEFAULT_DATA_FILE};
pub use traits::AddressBookRepository;
