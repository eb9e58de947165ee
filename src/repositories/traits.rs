use crate::error::StorageResult;
use crate::models::Record;

/// Storage for a whole address book.
///
/// Provides abstraction over where records are persisted, enabling
/// different implementations (data file, in-memory mock).
pub trait AddressBookRepository {
    /// Read every stored record, in stored order.
    fn load(&self) -> StorageResult<Vec<Record>>;

    /// Replace the stored records with `records`.
    fn save(&self, records: &[Record]) -> StorageResult<()>;
}
