//! AddressBook model: every record, keyed by contact name.

use super::record::Record;
use crate::error::StorageResult;
use crate::repositories::AddressBookRepository;
use std::collections::HashMap;

/// All known contacts keyed by name.
///
/// Records keep the order in which their names were first added, so
/// printing and batching are deterministic. Adding a record under an
/// existing name replaces it in place.
///
/// `index` maps each name to its position in `records`. Removing a record
/// would shift later positions, so any removal must rebuild the index.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        let position = *self.index.get(name)?;
        self.records.get(position)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in stored order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Rendered records in batches of up to `batch_size`.
    ///
    /// Every call starts a fresh pass over the book. A batch size of zero is
    /// treated as one.
    pub fn iterator(&self, batch_size: usize) -> impl Iterator<Item = Vec<String>> + '_ {
        self.records
            .chunks(batch_size.max(1))
            .map(|batch| batch.iter().map(ToString::to_string).collect::<Vec<String>>())
    }

    /// Write the whole book through `repository`.
    pub fn save_to(&self, repository: &dyn AddressBookRepository) -> StorageResult<()> {
        repository.save(&self.records)?;
        tracing::info!(records = self.records.len(), "Address book saved");
        Ok(())
    }

    /// Merge the records stored in `repository` into this book.
    ///
    /// Loaded records replace in-memory records with the same name; other
    /// in-memory records are kept. Returns the number of records loaded.
    pub fn load_from(&mut self, repository: &dyn AddressBookRepository) -> StorageResult<usize> {
        let loaded = repository.load()?;
        let count = loaded.len();
        for record in loaded {
            self.add_record(record);
        }
        tracing::info!(records = count, total = self.len(), "Address book loaded");
        Ok(count)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
