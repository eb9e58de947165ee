use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Record;
use contact_book::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the saved records in memory, can be told to fail saves, and tracks
/// method calls for verification. Clones share state, so a test can keep
/// one handle while the session owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAddressBookRepository {
    records: Arc<Mutex<Option<Vec<Record>>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a repository with nothing stored yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::new();
        *repo.records.lock().unwrap() = Some(records);
        repo
    }

    /// Make every following save fail with a permission error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Records from the last successful save, if any.
    pub fn stored(&self) -> Option<Vec<Record>> {
        self.records.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn io_error(kind: std::io::ErrorKind) -> StorageError {
        StorageError::Io {
            path: "mock".to_string(),
            source: std::io::Error::new(kind, "mock failure"),
        }
    }
}

impl AddressBookRepository for MockAddressBookRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        self.track_call("load");
        self.records
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Self::io_error(std::io::ErrorKind::NotFound))
    }

    fn save(&self, records: &[Record]) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(Self::io_error(std::io::ErrorKind::PermissionDenied));
        }
        *self.records.lock().unwrap() = Some(records.to_vec());
        Ok(())
    }
}
