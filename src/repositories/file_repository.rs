use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::repositories::traits::AddressBookRepository;
use std::fs;
use std::path::{Path, PathBuf};

/// Data file used when no other path is configured.
pub const DEFAULT_DATA_FILE: &str = "data.bin";

/// Address book repository backed by a single local file.
///
/// The file holds the records as a `bincode` (standard configuration)
/// encoded sequence, in stored order. Fields are encoded as their text
/// forms and validated again when decoded.
#[derive(Debug, Clone)]
pub struct FileAddressBookRepository {
    path: PathBuf,
}

impl FileAddressBookRepository {
    /// Create a repository for the file at `path`. Nothing is touched until
    /// the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file is present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Default for FileAddressBookRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl AddressBookRepository for FileAddressBookRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        let bytes = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        let (records, _): (Vec<Record>, usize) =
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "Decoded data file");
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> StorageResult<()> {
        let bytes = bincode::serde::encode_to_vec(records, bincode::config::standard())?;
        fs::write(&self.path, bytes).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "Wrote data file");
        Ok(())
    }
}
