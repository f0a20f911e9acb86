//! File-backed best-result store.
//!
//! The record is one line of plain decimal text with two fractional digits,
//! e.g. `12345.67`. A missing file means no best result yet.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{BestResultStore, StoreError};

/// Well-known file name for the best-result record.
pub const BEST_RESULT_FILE: &str = "highscore.txt";

/// Best-result store persisted to a single text file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`BEST_RESULT_FILE`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(BEST_RESULT_FILE))
    }

    /// Path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestResultStore for FileStore {
    fn load(&self) -> Result<Option<f64>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let line = text.lines().next().unwrap_or("").trim();
        let value: f64 = line.parse()?;
        if !value.is_finite() {
            return Err(StoreError::Parse(format!("not a finite number: {}", line)));
        }
        Ok(Some(value))
    }

    fn save(&mut self, value: f64) -> Result<(), StoreError> {
        fs::write(&self.path, format!("{:.2}", value))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());

        assert_eq!(store.load(), Ok(None));
        assert!(store.path().ends_with(BEST_RESULT_FILE));
    }

    #[test]
    fn test_save_writes_two_decimals() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path());

        store.save(12345.678).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "12345.68");

        store.save(50.0).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "50.00");
        assert_eq!(store.load(), Ok(Some(50.0)));
    }

    #[test]
    fn test_reads_first_line_only() {
        let dir = tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());
        fs::write(store.path(), "  750000.00 \nignored\n").unwrap();

        assert_eq!(store.load(), Ok(Some(750000.0)));
    }

    #[test]
    fn test_corrupt_record() {
        let dir = tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());

        fs::write(store.path(), "lots of money").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse(_))));

        fs::write(store.path(), "").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse(_))));

        fs::write(store.path(), "inf").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("missing").join(BEST_RESULT_FILE));

        assert!(matches!(store.save(1.0), Err(StoreError::Io(_))));
    }
}
