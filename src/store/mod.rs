//! Persistence port for the best result across sessions.
//!
//! The session depends only on the `BestResultStore` trait, so the storage
//! backend is injected: `FileStore` for real play, `MemoryStore` for tests.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::{FileStore, BEST_RESULT_FILE};
pub use memory::MemoryStore;

/// A single persisted scalar: the best final value ever recorded.
///
/// Calls are synchronous. A session treats a failed `load` as "no prior
/// best result" and a failed `save` as fatal to the recording operation.
pub trait BestResultStore {
    /// Read the stored best result.
    ///
    /// Returns `None` if nothing has been recorded yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the medium is unreadable and
    /// `StoreError::Parse` if the record is corrupt.
    fn load(&self) -> Result<Option<f64>, StoreError>;

    /// Overwrite the stored best result.
    ///
    /// Backends may store a rounded value; `load` returns what was stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the medium is unwritable.
    fn save(&mut self, value: f64) -> Result<(), StoreError>;
}

impl<S: BestResultStore + ?Sized> BestResultStore for Box<S> {
    fn load(&self) -> Result<Option<f64>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, value: f64) -> Result<(), StoreError> {
        (**self).save(value)
    }
}
