//! In-memory best-result store.

use super::{BestResultStore, StoreError};

/// Best-result store backed by a field. Can be made to fail on demand.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<f64>,
    fail_load: bool,
    fail_save: bool,
    saves: usize,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding a previous best result.
    #[must_use]
    pub fn with_value(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// A store whose loads and saves always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_load: true,
            fail_save: true,
            ..Self::default()
        }
    }

    /// Make saves fail (or succeed again).
    #[must_use]
    pub fn with_failing_save(mut self, fail: bool) -> Self {
        self.fail_save = fail;
        self
    }

    /// The currently persisted value.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BestResultStore for MemoryStore {
    fn load(&self) -> Result<Option<f64>, StoreError> {
        if self.fail_load {
            return Err(StoreError::Io("memory store load disabled".into()));
        }
        Ok(self.value)
    }

    fn save(&mut self, value: f64) -> Result<(), StoreError> {
        if self.fail_save {
            return Err(StoreError::Io("memory store save disabled".into()));
        }
        self.value = Some(value);
        self.saves += 1;
        Ok(())
    }
}
