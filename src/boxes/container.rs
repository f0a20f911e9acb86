//! A single sealed box.

use serde::{Deserialize, Serialize};

use crate::core::DealError;

/// Smallest value a box may hold. Also the tolerance for value equality.
pub const DELTA: f64 = 0.01;

/// A sealed box holding one monetary value.
///
/// The value is fixed at construction. `revealed` moves from false to true
/// once and never back.
///
/// Equality is tolerance-based: two boxes are equal when their revealed
/// flags match and their values differ by less than [`DELTA`].
///
/// Deserialization goes through [`Container::new`], so a stored box with
/// an invalid value is rejected.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "ContainerRecord")]
pub struct Container {
    value: f64,
    revealed: bool,
}

/// Unchecked wire form of a `Container`.
#[derive(Deserialize)]
struct ContainerRecord {
    value: f64,
    revealed: bool,
}

impl TryFrom<ContainerRecord> for Container {
    type Error = DealError;

    fn try_from(record: ContainerRecord) -> Result<Self, Self::Error> {
        let mut container = Container::new(record.value)?;
        if record.revealed {
            container.reveal();
        }
        Ok(container)
    }
}

impl Container {
    /// Create a sealed box.
    ///
    /// Fails with `InvalidValue` if `value < DELTA` or is not finite.
    pub fn new(value: f64) -> Result<Self, DealError> {
        if !(value >= DELTA && value.is_finite()) {
            return Err(DealError::InvalidValue { value, min: DELTA });
        }

        Ok(Self {
            value,
            revealed: false,
        })
    }

    /// The value inside. Readable whether or not the box is open.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Open the box. Idempotent.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.revealed == other.revealed && (self.value - other.value).abs() < DELTA
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Open: {} Value: {}", self.revealed, self.value)
    }
}
