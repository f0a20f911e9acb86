//! Error types for the game engine.
//!
//! - `InvalidValue` / `InvalidInput`: bad construction arguments
//! - `IndexOutOfRange`: box index outside the board
//! - `Persistence`: the best-result store could not be written
//! - Phase errors: a move that the session's current phase does not allow

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by boxes, box sets and game sessions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DealError {
    /// A box value below the minimum (or not a finite number).
    #[error("invalid box value {value}: must be at least {min}")]
    InvalidValue {
        /// Rejected value
        value: f64,
        /// Smallest accepted value
        min: f64,
    },

    /// Malformed construction input (value list, schedule).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Index outside `[0, len)`.
    #[error("index {index} out of range for {len} boxes")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of boxes
        len: usize,
    },

    /// Best-result store failed during save.
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),

    /// A reveal or value query before the player has chosen a box.
    #[error("no box has been chosen yet")]
    NoSlotChosen,

    /// The player's box is fixed once chosen.
    #[error("box {slot} has already been chosen")]
    SlotAlreadyChosen {
        /// The box the player holds
        slot: usize,
    },

    /// The box is already open.
    #[error("box {index} is already revealed")]
    AlreadyRevealed {
        /// Requested index
        index: usize,
    },

    /// The player's own box stays sealed until the end.
    #[error("box {index} belongs to the player and cannot be revealed")]
    PlayerSlot {
        /// Requested index
        index: usize,
    },

    /// The current round's reveal quota is already met.
    #[error("round {round} has no reveals remaining")]
    RoundComplete {
        /// Current round
        round: usize,
    },

    /// `start_next_round` called on the final round.
    #[error("all {rounds} rounds have been played")]
    ScheduleExhausted {
        /// Number of rounds in the schedule
        rounds: usize,
    },
}

impl DealError {
    /// True for construction-time argument errors.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DealError::InvalidValue { .. } | DealError::InvalidInput(_))
    }
}
