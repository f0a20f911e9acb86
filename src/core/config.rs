//! Game configuration: the value schedule and the round schedule.
//!
//! The engine never hardcodes box values or quotas at the call sites -
//! sessions read them from `GameConfig`. `GameConfig::default()` is the
//! standard 26-box, 10-round game.

use serde::{Deserialize, Serialize};

use super::error::DealError;
use crate::boxes::DELTA;

/// Monetary values of the standard game, one per box.
pub const STANDARD_VALUES: [f64; 26] = [
    0.01, 1.0, 5.0, 10.0, 25.0, 50.0, 75.0, 100.0, 200.0, 300.0, 400.0, 500.0, 750.0, 1000.0,
    5000.0, 10000.0, 25000.0, 50000.0, 75000.0, 100000.0, 200000.0, 300000.0, 400000.0,
    500000.0, 750000.0, 1000000.0,
];

/// Boxes to reveal in rounds 1 through 10 of the standard game.
pub const STANDARD_ROUND_QUOTAS: [usize; 10] = [6, 5, 4, 3, 2, 1, 1, 1, 1, 1];

/// Pairwise swaps used to randomize the standard board.
pub const STANDARD_SHUFFLE_SWAPS: usize = 500;

/// Complete game configuration.
///
/// Rounds are numbered from 1. `round_quotas[0]` is the quota of round 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// One value per box, in pre-shuffle order.
    pub values: Vec<f64>,

    /// Reveals required to complete each round.
    pub round_quotas: Vec<usize>,

    /// Pairwise swaps performed when the board is randomized.
    pub shuffle_swaps: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            values: STANDARD_VALUES.to_vec(),
            round_quotas: STANDARD_ROUND_QUOTAS.to_vec(),
            shuffle_swaps: STANDARD_SHUFFLE_SWAPS,
        }
    }
}

impl GameConfig {
    /// The standard game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the box values.
    #[must_use]
    pub fn with_values(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.values = values.into();
        self
    }

    /// Replace the round schedule.
    #[must_use]
    pub fn with_round_quotas(mut self, quotas: impl Into<Vec<usize>>) -> Self {
        self.round_quotas = quotas.into();
        self
    }

    /// Set the number of shuffle swaps.
    #[must_use]
    pub fn with_shuffle_swaps(mut self, swaps: usize) -> Self {
        self.shuffle_swaps = swaps;
        self
    }

    /// Number of boxes.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.values.len()
    }

    /// Number of rounds in the schedule. Also the offer divisor.
    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.round_quotas.len()
    }

    /// Reveal quota for a 1-based round. Round 0 and rounds past the
    /// schedule have quota 0.
    #[must_use]
    pub fn quota_for_round(&self, round: usize) -> usize {
        round
            .checked_sub(1)
            .and_then(|i| self.round_quotas.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Check that a session can be played with this configuration.
    pub fn validate(&self) -> Result<(), DealError> {
        if self.values.len() < 2 {
            return Err(DealError::InvalidInput(format!(
                "need at least 2 box values, got {}",
                self.values.len()
            )));
        }
        if let Some(&value) = self.values.iter().find(|&&v| !(v >= DELTA && v.is_finite())) {
            return Err(DealError::InvalidValue { value, min: DELTA });
        }
        if self.round_quotas.is_empty() {
            return Err(DealError::InvalidInput("round schedule is empty".into()));
        }
        if let Some(round) = self.round_quotas.iter().position(|&q| q == 0) {
            return Err(DealError::InvalidInput(format!(
                "round {} has a zero reveal quota",
                round + 1
            )));
        }

        let total: usize = self.round_quotas.iter().sum();
        if total > self.values.len() - 1 {
            return Err(DealError::InvalidInput(format!(
                "schedule reveals {} boxes but only {} can be opened",
                total,
                self.values.len() - 1
            )));
        }

        Ok(())
    }
}
