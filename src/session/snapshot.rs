//! Serializable read-only view of a session, for rendering a board.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// One box as a player may see it. Sealed boxes hide their value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxView {
    /// Slot index
    pub index: usize,
    /// Whether the box is open
    pub revealed: bool,
    /// Value, only once revealed
    pub value: Option<f64>,
    /// Whether this is the player's box
    pub held: bool,
}

/// Everything a presentation layer needs to draw the current state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    /// Shuffle seed, for replaying the board.
    pub seed: Option<u64>,
    pub round: usize,
    pub total_rounds: usize,
    pub revealed_this_round: usize,
    pub remaining_this_round: usize,
    pub revealed_total: usize,
    /// Current banker offer.
    pub offer: f64,
    pub best_result: f64,
    /// Board in slot order.
    pub boxes: Vec<BoxView>,
    /// Values still in play, ascending.
    pub unrevealed_values: Vec<f64>,
}
