//! Session phase and the outcome of a combined select-or-reveal call.

use serde::{Deserialize, Serialize};

/// Whether the player has picked the box they keep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No box chosen yet. The next move must be `choose_slot`.
    #[default]
    NotChosen,
    /// The player holds `slot`. Every further move is a reveal.
    Chosen {
        /// Index of the player's box. Never changes once set.
        slot: usize,
    },
}

impl Phase {
    /// The player's box, if chosen.
    #[must_use]
    pub fn slot(self) -> Option<usize> {
        match self {
            Phase::NotChosen => None,
            Phase::Chosen { slot } => Some(slot),
        }
    }

    #[must_use]
    pub fn has_chosen(self) -> bool {
        matches!(self, Phase::Chosen { .. })
    }
}

/// What `select_or_reveal` did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    /// The index became the player's box. Nothing was revealed.
    Chosen(usize),
    /// The box at `index` was opened and held `value`.
    Revealed {
        /// Opened box
        index: usize,
        /// Value found inside
        value: f64,
    },
}
