//! The game session state machine.

use tracing::{debug, info, warn};

use super::phase::{Phase, Selection};
use super::snapshot::{BoxView, SessionSnapshot};
use crate::boxes::ContainerSet;
use crate::core::{DealError, GameConfig, GameRng};
use crate::store::BestResultStore;

/// Builder for creating a `GameSession`.
#[derive(Clone, Debug)]
pub struct GameSessionBuilder {
    config: GameConfig,
    seed: Option<u64>,
    randomize: bool,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            randomize: true,
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the board shuffle. Without a seed the shuffle uses OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// `false` keeps boxes in configured order (deterministic testing).
    pub fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Build the board and load the best result from `store`.
    ///
    /// A failed load is logged and treated as no prior best result.
    pub fn build<S: BestResultStore>(self, store: S) -> Result<GameSession<S>, DealError> {
        self.config.validate()?;

        let mut boxes = ContainerSet::new(&self.config.values)?;
        let mut shuffle_seed = None;
        if self.randomize {
            let mut rng = match self.seed {
                Some(seed) => GameRng::new(seed),
                None => GameRng::from_entropy(),
            };
            boxes.shuffle(self.config.shuffle_swaps, &mut rng);
            debug!(seed = rng.seed(), swaps = self.config.shuffle_swaps, "board shuffled");
            shuffle_seed = Some(rng.seed());
        }

        let best_result = match store.load() {
            Ok(best) => best.unwrap_or(0.0),
            Err(error) => {
                warn!(%error, "could not load best result, starting from 0");
                0.0
            }
        };

        Ok(GameSession {
            config: self.config,
            boxes,
            seed: shuffle_seed,
            phase: Phase::NotChosen,
            round: 1,
            revealed_this_round: 0,
            revealed_total: 0,
            best_result,
            store,
        })
    }
}

/// One game: the board, the player's box, round bookkeeping and the
/// best result.
///
/// ## Flow
///
/// 1. `choose_slot` once to pick the box the player keeps.
/// 2. `reveal_slot` until `is_round_complete`, then read `current_offer`.
/// 3. `start_next_round` and repeat until `is_game_over`.
///
/// The caller owns end-of-game decisions (taking an offer or keeping the
/// box) and reports the final value through `record_result_if_best`.
#[derive(Debug)]
pub struct GameSession<S> {
    config: GameConfig,
    boxes: ContainerSet,
    seed: Option<u64>,
    phase: Phase,
    round: usize,
    revealed_this_round: usize,
    revealed_total: usize,
    best_result: f64,
    store: S,
}

impl<S: BestResultStore> GameSession<S> {
    /// A standard game. `randomize = false` leaves the board unshuffled.
    pub fn new(randomize: bool, store: S) -> Result<Self, DealError> {
        GameSessionBuilder::new().randomize(randomize).build(store)
    }

    /// Persist `value` if it beats the best result.
    ///
    /// Returns `Ok(true)` once the new best is saved. A save failure is
    /// returned as `DealError::Persistence` and the best result is left
    /// unchanged.
    ///
    /// `best_result` keeps `value` as given, but the store may round it
    /// (`FileStore` keeps two decimals), so a later session can load a
    /// slightly different number.
    pub fn record_result_if_best(&mut self, value: f64) -> Result<bool, DealError> {
        if !(value > self.best_result) {
            return Ok(false);
        }

        self.store.save(value)?;
        info!(value, previous = self.best_result, "new best result");
        self.best_result = value;
        Ok(true)
    }
}

impl<S> GameSession<S> {
    fn check_index(&self, index: usize) -> Result<(), DealError> {
        if index >= self.boxes.len() {
            return Err(DealError::IndexOutOfRange {
                index,
                len: self.boxes.len(),
            });
        }
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn boxes(&self) -> &ContainerSet {
        &self.boxes
    }

    /// Seed of the board shuffle. `None` when the board was not shuffled.
    ///
    /// Building again with this seed and the same config reproduces the board.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The injected best-result store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn has_chosen_slot(&self) -> bool {
        self.phase.has_chosen()
    }

    #[must_use]
    pub fn player_slot(&self) -> Option<usize> {
        self.phase.slot()
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.config.total_rounds()
    }

    /// Reveals required in the current round.
    #[must_use]
    pub fn quota_for_round(&self) -> usize {
        self.config.quota_for_round(self.round)
    }

    #[must_use]
    pub fn revealed_this_round(&self) -> usize {
        self.revealed_this_round
    }

    #[must_use]
    pub fn revealed_total(&self) -> usize {
        self.revealed_total
    }

    #[must_use]
    pub fn container_count(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn remaining_to_reveal_this_round(&self) -> usize {
        self.quota_for_round().saturating_sub(self.revealed_this_round)
    }

    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.revealed_this_round == self.quota_for_round()
    }

    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.round == self.total_rounds()
    }

    /// Final round reached and its quota met.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_final_round() && self.is_round_complete()
    }

    pub fn is_revealed_at(&self, index: usize) -> Result<bool, DealError> {
        self.boxes.is_revealed_at(index)
    }

    pub fn value_at(&self, index: usize) -> Result<f64, DealError> {
        self.boxes.value_at(index)
    }

    /// Value of the player's box.
    pub fn player_container_value(&self) -> Result<f64, DealError> {
        let slot = self.phase.slot().ok_or(DealError::NoSlotChosen)?;
        self.boxes.value_at(slot)
    }

    /// Values still sealed, ascending. Includes the player's box.
    #[must_use]
    pub fn unrevealed_values(&self) -> Vec<f64> {
        self.boxes.unrevealed_values()
    }

    /// The banker's offer: average sealed value scaled by how far the
    /// schedule has progressed (`round / total_rounds`).
    #[must_use]
    pub fn current_offer(&self) -> f64 {
        self.boxes.average_value_of_unrevealed() * self.round as f64 / self.total_rounds() as f64
    }

    #[must_use]
    pub fn best_result(&self) -> f64 {
        self.best_result
    }

    /// Capture the visible state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let held = self.phase.slot();
        let boxes = self
            .boxes
            .iter()
            .enumerate()
            .map(|(index, container)| BoxView {
                index,
                revealed: container.is_revealed(),
                value: container.is_revealed().then(|| container.value()),
                held: held == Some(index),
            })
            .collect();

        SessionSnapshot {
            phase: self.phase,
            seed: self.seed,
            round: self.round,
            total_rounds: self.total_rounds(),
            revealed_this_round: self.revealed_this_round,
            remaining_this_round: self.remaining_to_reveal_this_round(),
            revealed_total: self.revealed_total,
            offer: self.current_offer(),
            best_result: self.best_result,
            boxes,
            unrevealed_values: self.unrevealed_values(),
        }
    }

    // === Moves ===

    /// Pick the box the player keeps. Does not reveal it and does not count
    /// toward the round quota.
    pub fn choose_slot(&mut self, index: usize) -> Result<(), DealError> {
        self.check_index(index)?;
        if let Phase::Chosen { slot } = self.phase {
            return Err(DealError::SlotAlreadyChosen { slot });
        }

        self.phase = Phase::Chosen { slot: index };
        debug!(slot = index, "box chosen");
        Ok(())
    }

    /// Open another box and return its value.
    ///
    /// Requires a chosen box, a sealed target that is not the player's, and
    /// a reveal left in the current round.
    pub fn reveal_slot(&mut self, index: usize) -> Result<f64, DealError> {
        self.check_index(index)?;
        let slot = self.phase.slot().ok_or(DealError::NoSlotChosen)?;
        if index == slot {
            return Err(DealError::PlayerSlot { index });
        }
        if self.boxes.is_revealed_at(index)? {
            return Err(DealError::AlreadyRevealed { index });
        }
        if self.remaining_to_reveal_this_round() == 0 {
            return Err(DealError::RoundComplete { round: self.round });
        }

        self.boxes.reveal_at(index)?;
        self.revealed_this_round += 1;
        self.revealed_total += 1;

        let value = self.boxes.value_at(index)?;
        debug!(
            index,
            value,
            round = self.round,
            remaining = self.remaining_to_reveal_this_round(),
            "box revealed"
        );
        Ok(value)
    }

    /// First call chooses the player's box, later calls reveal.
    pub fn select_or_reveal(&mut self, index: usize) -> Result<Selection, DealError> {
        match self.phase {
            Phase::NotChosen => {
                self.choose_slot(index)?;
                Ok(Selection::Chosen(index))
            }
            Phase::Chosen { .. } => {
                let value = self.reveal_slot(index)?;
                Ok(Selection::Revealed { index, value })
            }
        }
    }

    /// Advance to the next round and reset the per-round counter.
    ///
    /// Fails with `ScheduleExhausted` on the final round. Completion of the
    /// current round is not required.
    pub fn start_next_round(&mut self) -> Result<(), DealError> {
        if self.is_final_round() {
            return Err(DealError::ScheduleExhausted {
                rounds: self.total_rounds(),
            });
        }

        self.round += 1;
        self.revealed_this_round = 0;
        debug!(round = self.round, quota = self.quota_for_round(), "round started");
        Ok(())
    }
}
