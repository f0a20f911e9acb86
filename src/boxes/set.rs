//! Fixed-size ordered collection of boxes.
//!
//! The `ContainerSet` owns every box of a session. Its length and the
//! multiset of values are fixed at construction; only box order (via
//! `shuffle`) and revealed flags change afterwards.
//!
//! ## Usage
//!
//! ```
//! use deal_game::boxes::ContainerSet;
//! use deal_game::core::GameRng;
//!
//! let mut set = ContainerSet::new(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(set.average_value_of_unrevealed(), 2.0);
//!
//! set.shuffle(100, &mut GameRng::new(7));
//! set.reveal_at(0).unwrap();
//! assert_eq!(set.unrevealed_count(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::container::Container;
use crate::core::{DealError, GameRng};

/// Ordered boxes for one session. At least two boxes.
///
/// Deserialization enforces the same minimum as [`ContainerSet::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SetRecord")]
pub struct ContainerSet {
    slots: Vec<Container>,
}

/// Wire form of a `ContainerSet`. Each box is validated on its own.
#[derive(Deserialize)]
struct SetRecord {
    slots: Vec<Container>,
}

impl TryFrom<SetRecord> for ContainerSet {
    type Error = DealError;

    fn try_from(record: SetRecord) -> Result<Self, Self::Error> {
        if record.slots.len() < 2 {
            return Err(DealError::InvalidInput(format!(
                "need at least 2 boxes, got {}",
                record.slots.len()
            )));
        }
        Ok(Self {
            slots: record.slots,
        })
    }
}

impl ContainerSet {
    /// Build one sealed box per value, preserving input order.
    ///
    /// Fails with `InvalidInput` for fewer than two values and with
    /// `InvalidValue` if any value is below [`super::DELTA`].
    pub fn new(values: &[f64]) -> Result<Self, DealError> {
        if values.len() < 2 {
            return Err(DealError::InvalidInput(format!(
                "need at least 2 box values, got {}",
                values.len()
            )));
        }

        let slots = values
            .iter()
            .map(|&value| Container::new(value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }

    /// Number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: a set holds at least two boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, index: usize) -> Result<&Container, DealError> {
        self.slots.get(index).ok_or(DealError::IndexOutOfRange {
            index,
            len: self.slots.len(),
        })
    }

    /// Value of the box at `index`.
    pub fn value_at(&self, index: usize) -> Result<f64, DealError> {
        self.slot(index).map(Container::value)
    }

    /// Whether the box at `index` is open.
    pub fn is_revealed_at(&self, index: usize) -> Result<bool, DealError> {
        self.slot(index).map(Container::is_revealed)
    }

    /// Open the box at `index`. Opening an open box is a no-op.
    pub fn reveal_at(&mut self, index: usize) -> Result<(), DealError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(DealError::IndexOutOfRange { index, len })?
            .reveal();
        Ok(())
    }

    /// Iterate over the boxes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Container> {
        self.slots.iter()
    }

    /// Number of boxes still sealed.
    #[must_use]
    pub fn unrevealed_count(&self) -> usize {
        self.slots.iter().filter(|c| !c.is_revealed()).count()
    }

    /// Mean value of the sealed boxes, or 0 when every box is open.
    #[must_use]
    pub fn average_value_of_unrevealed(&self) -> f64 {
        let (sum, count) = self
            .slots
            .iter()
            .filter(|c| !c.is_revealed())
            .fold((0.0, 0usize), |(sum, count), c| (sum + c.value(), count + 1));

        if count == 0 {
            return 0.0;
        }
        sum / count as f64
    }

    /// Values of the sealed boxes, ascending.
    #[must_use]
    pub fn unrevealed_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self
            .slots
            .iter()
            .filter(|c| !c.is_revealed())
            .map(Container::value)
            .collect();
        values.sort_by(f64::total_cmp);
        values
    }

    /// Randomize box order with exactly `swaps` pairwise swaps.
    ///
    /// Each swap exchanges two distinct slots; the second index is re-drawn
    /// until it differs from the first. Not uniform for small swap counts,
    /// converging toward uniform as `swaps` grows.
    pub fn shuffle(&mut self, swaps: usize, rng: &mut GameRng) {
        let len = self.slots.len();
        for _ in 0..swaps {
            let first = rng.gen_range_usize(0..len);
            let mut second = rng.gen_range_usize(0..len);
            while second == first {
                second = rng.gen_range_usize(0..len);
            }
            self.slots.swap(first, second);
        }
    }
}

impl std::fmt::Display for ContainerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, container) in self.slots.iter().enumerate() {
            writeln!(f, "{}: {}", i, container)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: &ContainerSet) -> Vec<f64> {
        let mut values: Vec<f64> = set.iter().map(Container::value).collect();
        values.sort_by(f64::total_cmp);
        values
    }

    #[test]
    fn test_preserves_input_order() {
        let values = [5.0, 1.0, 300.0, 0.01];
        let set = ContainerSet::new(&values).unwrap();

        assert_eq!(set.len(), 4);
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(set.value_at(i).unwrap(), v);
            assert!(!set.is_revealed_at(i).unwrap());
        }
    }

    #[test]
    fn test_rejects_short_input() {
        let err = ContainerSet::new(&[]).unwrap_err();
        assert!(matches!(err, DealError::InvalidInput(_)));

        let err = ContainerSet::new(&[10.0]).unwrap_err();
        assert!(matches!(err, DealError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_small_value() {
        let err = ContainerSet::new(&[10.0, 0.005]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_index_bounds() {
        let mut set = ContainerSet::new(&[1.0, 2.0]).unwrap();
        let out = DealError::IndexOutOfRange { index: 2, len: 2 };

        assert_eq!(set.value_at(2), Err(out.clone()));
        assert_eq!(set.is_revealed_at(2), Err(out.clone()));
        assert_eq!(set.reveal_at(2), Err(out));
    }

    #[test]
    fn test_reveal_at() {
        let mut set = ContainerSet::new(&[1.0, 2.0, 3.0]).unwrap();

        set.reveal_at(1).unwrap();
        assert!(set.is_revealed_at(1).unwrap());
        assert!(!set.is_revealed_at(0).unwrap());
        assert_eq!(set.unrevealed_count(), 2);

        // Idempotent
        set.reveal_at(1).unwrap();
        assert_eq!(set.unrevealed_count(), 2);
    }

    #[test]
    fn test_average_value_of_unrevealed() {
        let mut set = ContainerSet::new(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(set.average_value_of_unrevealed(), 2.0);

        set.reveal_at(2).unwrap();
        assert_eq!(set.average_value_of_unrevealed(), 1.5);

        set.reveal_at(0).unwrap();
        set.reveal_at(1).unwrap();
        assert_eq!(set.average_value_of_unrevealed(), 0.0);
    }

    #[test]
    fn test_unrevealed_values_sorted() {
        let mut set = ContainerSet::new(&[50.0, 1.0, 10.0, 5.0]).unwrap();
        set.reveal_at(2).unwrap();

        assert_eq!(set.unrevealed_values(), vec![1.0, 5.0, 50.0]);
    }

    #[test]
    fn test_shuffle_zero_keeps_order() {
        let original = ContainerSet::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut set = original.clone();

        set.shuffle(0, &mut GameRng::new(42));
        assert_eq!(set, original);
    }

    #[test]
    fn test_shuffle_preserves_values() {
        let values: Vec<f64> = (1..=26).map(f64::from).collect();
        let original = ContainerSet::new(&values).unwrap();
        let mut set = original.clone();

        set.shuffle(500, &mut GameRng::new(42));

        // Same values, different order (very likely)
        assert_ne!(set, original);
        assert_eq!(sorted(&set), values);
    }

    #[test]
    fn test_single_swap_moves_two_slots() {
        let original = ContainerSet::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        for seed in 0..50 {
            let mut set = original.clone();
            set.shuffle(1, &mut GameRng::new(seed));

            let moved = set
                .iter()
                .zip(original.iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(moved, 2, "seed {} swapped a slot with itself", seed);
        }
    }

    #[test]
    fn test_shuffle_two_boxes_always_swaps() {
        let original = ContainerSet::new(&[1.0, 2.0]).unwrap();
        let mut rng = GameRng::new(3);

        let mut set = original.clone();
        set.shuffle(1, &mut rng);
        assert_eq!(set.value_at(0).unwrap(), 2.0);
        assert_eq!(set.value_at(1).unwrap(), 1.0);
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let mut a = ContainerSet::new(&values).unwrap();
        let mut b = ContainerSet::new(&values).unwrap();

        a.shuffle(100, &mut GameRng::new(9));
        b.shuffle(100, &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_structural_equality() {
        let a = ContainerSet::new(&[1.0, 2.0]).unwrap();
        let b = ContainerSet::new(&[1.005, 2.0]).unwrap();
        let c = ContainerSet::new(&[2.0, 1.0]).unwrap();
        let d = ContainerSet::new(&[1.0, 2.0, 3.0]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);

        let mut e = a.clone();
        e.reveal_at(0).unwrap();
        assert_ne!(a, e);
    }

    #[test]
    fn test_deserialize_rejects_short_sets() {
        let empty = serde_json::from_str::<ContainerSet>(r#"{"slots":[]}"#);
        assert!(empty.is_err());

        let single = serde_json::from_str::<ContainerSet>(
            r#"{"slots":[{"value":10.0,"revealed":false}]}"#,
        );
        assert!(single.is_err());
    }

    #[test]
    fn test_deserialize_rejects_invalid_box() {
        let result = serde_json::from_str::<ContainerSet>(
            r#"{"slots":[{"value":10.0,"revealed":false},{"value":0.0,"revealed":false}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialized_set_can_shuffle() {
        let mut set = ContainerSet::new(&[1.0, 2.0, 3.0]).unwrap();
        set.reveal_at(1).unwrap();

        let json = serde_json::to_string(&set).unwrap();
        let mut back: ContainerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        back.shuffle(10, &mut GameRng::new(1));
        assert_eq!(back.len(), 3);
        assert_eq!(back.unrevealed_count(), 2);
    }

    #[test]
    fn test_display() {
        let set = ContainerSet::new(&[1.0, 2.0]).unwrap();
        assert_eq!(
            set.to_string(),
            "0: Open: false Value: 1\n1: Open: false Value: 2\n"
        );
    }
}
