//! Core engine types: RNG, configuration, errors.
//!
//! This module contains the building blocks shared by boxes, sessions and
//! stores. Games vary by `GameConfig` rather than by modifying the core.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, STANDARD_ROUND_QUOTAS, STANDARD_SHUFFLE_SWAPS, STANDARD_VALUES};
pub use error::DealError;
pub use rng::GameRng;
