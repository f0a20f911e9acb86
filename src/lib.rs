//! # deal-game
//!
//! Engine for a "pick a box, reveal values, receive offers" game.
//!
//! ## Design Principles
//!
//! 1. **Schedule-Driven**: Box values and per-round reveal quotas come from
//!    `GameConfig`. The default is the standard 26-box, 10-round game.
//!
//! 2. **Explicit Phases**: A session is either waiting for the player to pick
//!    a box or revealing other boxes. Each phase has its own operation.
//!
//! 3. **Injected Persistence**: The best result lives behind the
//!    `BestResultStore` trait, so the state machine never touches storage
//!    directly.
//!
//! 4. **Deterministic When Seeded**: Board shuffles use a seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `boxes`: Sealed boxes and the board
//! - `store`: Best-result persistence port and backends
//! - `session`: The game state machine

pub mod core;
pub mod boxes;
pub mod store;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DealError, GameConfig, GameRng};

pub use crate::boxes::{Container, ContainerSet, DELTA};

pub use crate::store::{BestResultStore, FileStore, MemoryStore, StoreError};

pub use crate::session::{
    BoxView, GameSession, GameSessionBuilder, Phase, Selection, SessionSnapshot,
};
