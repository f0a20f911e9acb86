//! Game sessions: one board, one player, a fixed round schedule.
//!
//! A session moves through two phases:
//!
//! - `Phase::NotChosen`: the player picks the box they keep
//! - `Phase::Chosen`: the player opens other boxes round by round, and the
//!   banker makes an offer after each round
//!
//! ```
//! use deal_game::session::GameSessionBuilder;
//! use deal_game::store::MemoryStore;
//!
//! let mut session = GameSessionBuilder::new()
//!     .seed(42)
//!     .build(MemoryStore::new())
//!     .unwrap();
//!
//! session.choose_slot(0).unwrap();
//! while !session.is_round_complete() {
//!     let next = (1..session.container_count())
//!         .find(|&i| !session.is_revealed_at(i).unwrap())
//!         .unwrap();
//!     session.reveal_slot(next).unwrap();
//! }
//! assert_eq!(session.revealed_total(), 6);
//! assert!(session.current_offer() > 0.0);
//! ```

mod game;
mod phase;
mod snapshot;

pub use game::{GameSession, GameSessionBuilder};
pub use phase::{Phase, Selection};
pub use snapshot::{BoxView, SessionSnapshot};
