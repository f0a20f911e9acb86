//! Sealed boxes and the board that holds them.
//!
//! - `Container`: one box with a fixed value and a revealed flag
//! - `ContainerSet`: the ordered, fixed-size board of a session

mod container;
mod set;

pub use container::{Container, DELTA};
pub use set::ContainerSet;
