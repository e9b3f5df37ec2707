//! Core xiangqi types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - a checked point on the 9x10 board
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::{Square, FILES, NUM_SQUARES, RANKS};
