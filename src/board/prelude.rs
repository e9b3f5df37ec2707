//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use xiangqi_notation::board::prelude::*;
//!
//! let board = Board::new();
//! let desc = MoveDescriptor::parse("兵三进一", Color::Red).unwrap();
//! assert_eq!(board.resolve(&desc).unwrap().to_string(), "g3g4");
//! ```

pub use super::{
    Board, BoardBuilder, Color, FenError, GameStatus, Move, MoveDescriptor, MoveList,
    MoveParseError, Movement, NotationError, Piece, ResolveError, Square, SquareError, Tandem,
};
