//! Xiangqi board representation, move legality and Chinese notation.
//!
//! The board is a flat array of 90 points. Legality is decided per move by
//! testing the piece's movement pattern and then the mover's King safety on
//! a copy of the position.
//!
//! # Example
//! ```
//! use xiangqi_notation::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! assert!(!board.is_checkmate(Color::Red));
//! ```

mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, NotationError, ResolveError, SquareError};
pub use movegen::GameStatus;
pub use notation::{MoveDescriptor, Movement, Tandem};
pub use state::{Board, START_FEN};
pub use types::{Color, Move, MoveList, Piece, Square, FILES, NUM_SQUARES, RANKS};
