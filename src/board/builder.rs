//! Piece-by-piece position setup, for tests and callers without FEN text.
//!
//! # Example
//! ```
//! use xiangqi_notation::board::{BoardBuilder, Color, Piece, Square};
//!
//! let e0 = Square::new(4, 0).unwrap();
//! let d9 = Square::new(3, 9).unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e0, Color::Red, Piece::King)
//!     .piece(d9, Color::Black, Piece::King)
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(board.find_king(Color::Red), Some(e0));
//! ```

use super::{Board, Color, Piece, Square};

/// Collects pieces and counters, then produces a `Board`.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// An empty board with Red to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::Red,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The 32 pieces of the opening array.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().pieces().collect();
        builder
    }

    /// Put a piece on `square`, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Empty `square`.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Finish the position. Later pieces win over earlier ones on a square.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }

        board.side_to_move = self.side_to_move;
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number;
        board
    }
}
