use std::fmt;

use once_cell::sync::Lazy;

use super::{Color, Piece, Square, FILES, NUM_SQUARES, RANKS};

/// FEN of the standard initial position.
pub const START_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

static INITIAL_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    let back_rank = [
        Piece::Chariot,
        Piece::Horse,
        Piece::Elephant,
        Piece::Advisor,
        Piece::King,
        Piece::Advisor,
        Piece::Elephant,
        Piece::Horse,
        Piece::Chariot,
    ];
    for color in Color::BOTH {
        let home = color.back_rank();
        let cannon_rank = (home as isize + 2 * color.forward()) as usize;
        let pawn_rank = (home as isize + 3 * color.forward()) as usize;
        for (file, &piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::from_valid_index(home * FILES + file), color, piece);
        }
        for file in [1, 7] {
            board.set_piece(
                Square::from_valid_index(cannon_rank * FILES + file),
                color,
                Piece::Cannon,
            );
        }
        for file in (0..FILES).step_by(2) {
            board.set_piece(
                Square::from_valid_index(pawn_rank * FILES + file),
                color,
                Piece::Pawn,
            );
        }
    }
    board
});

/// A xiangqi position.
///
/// The board is a flat array of 90 points indexed by `Square::as_index`.
/// Copies are independent, so simulating a move never touches the original.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; NUM_SQUARES],
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard initial position, Red to move.
    #[must_use]
    pub fn new() -> Self {
        INITIAL_POSITION.clone()
    }

    /// A board with no pieces, Red to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; NUM_SQUARES],
            side_to_move: Color::Red,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The occupant of `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()]
    }

    /// True iff `sq` holds exactly this piece of this color.
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square, color: Color, piece: Piece) -> bool {
        self.squares[sq.as_index()] == Some((color, piece))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.as_index()] = Some((color, piece));
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()].take()
    }

    /// Every occupied square in scan order (a0, b0, ..., i9).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(idx, occupant)| {
            occupant.map(|(color, piece)| (Square::from_valid_index(idx), color, piece))
        })
    }

    /// Squares holding `piece` of `color`, in scan order.
    pub fn squares_of(&self, color: Color, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |&(_, c, p)| c == color && p == piece)
            .map(|(sq, _, _)| sq)
    }

    /// The square of `color`'s King. With several Kings the first in scan
    /// order is returned.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares_of(color, Piece::King).next()
    }

    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// ASCII diagram, rank 9 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..RANKS).rev() {
            write!(f, "{rank} ")?;
            for file in 0..FILES {
                let sq = Square::from_valid_index(rank * FILES + file);
                let c = match self.piece_at(sq) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 0..FILES {
            write!(f, " {}", (b'a' + file as u8) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_position_layout() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.piece_at(sq("e0")), Some((Color::Red, Piece::King)));
        assert_eq!(board.piece_at(sq("e9")), Some((Color::Black, Piece::King)));
        assert_eq!(board.piece_at(sq("h2")), Some((Color::Red, Piece::Cannon)));
        assert_eq!(board.piece_at(sq("b7")), Some((Color::Black, Piece::Cannon)));
        assert_eq!(board.piece_at(sq("g3")), Some((Color::Red, Piece::Pawn)));
        assert_eq!(board.piece_at(sq("i6")), Some((Color::Black, Piece::Pawn)));
        assert!(board.is_empty(sq("e4")));
        assert_eq!(board.side_to_move(), Color::Red);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn test_find_king() {
        let board = Board::new();
        assert_eq!(board.find_king(Color::Red), Some(sq("e0")));
        assert_eq!(board.find_king(Color::Black), Some(sq("e9")));
        assert_eq!(Board::empty().find_king(Color::Red), None);
    }

    #[test]
    fn test_squares_of_scan_order() {
        let board = Board::new();
        let horses: Vec<Square> = board.squares_of(Color::Red, Piece::Horse).collect();
        assert_eq!(horses, vec![sq("b0"), sq("h0")]);
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "9  r n b a k a b n r");
        assert_eq!(lines[9], "0  R N B A K A B N R");
        assert_eq!(lines[10], "   a b c d e f g h i");
    }
}
