//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Xiangqi piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    King,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Pawn,
}

impl Piece {
    /// All piece kinds in index order
    pub const ALL: [Piece; 7] = [
        Piece::King,
        Piece::Advisor,
        Piece::Elephant,
        Piece::Horse,
        Piece::Chariot,
        Piece::Cannon,
        Piece::Pawn,
    ];

    /// Parse a piece from a FEN letter, either case (k, a, b, n, r, c, p)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'k' => Some(Piece::King),
            'a' => Some(Piece::Advisor),
            'b' => Some(Piece::Elephant),
            'n' => Some(Piece::Horse),
            'r' => Some(Piece::Chariot),
            'c' => Some(Piece::Cannon),
            'p' => Some(Piece::Pawn),
            _ => None,
        }
    }

    /// Convert piece to lowercase FEN letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::King => 'k',
            Piece::Advisor => 'a',
            Piece::Elephant => 'b',
            Piece::Horse => 'n',
            Piece::Chariot => 'r',
            Piece::Cannon => 'c',
            Piece::Pawn => 'p',
        }
    }

    /// Convert piece to character with case based on color (uppercase for Red)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::Red {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Returns true if the piece moves along files and ranks, so that
    /// advance/retreat notation counts steps rather than naming a file.
    #[inline]
    #[must_use]
    pub const fn moves_straight(self) -> bool {
        matches!(
            self,
            Piece::King | Piece::Chariot | Piece::Cannon | Piece::Pawn
        )
    }
}

/// The two sides. Red moves first and sits on ranks 0-4.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors, Red first
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Rank direction toward the opponent (+1 for Red, -1 for Black).
    ///
    /// Every side-relative rule goes through this: advance/retreat offsets,
    /// pawn direction and front/back ordering of tandem pieces.
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for Red, 9 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 9,
        }
    }

    /// Convert a native file number (1-9, counted from this side's right
    /// edge) to a board file (0-8).
    #[inline]
    #[must_use]
    pub const fn native_to_file(self, native: u8) -> Option<usize> {
        if native < 1 || native > 9 {
            return None;
        }
        Some(match self {
            Color::Red => 9 - native as usize,
            Color::Black => native as usize - 1,
        })
    }

    /// Convert a board file (0-8) to this side's native file number (1-9).
    #[inline]
    #[must_use]
    pub const fn file_to_native(self, file: usize) -> u8 {
        match self {
            Color::Red => (9 - file) as u8,
            Color::Black => (file + 1) as u8,
        }
    }

    /// FEN side-to-move letter
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::Red => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_chars_round_trip() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            assert_eq!(Piece::from_char(piece.to_fen_char(Color::Red)), Some(piece));
        }
        assert_eq!(Piece::from_char('q'), None);
        assert_eq!(Piece::Horse.to_fen_char(Color::Red), 'N');
        assert_eq!(Piece::Elephant.to_fen_char(Color::Black), 'b');
    }

    #[test]
    fn test_native_file_mapping() {
        assert_eq!(Color::Red.native_to_file(2), Some(7));
        assert_eq!(Color::Red.native_to_file(9), Some(0));
        assert_eq!(Color::Black.native_to_file(2), Some(1));
        assert_eq!(Color::Black.native_to_file(9), Some(8));
        assert_eq!(Color::Red.native_to_file(0), None);
        assert_eq!(Color::Black.native_to_file(10), None);
        for color in Color::BOTH {
            for file in 0..9 {
                assert_eq!(color.native_to_file(color.file_to_native(file)), Some(file));
            }
        }
    }

    #[test]
    fn test_forward_and_opponent() {
        assert_eq!(Color::Red.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::Red.opponent(), Color::Black);
        assert_eq!(Color::Black.back_rank(), 9);
    }

    #[test]
    fn test_moves_straight() {
        assert!(Piece::Chariot.moves_straight());
        assert!(Piece::King.moves_straight());
        assert!(!Piece::Horse.moves_straight());
        assert!(!Piece::Elephant.moves_straight());
    }
}
