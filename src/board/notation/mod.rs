//! Chinese move notation.
//!
//! A four-character move such as `炮二平五` names a piece, the file it
//! stands on (or 前/中/后 when two or more such pieces share a file), a
//! movement and a target. Files are counted from each player's own right
//! edge, so the same numeral names different board files for Red and Black.
//!
//! # Example
//! ```
//! use xiangqi_notation::board::{Board, Color, MoveDescriptor};
//!
//! let board = Board::new();
//! let desc = MoveDescriptor::parse("炮二平五", Color::Red).unwrap();
//! let mv = board.resolve(&desc).unwrap();
//! assert_eq!(mv.to_string(), "h2e2");
//! assert_eq!(board.move_to_notation(mv).unwrap(), "炮二平五");
//! ```

mod format;
mod parse;
mod resolve;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece};

/// Direction of a move relative to the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Movement {
    /// Toward the opponent (进)
    Advance,
    /// Toward the mover's own back rank (退)
    Retreat,
    /// Sideways along the rank (平)
    Traverse,
}

/// Position of a piece among same pieces on one file, counted from the
/// piece nearest the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tandem {
    Front,
    Middle,
    Back,
}

/// A parsed Chinese-notation move, not yet tied to a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveDescriptor {
    pub piece: Piece,
    pub color: Color,
    /// Native file (1-9) the piece stands on, if the notation names one
    pub source_file: Option<u8>,
    pub movement: Movement,
    /// Native file for traverses and for diagonal movers, step count for
    /// straight movers advancing or retreating
    pub target: u8,
    pub tandem: Option<Tandem>,
}

impl MoveDescriptor {
    /// Descriptor identifying the piece by its native source file.
    #[must_use]
    pub const fn new(
        piece: Piece,
        color: Color,
        source_file: u8,
        movement: Movement,
        target: u8,
    ) -> Self {
        MoveDescriptor {
            piece,
            color,
            source_file: Some(source_file),
            movement,
            target,
            tandem: None,
        }
    }

    /// Descriptor identifying the piece by its place among same pieces on a
    /// file.
    #[must_use]
    pub const fn with_tandem(
        piece: Piece,
        color: Color,
        tandem: Tandem,
        movement: Movement,
        target: u8,
    ) -> Self {
        MoveDescriptor {
            piece,
            color,
            source_file: None,
            movement,
            target,
            tandem: Some(tandem),
        }
    }
}

const RED_NUMERALS: [char; 9] = ['一', '二', '三', '四', '五', '六', '七', '八', '九'];
const BLACK_NUMERALS: [char; 9] = ['１', '２', '３', '４', '５', '６', '７', '８', '９'];

fn piece_glyph(piece: Piece, color: Color) -> char {
    match (piece, color) {
        (Piece::King, Color::Red) => '帅',
        (Piece::King, Color::Black) => '将',
        (Piece::Advisor, Color::Red) => '仕',
        (Piece::Advisor, Color::Black) => '士',
        (Piece::Elephant, Color::Red) => '相',
        (Piece::Elephant, Color::Black) => '象',
        (Piece::Horse, _) => '马',
        (Piece::Chariot, _) => '车',
        (Piece::Cannon, _) => '炮',
        (Piece::Pawn, Color::Red) => '兵',
        (Piece::Pawn, Color::Black) => '卒',
    }
}

fn numeral_glyph(n: u8, color: Color) -> char {
    let table = match color {
        Color::Red => &RED_NUMERALS,
        Color::Black => &BLACK_NUMERALS,
    };
    match n {
        1..=9 => table[usize::from(n) - 1],
        _ => '?',
    }
}

impl Movement {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Movement::Advance => '进',
            Movement::Retreat => '退',
            Movement::Traverse => '平',
        }
    }
}

impl Tandem {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Tandem::Front => '前',
            Tandem::Middle => '中',
            Tandem::Back => '后',
        }
    }
}

/// Renders with the character set of the descriptor's side. A descriptor
/// with neither tandem nor source file renders without the file.
impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece = piece_glyph(self.piece, self.color);
        match (self.tandem, self.source_file) {
            (Some(tandem), _) => write!(f, "{}{piece}", tandem.glyph())?,
            (None, Some(file)) => write!(f, "{piece}{}", numeral_glyph(file, self.color))?,
            (None, None) => write!(f, "{piece}")?,
        }
        write!(
            f,
            "{}{}",
            self.movement.glyph(),
            numeral_glyph(self.target, self.color)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_red() {
        let desc = MoveDescriptor::new(Piece::Cannon, Color::Red, 2, Movement::Traverse, 5);
        assert_eq!(desc.to_string(), "炮二平五");
        let desc = MoveDescriptor::new(Piece::Pawn, Color::Red, 3, Movement::Advance, 1);
        assert_eq!(desc.to_string(), "兵三进一");
    }

    #[test]
    fn test_display_black() {
        let desc = MoveDescriptor::new(Piece::Horse, Color::Black, 8, Movement::Advance, 7);
        assert_eq!(desc.to_string(), "马８进７");
        let desc = MoveDescriptor::new(Piece::Elephant, Color::Black, 3, Movement::Advance, 5);
        assert_eq!(desc.to_string(), "象３进５");
    }

    #[test]
    fn test_display_tandem() {
        let desc = MoveDescriptor::with_tandem(
            Piece::Chariot,
            Color::Red,
            Tandem::Back,
            Movement::Retreat,
            2,
        );
        assert_eq!(desc.to_string(), "后车退二");
        let desc = MoveDescriptor::with_tandem(
            Piece::Pawn,
            Color::Black,
            Tandem::Middle,
            Movement::Traverse,
            4,
        );
        assert_eq!(desc.to_string(), "中卒平４");
    }
}
