//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use crate::board::error::SquareError;

/// Number of files (a-i).
pub const FILES: usize = 9;
/// Number of ranks (0-9).
pub const RANKS: usize = 10;
/// Number of points on the board.
pub const NUM_SQUARES: usize = FILES * RANKS;

/// A point on the xiangqi board, represented as (file, rank).
///
/// File 0 is the `a` edge, rank 0 is Red's back rank and rank 9 is Black's.
/// Out-of-range squares cannot be constructed. With the `serde` feature a
/// square serializes as its text form (`h2`) and is range-checked on the way in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < FILES && rank < RANKS {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Get the file (0-8, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Get the rank (0-9, where 0 = Red's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// Get the square's index (0-89, a0=0, b0=1, ..., i9=89)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.rank as usize * FILES + self.file as usize
    }

    /// Create a square from an index (0-89)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < NUM_SQUARES {
            Square::new(idx % FILES, idx / FILES)
        } else {
            None
        }
    }

    /// Build from an index already known to be below `NUM_SQUARES`.
    #[inline]
    #[must_use]
    pub(crate) const fn from_valid_index(idx: usize) -> Self {
        Square {
            file: (idx % FILES) as u8,
            rank: (idx / FILES) as u8,
        }
    }

    /// All 90 squares in rank-major scan order (a0, b0, ..., i9).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).filter_map(Square::from_index)
    }

    /// The square displaced by `(df, dr)`, if it is still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, df: isize, dr: isize) -> Option<Self> {
        let file = self.file as isize + df;
        let rank = self.rank as isize + dr;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::new(file as usize, rank as usize)
    }

    /// Signed (file, rank) displacement from `self` to `to`.
    #[inline]
    #[must_use]
    pub const fn delta(self, to: Square) -> (isize, isize) {
        (
            to.file as isize - self.file as isize,
            to.rank as isize - self.rank as isize,
        )
    }

    /// True iff the square lies in the 3x3 palace of `color`.
    #[inline]
    #[must_use]
    pub const fn is_in_palace(self, color: Color) -> bool {
        let ranks_ok = match color {
            Color::Red => self.rank <= 2,
            Color::Black => self.rank >= 7,
        };
        self.file >= 3 && self.file <= 5 && ranks_ok
    }

    /// True iff the square is on `color`'s side of the river.
    #[inline]
    #[must_use]
    pub const fn is_on_own_side(self, color: Color) -> bool {
        match color {
            Color::Red => self.rank <= 4,
            Color::Black => self.rank >= 5,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Scan order: rank-major from a0
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= FILES {
            return Err(SquareError::FileOutOfRange { file });
        }
        if rank >= RANKS {
            return Err(SquareError::RankOutOfRange { rank });
        }
        Ok(Square {
            file: file as u8,
            rank: rank as u8,
        })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='z' => chars[0] as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1].to_digit(10) {
            Some(d) => d as usize,
            None => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Square::try_from((file, rank))
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
