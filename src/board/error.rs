//! Error types for board, notation and resolution operations.

use std::fmt;

use super::types::{Color, Move, Piece};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Placement field does not have exactly 10 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// A rank describes fewer than 9 files
    TooFewFiles { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { field: &'static str, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 10 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-8)
    FileOutOfRange { file: usize },
    /// Rank out of bounds (must be 0-9)
    RankOutOfRange { rank: usize },
    /// Invalid coordinate notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfRange { file } => {
                write!(f, "File {file} out of range (must be 0-8)")
            }
            SquareError::RankOutOfRange { rank } => {
                write!(f, "Rank {rank} out of range (must be 0-9)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for Chinese notation that matches no recognised grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty notation string
    Empty,
    /// Notation is not exactly four characters
    WrongLength { notation: String, len: usize },
    /// Character is not a piece name
    UnknownPiece { char: char },
    /// Character is not a file or distance numeral
    UnknownNumber { char: char },
    /// Character is not a movement indicator
    UnknownMovement { char: char },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty notation string"),
            NotationError::WrongLength { notation, len } => {
                write!(f, "Notation '{notation}' must be 4 characters, found {len}")
            }
            NotationError::UnknownPiece { char } => {
                write!(f, "Unknown piece character '{char}'")
            }
            NotationError::UnknownNumber { char } => {
                write!(f, "Unknown numeral '{char}'")
            }
            NotationError::UnknownMovement { char } => {
                write!(f, "Unknown movement character '{char}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for resolving a move descriptor against a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No piece of the described kind and side survives disambiguation
    NoSuchPiece { color: Color, piece: Piece },
    /// Pieces were found but none of the described destinations is legal
    NoLegalMatch { candidates: usize },
    /// More than one legal move fits the description
    Ambiguous { moves: Vec<Move> },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NoSuchPiece { color, piece } => {
                write!(f, "No {color} {piece:?} matches the notation")
            }
            ResolveError::NoLegalMatch { candidates } => {
                write!(
                    f,
                    "No legal move matches the notation ({candidates} candidates rejected)"
                )
            }
            ResolveError::Ambiguous { moves } => {
                write!(f, "Ambiguous notation, matches")?;
                for mv in moves {
                    write!(f, " {mv}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ResolveError {}
