use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Color, Move, Piece, Square, FILES, RANKS};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Ranks are listed from 9 (Black's back rank) down to 0. The halfmove
    /// clock and fullmove number are optional and default to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != RANKS {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        // Parse piece placement
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = RANKS - 1 - row;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let color = if c.is_ascii_uppercase() {
                        Color::Red
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let sq = Square::new(file, rank).ok_or(FenError::TooManyFiles {
                        rank,
                        files: file + 1,
                    })?;
                    board.set_piece(sq, color, piece);
                    file += 1;
                }
            }
            if file > FILES {
                return Err(FenError::TooManyFiles { rank, files: file });
            }
            if file < FILES {
                return Err(FenError::TooFewFiles { rank, files: file });
            }
        }

        // Parse side to move
        board.side_to_move = match parts[1] {
            "w" | "r" => Color::Red,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Fields 3 and 4 are placeholders kept for layout compatibility.

        if let Some(text) = parts.get(4) {
            board.halfmove_clock = parse_counter("halfmove clock", text)?;
        }
        if let Some(text) = parts.get(5) {
            board.fullmove_number = parse_counter("fullmove number", text)?;
        }

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(RANKS);
        for rank in (0..RANKS).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..FILES {
                let sq = Square::from_valid_index(rank * FILES + file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        format!(
            "{} {} - - {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in ICCS coordinate notation (e.g. "h2e2").
    ///
    /// Returns the move if it is legal for the piece standing on the source
    /// square, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use xiangqi_notation::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("h2e2").unwrap();
    /// assert_eq!(mv.to_string(), "h2e2");
    /// ```
    pub fn parse_move(&self, iccs: &str) -> Result<Move, MoveParseError> {
        let mv: Move = iccs.parse()?;
        if self.is_legal(mv.from(), mv.to()) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: iccs.trim().to_string(),
            })
        }
    }
}

fn parse_counter(field: &'static str, text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fen())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fen = String::deserialize(deserializer)?;
        Board::try_from_fen(&fen).map_err(serde::de::Error::custom)
    }
}
