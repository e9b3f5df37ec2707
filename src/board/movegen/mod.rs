//! Move legality: movement patterns, check detection and move enumeration.
//!
//! Every query works on `&self`; a candidate move is simulated on a private
//! copy of the board before the mover's King is tested.

mod kings;
mod leapers;
mod pawns;
mod sliders;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, MoveList, Piece, Square};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The side to move has at least one legal move
    Ongoing,
    /// The side to move is in check with no legal move
    Checkmate { winner: Color },
    /// The side to move is not in check but has no legal move
    Stalemate,
}

impl Board {
    /// Returns true if the piece on `from` may legally move to `to`.
    ///
    /// The checks run in order and stop at the first failure: a piece must
    /// stand on `from`, `to` must not hold a piece of the same side, the
    /// piece's movement pattern must admit the step, and after the step the
    /// mover's King may not be attacked. A King move may also not leave the
    /// two Kings facing each other on an open file.
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        if matches!(self.piece_at(to), Some((occupant, _)) if occupant == color) {
            return false;
        }
        if !self.pattern_allows(from, to, color, piece) {
            return false;
        }
        let (next, _) = self.with_move(from, to);
        if piece == Piece::King && next.kings_facing() {
            return false;
        }
        !next.is_in_check(color)
    }

    #[inline]
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from(), mv.to())
    }

    /// Movement pattern of `piece` alone, including obstruction, palace and
    /// river limits but ignoring what stands on `to` and any King safety.
    pub(crate) fn pattern_allows(
        &self,
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
    ) -> bool {
        match piece {
            Piece::King => self.king_pattern(from, to, color),
            Piece::Advisor => self.advisor_pattern(from, to, color),
            Piece::Elephant => self.elephant_pattern(from, to, color),
            Piece::Horse => self.horse_pattern(from, to),
            Piece::Chariot => self.chariot_pattern(from, to),
            Piece::Cannon => self.cannon_pattern(from, to),
            Piece::Pawn => self.pawn_pattern(from, to, color),
        }
    }

    /// True if some piece of the other side could move onto `color`'s King.
    ///
    /// A side without a King is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            return false;
        };
        self.is_square_attacked(king, color.opponent())
    }

    /// True if a piece of `attacker` has a movement pattern reaching `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pieces()
            .filter(|&(_, color, _)| color == attacker)
            .any(|(from, color, piece)| {
                from != square && self.pattern_allows(from, square, color, piece)
            })
    }

    /// All legal moves of `color`, ordered by source square and then
    /// destination square in scan order.
    #[must_use]
    pub fn generate_moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, owner, _) in self.pieces() {
            if owner != color {
                continue;
            }
            for to in Square::all() {
                if self.is_legal(from, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// All legal moves of the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        self.generate_moves_for(self.side_to_move)
    }

    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces()
            .filter(|&(_, owner, _)| owner == color)
            .any(|(from, _, _)| Square::all().any(|to| self.is_legal(from, to)))
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Game status for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        if self.has_legal_move(side) {
            GameStatus::Ongoing
        } else if self.is_in_check(side) {
            GameStatus::Checkmate {
                winner: side.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}
