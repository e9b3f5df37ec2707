use super::super::{Board, Color, Square};

impl Board {
    /// One orthogonal step that stays inside the palace.
    pub(crate) fn king_pattern(&self, from: Square, to: Square, color: Color) -> bool {
        let (df, dr) = from.delta(to);
        to.is_in_palace(color) && df.abs() + dr.abs() == 1
    }

    /// One diagonal step that stays inside the palace.
    pub(crate) fn advisor_pattern(&self, from: Square, to: Square, color: Color) -> bool {
        let (df, dr) = from.delta(to);
        to.is_in_palace(color) && df.abs() == 1 && dr.abs() == 1
    }

    /// True if both Kings stand on one file with nothing between them.
    #[must_use]
    pub fn kings_facing(&self) -> bool {
        let (Some(red), Some(black)) = (self.find_king(Color::Red), self.find_king(Color::Black))
        else {
            return false;
        };
        red.file() == black.file() && self.count_between(red, black) == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_king_stays_in_palace() {
        let board = Board::from_fen("4k4/9/9/9/9/9/9/9/9/3K5 w - - 0 1");
        assert!(board.is_legal(sq("d0"), sq("d1")));
        assert!(!board.is_legal(sq("d0"), sq("c0")));
        assert!(!board.is_legal(sq("d0"), sq("e1")));
        assert!(!board.is_legal(sq("d0"), sq("d2")));
    }

    #[test]
    fn test_king_cannot_step_into_facing() {
        let board = Board::from_fen("4k4/9/9/9/9/9/9/9/9/3K5 w - - 0 1");
        assert!(!board.is_legal(sq("d0"), sq("e0")));
    }

    #[test]
    fn test_advisor_diagonal_in_palace() {
        let board = Board::from_fen("3k5/9/9/9/9/9/9/9/9/3AK4 w - - 0 1");
        assert!(board.is_legal(sq("d0"), sq("e1")));
        assert!(!board.is_legal(sq("d0"), sq("c1")));
        assert!(!board.is_legal(sq("d0"), sq("d1")));
    }

    #[test]
    fn test_blocker_may_leave_file_between_kings() {
        // The Red pawn on e5 is the only piece between the Kings. Facing is
        // only forbidden for King moves, so stepping aside stays legal.
        let board = Board::from_fen("4k4/9/9/9/4P4/9/9/9/9/4K4 w - - 0 1");
        assert!(!board.kings_facing());
        let (after, _) = board.with_move(sq("e5"), sq("d5"));
        assert!(after.kings_facing());
        assert!(!after.is_in_check(Color::Red));
        assert!(board.is_legal(sq("e5"), sq("e6")));
        assert!(board.is_legal(sq("e5"), sq("d5")));
        assert!(board.generate_moves().contains(Move::new(sq("e5"), sq("d5"))));
    }

    #[test]
    fn test_king_may_not_step_onto_open_file() {
        let board = Board::from_fen("3k5/9/9/9/9/9/9/9/9/4K4 b - - 0 1");
        assert!(!board.is_legal(sq("d9"), sq("e9")));
        assert!(board.is_legal(sq("d9"), sq("d8")));
    }

    #[test]
    fn test_kingless_position_never_in_check() {
        let board = Board::from_fen("9/9/9/9/9/9/9/9/9/R8 w - - 0 1");
        assert!(!board.is_in_check(Color::Red));
        assert!(!board.kings_facing());
        assert!(board.is_legal(sq("a0"), sq("a9")));
    }
}
