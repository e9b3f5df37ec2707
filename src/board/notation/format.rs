use super::super::error::ResolveError;
use super::super::{Board, Move};
use super::resolve::pick_tandem;
use super::{MoveDescriptor, Movement, Tandem};

impl Board {
    /// Describe a legal move in Chinese notation terms.
    ///
    /// The piece is named by tandem position when another piece of the same
    /// kind shares its file, otherwise by its native file. The result is
    /// checked by resolving it back against this position.
    ///
    /// # Errors
    /// `NoLegalMatch` if `mv` is not a legal move here; otherwise whatever
    /// resolving the description reports when it does not lead back to `mv`.
    pub fn describe_move(&self, mv: Move) -> Result<MoveDescriptor, ResolveError> {
        let (from, to) = (mv.from(), mv.to());
        let Some((color, piece)) = self.piece_at(from) else {
            return Err(ResolveError::NoLegalMatch { candidates: 0 });
        };
        if !self.is_legal(from, to) {
            return Err(ResolveError::NoLegalMatch { candidates: 1 });
        }

        let (_, dr) = from.delta(to);
        let advance = dr * color.forward();
        let movement = match advance {
            0 => Movement::Traverse,
            a if a > 0 => Movement::Advance,
            _ => Movement::Retreat,
        };
        let target = if movement != Movement::Traverse && piece.moves_straight() {
            advance.unsigned_abs() as u8
        } else {
            color.file_to_native(to.file())
        };

        let column = self.tandem_column(color, piece, from.file());
        let tandem = [Tandem::Front, Tandem::Middle, Tandem::Back]
            .into_iter()
            .find(|&t| pick_tandem(&column, t) == Some(from));
        let desc = match tandem {
            Some(tandem) => MoveDescriptor::with_tandem(piece, color, tandem, movement, target),
            None => MoveDescriptor::new(
                piece,
                color,
                color.file_to_native(from.file()),
                movement,
                target,
            ),
        };

        let resolved = self.resolve(&desc)?;
        if resolved == mv {
            Ok(desc)
        } else {
            Err(ResolveError::Ambiguous {
                moves: vec![mv, resolved],
            })
        }
    }

    /// Render a legal move as Chinese notation, using the mover's character
    /// set (Chinese numerals for Red, full-width digits for Black).
    ///
    /// # Errors
    /// See [`Board::describe_move`].
    pub fn move_to_notation(&self, mv: Move) -> Result<String, ResolveError> {
        self.describe_move(mv).map(|desc| desc.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_position_notation() {
        let board = Board::new();
        assert_eq!(board.move_to_notation(mv("h2e2")).unwrap(), "炮二平五");
        assert_eq!(board.move_to_notation(mv("g3g4")).unwrap(), "兵三进一");
        assert_eq!(board.move_to_notation(mv("h0g2")).unwrap(), "马二进三");
        assert_eq!(board.move_to_notation(mv("a0a2")).unwrap(), "车九进二");
        assert_eq!(board.move_to_notation(mv("c0e2")).unwrap(), "相七进五");
    }

    #[test]
    fn test_black_notation_uses_full_width_digits() {
        let board = Board::new().apply_move(mv("h2e2"));
        assert_eq!(board.move_to_notation(mv("h9g7")).unwrap(), "马８进７");
        assert_eq!(board.move_to_notation(mv("b7e7")).unwrap(), "炮２平５");
    }

    #[test]
    fn test_retreat_notation() {
        let board = Board::from_fen("3k5/9/9/9/9/9/9/9/9/R3K4 w - - 0 1")
            .apply_move(mv("a0a5"))
            .apply_move(mv("d9d8"));
        assert_eq!(board.move_to_notation(mv("a5a1")).unwrap(), "车九退四");
    }

    #[test]
    fn test_tandem_notation() {
        let board = Board::from_fen(
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/7C1/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1",
        );
        assert_eq!(board.move_to_notation(mv("h4e4")).unwrap(), "前炮平五");
        assert_eq!(board.move_to_notation(mv("h2e2")).unwrap(), "后炮平五");
        assert_eq!(board.move_to_notation(mv("b2e2")).unwrap(), "炮八平五");
    }

    #[test]
    fn test_illegal_move_has_no_notation() {
        let board = Board::new();
        assert!(matches!(
            board.move_to_notation(mv("e4e5")),
            Err(ResolveError::NoLegalMatch { candidates: 0 })
        ));
        assert!(matches!(
            board.move_to_notation(mv("e0e2")),
            Err(ResolveError::NoLegalMatch { candidates: 1 })
        ));
    }
}
