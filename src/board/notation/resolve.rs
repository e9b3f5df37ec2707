use super::super::error::ResolveError;
use super::super::{Board, Color, Move, Piece, Square, FILES, RANKS};
use super::{MoveDescriptor, Movement, Tandem};

impl Board {
    /// Find the single legal move described by `desc`.
    ///
    /// Candidate pieces are narrowed by tandem position or source file, each
    /// candidate's destinations are derived from the movement and target,
    /// and only pairs passing `is_legal` survive.
    ///
    /// # Errors
    /// `NoSuchPiece` if no piece is left after narrowing, `NoLegalMatch` if
    /// none of the derived moves is legal and `Ambiguous` if several are.
    pub fn resolve(&self, desc: &MoveDescriptor) -> Result<Move, ResolveError> {
        let sources = self.candidate_sources(desc);
        if sources.is_empty() {
            debug_log!("{desc}: no {:?} {:?} on the board", desc.color, desc.piece);
            return Err(ResolveError::NoSuchPiece {
                color: desc.color,
                piece: desc.piece,
            });
        }

        let mut tried = 0;
        let mut matches = Vec::new();
        for &from in &sources {
            for to in destinations(desc, from) {
                tried += 1;
                if self.is_legal(from, to) {
                    matches.push(Move::new(from, to));
                }
            }
        }
        debug_log!(
            "{desc}: {} sources, {tried} destinations, {} legal",
            sources.len(),
            matches.len()
        );

        match matches.len() {
            0 => Err(ResolveError::NoLegalMatch { candidates: tried }),
            1 => Ok(matches[0]),
            _ => Err(ResolveError::Ambiguous { moves: matches }),
        }
    }

    /// Squares holding the described piece, narrowed by tandem or file.
    pub(crate) fn candidate_sources(&self, desc: &MoveDescriptor) -> Vec<Square> {
        if let Some(tandem) = desc.tandem {
            return (0..FILES)
                .filter_map(|file| {
                    let column = self.tandem_column(desc.color, desc.piece, file);
                    pick_tandem(&column, tandem)
                })
                .collect();
        }
        let pieces = self.squares_of(desc.color, desc.piece);
        match desc.source_file {
            Some(native) => match desc.color.native_to_file(native) {
                Some(file) => pieces.filter(|sq| sq.file() == file).collect(),
                None => Vec::new(),
            },
            None => pieces.collect(),
        }
    }

    /// Same pieces on `file`, most advanced first.
    pub(crate) fn tandem_column(&self, color: Color, piece: Piece, file: usize) -> Vec<Square> {
        let mut column: Vec<Square> = self
            .squares_of(color, piece)
            .filter(|sq| sq.file() == file)
            .collect();
        column.sort_by_key(|sq| -(sq.rank() as isize) * color.forward());
        column
    }
}

/// Front is the first, Back the last; Middle only exists among three or more.
pub(crate) fn pick_tandem(column: &[Square], tandem: Tandem) -> Option<Square> {
    if column.len() < 2 {
        return None;
    }
    match tandem {
        Tandem::Front => column.first().copied(),
        Tandem::Back => column.last().copied(),
        Tandem::Middle if column.len() >= 3 => column.get(1).copied(),
        Tandem::Middle => None,
    }
}

/// Destinations implied by the descriptor for a piece on `from`. Blocking
/// and check are left to `is_legal`.
fn destinations(desc: &MoveDescriptor, from: Square) -> Vec<Square> {
    let forward = desc.color.forward();
    let sign = match desc.movement {
        Movement::Traverse => {
            return desc
                .color
                .native_to_file(desc.target)
                .and_then(|file| Square::new(file, from.rank()))
                .into_iter()
                .collect();
        }
        Movement::Advance => forward,
        Movement::Retreat => -forward,
    };

    if desc.piece.moves_straight() {
        return from
            .offset(0, sign * isize::from(desc.target))
            .into_iter()
            .collect();
    }

    // The target names a file; any rank there with the piece's step shape
    // is a candidate, whichever way the movement points.
    let Some(file) = desc.color.native_to_file(desc.target) else {
        return Vec::new();
    };
    (0..RANKS)
        .filter_map(|rank| Square::new(file, rank))
        .filter(|&to| has_step_shape(desc.piece, from.delta(to)))
        .collect()
}

/// Raw displacement of a Horse, Advisor or Elephant step, ignoring blocking.
fn has_step_shape(piece: Piece, (df, dr): (isize, isize)) -> bool {
    match (piece, df.abs(), dr.abs()) {
        (Piece::Horse, 1, 2) | (Piece::Horse, 2, 1) => true,
        (Piece::Advisor, 1, 1) => true,
        (Piece::Elephant, 2, 2) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CANNONS: &str =
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/7C1/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn resolve(board: &Board, text: &str) -> Result<Move, ResolveError> {
        let desc = MoveDescriptor::parse(text, board.side_to_move()).unwrap();
        board.resolve(&desc)
    }

    #[test]
    fn test_initial_position_translations() {
        let board = Board::new();
        assert_eq!(resolve(&board, "炮二平五").unwrap().to_string(), "h2e2");
        assert_eq!(resolve(&board, "兵三进一").unwrap().to_string(), "g3g4");
        assert_eq!(resolve(&board, "马二进三").unwrap().to_string(), "h0g2");
        assert_eq!(resolve(&board, "马八进七").unwrap().to_string(), "b0c2");
        assert_eq!(resolve(&board, "车一进一").unwrap().to_string(), "i0i1");
        assert_eq!(resolve(&board, "相三进五").unwrap().to_string(), "g0e2");
        assert_eq!(resolve(&board, "仕四进五").unwrap().to_string(), "f0e1");
        assert_eq!(resolve(&board, "帅五进一").unwrap().to_string(), "e0e1");
    }

    #[test]
    fn test_black_native_files() {
        let board = Board::new().apply_move("h2e2".parse().unwrap());
        assert_eq!(resolve(&board, "马８进７").unwrap().to_string(), "h9g7");
        assert_eq!(resolve(&board, "炮2平5").unwrap().to_string(), "b7e7");
        assert_eq!(resolve(&board, "卒３进１").unwrap().to_string(), "c6c5");
        assert_eq!(resolve(&board, "车１进１").unwrap().to_string(), "a9a8");
    }

    #[test]
    fn test_tandem_cannons() {
        let board = Board::from_fen(TWO_CANNONS);
        assert!(matches!(
            resolve(&board, "炮二平五"),
            Err(ResolveError::Ambiguous { ref moves }) if moves.len() == 2
        ));
        let front = resolve(&board, "前炮平五").unwrap();
        let back = resolve(&board, "后炮平五").unwrap();
        assert_eq!(front, Move::new(sq("h4"), sq("e4")));
        assert_eq!(back, Move::new(sq("h2"), sq("e2")));
        assert_eq!(
            resolve(&board, "中炮平五"),
            Err(ResolveError::NoSuchPiece {
                color: Color::Red,
                piece: Piece::Cannon
            })
        );
    }

    #[test]
    fn test_tandem_black_front_is_lower_rank() {
        let board = Board::from_fen("4k4/9/9/4p4/9/4p4/9/9/9/3K5 b - - 0 1");
        let front = resolve(&board, "前卒平４").unwrap();
        let back = resolve(&board, "后卒进１").unwrap();
        assert_eq!(front, Move::new(sq("e4"), sq("d4")));
        assert_eq!(back, Move::new(sq("e6"), sq("e5")));
    }

    #[test]
    fn test_tandem_three_pawns() {
        let board = Board::from_fen("5k3/9/4P4/4P4/4P4/9/9/9/9/3K5 w - - 0 1");
        assert_eq!(
            resolve(&board, "前兵平六").unwrap(),
            Move::new(sq("e7"), sq("d7"))
        );
        assert_eq!(
            resolve(&board, "中兵平六").unwrap(),
            Move::new(sq("e6"), sq("d6"))
        );
        assert_eq!(
            resolve(&board, "后兵平六").unwrap(),
            Move::new(sq("e5"), sq("d5"))
        );
    }

    #[test]
    fn test_missing_piece() {
        let board = Board::from_fen(
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABN1 w - - 0 1",
        );
        assert_eq!(
            resolve(&board, "车一进一"),
            Err(ResolveError::NoSuchPiece {
                color: Color::Red,
                piece: Piece::Chariot
            })
        );
        assert_eq!(
            resolve(&board, "马一进三"),
            Err(ResolveError::NoSuchPiece {
                color: Color::Red,
                piece: Piece::Horse
            })
        );
    }

    #[test]
    fn test_no_legal_match() {
        let board = Board::new();
        assert!(matches!(
            resolve(&board, "车一进四"),
            Err(ResolveError::NoLegalMatch { candidates: 1 })
        ));
        assert!(matches!(
            resolve(&board, "马二进四"),
            Err(ResolveError::NoLegalMatch { .. })
        ));
        assert!(matches!(
            resolve(&board, "炮二进九"),
            Err(ResolveError::NoLegalMatch { candidates: 0 })
        ));
    }

    #[test]
    fn test_horse_blocked_leg_and_occupied_rank() {
        // Leg e2 blocks both f-file jumps; g0 holds a Red elephant.
        let board = Board::from_fen("3k5/9/9/9/9/9/9/4P4/4N4/4K1B2 w - - 0 1");
        assert!(matches!(
            resolve(&board, "马五进四"),
            Err(ResolveError::NoLegalMatch { .. })
        ));
        assert_eq!(
            resolve(&board, "马五进三").unwrap(),
            Move::new(sq("e1"), sq("g2"))
        );
        // Only one rank on the g-file survives, whatever the direction says.
        assert_eq!(
            resolve(&board, "马五退三").unwrap(),
            Move::new(sq("e1"), sq("g2"))
        );
    }

    #[test]
    fn test_horse_with_both_ranks_open_is_ambiguous() {
        let board = Board::from_fen("3k5/9/9/9/9/4N4/9/9/9/5K3 w - - 0 1");
        assert!(board.is_legal(sq("e4"), sq("f6")));
        assert!(board.is_legal(sq("e4"), sq("f2")));
        for text in ["马五进四", "马五退四"] {
            assert_eq!(
                resolve(&board, text),
                Err(ResolveError::Ambiguous {
                    moves: vec![Move::new(sq("e4"), sq("f2")), Move::new(sq("e4"), sq("f6"))]
                }),
                "{text}"
            );
        }
    }

    #[test]
    fn test_step_shapes() {
        assert!(has_step_shape(Piece::Horse, (1, -2)));
        assert!(has_step_shape(Piece::Horse, (-2, 1)));
        assert!(!has_step_shape(Piece::Horse, (1, 1)));
        assert!(has_step_shape(Piece::Advisor, (-1, 1)));
        assert!(has_step_shape(Piece::Elephant, (2, -2)));
        assert!(!has_step_shape(Piece::Elephant, (2, 1)));
        assert!(!has_step_shape(Piece::Chariot, (1, 2)));
    }

    #[test]
    fn test_pick_tandem_edges() {
        let one = [sq("e2")];
        assert_eq!(pick_tandem(&one, Tandem::Front), None);
        let two = [sq("e5"), sq("e2")];
        assert_eq!(pick_tandem(&two, Tandem::Middle), None);
        assert_eq!(pick_tandem(&two, Tandem::Back), Some(sq("e2")));
    }
}
