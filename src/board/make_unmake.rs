use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Relocate whatever stands on `from` to `to` on a copy of the board.
    ///
    /// Returns the copy and the occupant that was on `to`. No rule is
    /// checked and side to move, clocks and `self` are left untouched.
    #[must_use]
    pub fn with_move(&self, from: Square, to: Square) -> (Board, Option<(Color, Piece)>) {
        let mut next = self.clone();
        let captured = next.relocate(from, to);
        (next, captured)
    }

    /// Play `mv` on a copy of the board and hand the turn over.
    ///
    /// The halfmove clock resets on a capture and counts up otherwise; the
    /// fullmove number advances after Black's move. Legality is the caller's
    /// concern (see `is_legal` and `resolve`).
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Board {
        let mover = self
            .piece_at(mv.from())
            .map_or(self.side_to_move, |(color, _)| color);
        let (mut next, captured) = self.with_move(mv.from(), mv.to());
        next.halfmove_clock = if captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if mover == Color::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        next.side_to_move = mover.opponent();
        next
    }

    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<(Color, Piece)> {
        let moving = self.remove_piece(from);
        let captured = self.squares[to.as_index()];
        self.squares[to.as_index()] = moving;
        captured
    }
}
