use super::super::{Board, Color, Square};

impl Board {
    /// One point forward, or one point sideways once across the river.
    pub(crate) fn pawn_pattern(&self, from: Square, to: Square, color: Color) -> bool {
        let (df, dr) = from.delta(to);
        match (df.abs(), dr) {
            (0, dr) => dr == color.forward(),
            (1, 0) => !from.is_on_own_side(color),
            _ => false,
        }
    }
}
