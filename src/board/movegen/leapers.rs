use super::super::{Board, Color, Square};

impl Board {
    /// Two points diagonally on its own side of the river, with the
    /// midpoint empty.
    pub(crate) fn elephant_pattern(&self, from: Square, to: Square, color: Color) -> bool {
        let (df, dr) = from.delta(to);
        if df.abs() != 2 || dr.abs() != 2 || !to.is_on_own_side(color) {
            return false;
        }
        from.offset(df / 2, dr / 2).is_some_and(|eye| self.is_empty(eye))
    }

    /// One orthogonal point then one diagonal point outward. The leg is the
    /// point next to `from` along the longer axis and must be empty.
    pub(crate) fn horse_pattern(&self, from: Square, to: Square) -> bool {
        let (df, dr) = from.delta(to);
        let leg = match (df.abs(), dr.abs()) {
            (2, 1) => from.offset(df / 2, 0),
            (1, 2) => from.offset(0, dr / 2),
            _ => return false,
        };
        leg.is_some_and(|leg| self.is_empty(leg))
    }
}
