use super::super::{Board, Square};

impl Board {
    /// Number of pieces strictly between two squares on one file or rank.
    ///
    /// `None` if the squares are equal or not on a common line.
    #[must_use]
    pub fn count_between(&self, from: Square, to: Square) -> Option<usize> {
        let (df, dr) = from.delta(to);
        if (df != 0 && dr != 0) || (df == 0 && dr == 0) {
            return None;
        }
        let step = (df.signum(), dr.signum());
        let mut count = 0;
        let mut current = from.offset(step.0, step.1)?;
        while current != to {
            if !self.is_empty(current) {
                count += 1;
            }
            current = current.offset(step.0, step.1)?;
        }
        Some(count)
    }

    /// Any distance along a file or rank over empty points.
    pub(crate) fn chariot_pattern(&self, from: Square, to: Square) -> bool {
        self.count_between(from, to) == Some(0)
    }

    /// Moves like a chariot, but captures by jumping exactly one screen.
    pub(crate) fn cannon_pattern(&self, from: Square, to: Square) -> bool {
        let screens = if self.is_empty(to) { 0 } else { 1 };
        self.count_between(from, to) == Some(screens)
    }
}
