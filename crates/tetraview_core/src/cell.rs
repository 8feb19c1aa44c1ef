//! Per-cell state flags

use bitflags::bitflags;

bitflags! {
    /// What is known about one cell of the view-angle grid
    ///
    /// The two flags are set by independent passes and never cleared, so the
    /// raw value is always one of 0, 1, 2, 3.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CellState: u8 {
        /// Nothing recorded
        const EMPTY = 0;
        /// Some sampled tilt triple produced view angles inside this cell
        const REACHED = 1 << 0;
        /// The cell's midpoint satisfies the allowability inequalities
        const ALLOWABLE = 1 << 1;
    }
}

impl CellState {
    /// Combined state as a small integer: `reached + 2 * allowable`
    #[inline]
    pub fn value(self) -> u8 {
        self.bits()
    }

    #[inline]
    pub fn is_reached(self) -> bool {
        self.contains(CellState::REACHED)
    }

    #[inline]
    pub fn is_allowable(self) -> bool {
        self.contains(CellState::ALLOWABLE)
    }
}
