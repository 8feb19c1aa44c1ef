//! Population counts over the finished grid

use crate::StateGrid;

/// Number of cells in each of the four states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// State 3: reached and allowable
    pub occupied_allowable: u64,
    /// State 2: allowable but never reached
    pub unoccupied_allowable: u64,
    /// State 1: reached but not allowable
    pub occupied_unallowable: u64,
    /// State 0: neither
    pub unoccupied_unallowable: u64,
    /// Every cell, N^3
    pub total: u64,
}

impl CellCounts {
    /// Tally every cell of `grid` once
    pub fn from_grid(grid: &StateGrid) -> Self {
        let mut counts = Self::default();
        for cell in grid.cells() {
            match cell.value() {
                0 => counts.unoccupied_unallowable += 1,
                1 => counts.occupied_unallowable += 1,
                2 => counts.unoccupied_allowable += 1,
                3 => counts.occupied_allowable += 1,
                _ => {}
            }
            counts.total += 1;
        }
        counts
    }

    /// Count for a combined state value 0..=3
    pub fn by_state(&self, value: u8) -> u64 {
        match value {
            0 => self.unoccupied_unallowable,
            1 => self.occupied_unallowable,
            2 => self.unoccupied_allowable,
            3 => self.occupied_allowable,
            _ => 0,
        }
    }
}

/// Outcome of a full exploration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExplorationSummary {
    pub counts: CellCounts,
    /// Tilt triples converted by the sweep
    pub evaluated: u64,
    /// Tilt triples whose view angles were rejected
    pub rejected: u64,
}
