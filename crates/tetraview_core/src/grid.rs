//! Discretised view-angle grid
//!
//! The grid covers `[0, pi]^3` in (alpha, beta, gamma) with the same
//! [`AngleBins`] partition on every axis. Cells are stored flat in
//! alpha-major order, so `(i, j, k)` lives at `(i * n + j) * n + k`.

use tetraview_math::{AngleBins, ViewAngles};

use crate::CellState;

/// N x N x N lattice of [`CellState`] flags
#[derive(Clone, Debug, PartialEq)]
pub struct StateGrid {
    bins: AngleBins,
    cells: Vec<CellState>,
}

impl StateGrid {
    /// Create a grid with every cell empty
    ///
    /// # Panics
    /// Panics if N^3 overflows `usize`; [`ExplorationParams::validate`](crate::ExplorationParams::validate)
    /// rejects such resolutions first.
    pub fn new(bins: AngleBins) -> Self {
        let n = bins.count();
        let len = Self::cell_count(n)
            .unwrap_or_else(|| panic!("Grid resolution {} overflows the cell count", n));
        Self {
            bins,
            cells: vec![CellState::EMPTY; len],
        }
    }

    /// N^3, or `None` if it overflows `usize`
    #[inline]
    pub fn cell_count(resolution: usize) -> Option<usize> {
        resolution.checked_pow(3)
    }

    /// The partition shared by all three axes
    #[inline]
    pub fn bins(&self) -> &AngleBins {
        &self.bins
    }

    /// Cells per axis (N)
    #[inline]
    pub fn resolution(&self) -> usize {
        self.bins.count()
    }

    /// Total number of cells (N^3)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        let n = self.resolution();
        debug_assert!(i < n && j < n && k < n, "cell ({}, {}, {}) outside {}^3 grid", i, j, k, n);
        (i * n + j) * n + k
    }

    /// Set the reached flag of a cell
    #[inline]
    pub fn set_reached(&mut self, i: usize, j: usize, k: usize) {
        let idx = self.offset(i, j, k);
        self.cells[idx].insert(CellState::REACHED);
    }

    /// Set the allowable flag of a cell
    #[inline]
    pub fn mark_allowable(&mut self, i: usize, j: usize, k: usize) {
        let idx = self.offset(i, j, k);
        self.cells[idx].insert(CellState::ALLOWABLE);
    }

    /// State of a cell
    #[inline]
    pub fn state_at(&self, i: usize, j: usize, k: usize) -> CellState {
        self.cells[self.offset(i, j, k)]
    }

    /// Mark the cell containing the given view angles as reached
    ///
    /// Returns the cell coordinates.
    pub fn reach(&mut self, view: &ViewAngles) -> (usize, usize, usize) {
        let i = self.bins.index(view.alpha);
        let j = self.bins.index(view.beta);
        let k = self.bins.index(view.gamma);
        self.set_reached(i, j, k);
        (i, j, k)
    }

    /// Midpoint view angles of a cell
    pub fn midpoint(&self, i: usize, j: usize, k: usize) -> ViewAngles {
        ViewAngles::new(
            self.bins.midpoint(i),
            self.bins.midpoint(j),
            self.bins.midpoint(k),
        )
    }

    /// The N cells with fixed `i` and `j`, ordered by `k`
    pub fn row(&self, i: usize, j: usize) -> &[CellState] {
        let start = self.offset(i, j, 0);
        &self.cells[start..start + self.resolution()]
    }

    /// All cells in storage order
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate over `((i, j, k), state)` for every cell
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize, usize), CellState)> + '_ {
        let n = self.resolution();
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &state)| ((idx / (n * n), (idx / n) % n, idx % n), state))
    }

    /// Number of cells with the reached flag
    pub fn reached_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_reached()).count()
    }

    /// Number of cells with the allowable flag
    pub fn allowable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_allowable()).count()
    }
}
