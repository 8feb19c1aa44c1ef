//! Reachability sweep over the tilt lattice
//!
//! Every tilt triple `(i, j, k) * pi / M` with `i, j, k` in `[O, M - O)` is
//! converted to view angles; each accepted result marks its grid cell as
//! reached. The sweep is a plain dense loop with no pruning, so its result is
//! the exact set of cells hit by the lattice.

use std::f64::consts::PI;
use std::ops::Range;
use std::time::Instant;

use tetraview_math::{TiltTriple, TiltTrig, Triangle};

use crate::StateGrid;

/// Uniform lattice of tilt angles with a margin excluding the extremes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TiltLattice {
    resolution: usize,
    margin: usize,
}

impl TiltLattice {
    /// Create a lattice with `resolution` steps over `[0, pi]`, skipping
    /// `margin` steps at each end
    pub fn new(resolution: usize, margin: usize) -> Self {
        Self { resolution, margin }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[inline]
    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Indices swept along each axis
    pub fn indices(&self) -> Range<usize> {
        self.margin..self.resolution.saturating_sub(self.margin).max(self.margin)
    }

    /// Tilt angle for lattice index `i`
    #[inline]
    pub fn angle(&self, i: usize) -> f64 {
        i as f64 * PI / self.resolution as f64
    }

    /// Tilt triple at lattice position `(i, j, k)`
    pub fn triple(&self, i: usize, j: usize, k: usize) -> TiltTriple {
        TiltTriple::new(self.angle(i), self.angle(j), self.angle(k))
    }

    /// Number of triples visited by a sweep
    pub fn triple_count(&self) -> u64 {
        let per_axis = self.indices().len() as u64;
        per_axis * per_axis * per_axis
    }
}

/// Running count of tilt triples whose view angles were rejected
///
/// Only ever increases; a second sweep adds to the same count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RejectionCounter {
    count: u64,
}

impl RejectionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self) {
        self.count += 1;
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Result of one sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Tilt triples converted
    pub evaluated: u64,
    /// Tilt triples rejected during this sweep
    pub rejected: u64,
}

/// Marks every grid cell reached by the tilt lattice
pub struct ReachabilitySweep {
    lattice: TiltLattice,
    triangle: Triangle,
}

impl ReachabilitySweep {
    pub fn new(lattice: TiltLattice, triangle: Triangle) -> Self {
        Self { lattice, triangle }
    }

    /// Sweep the whole lattice into `grid`
    ///
    /// Rejected triples are added to `rejections` and skipped; they never
    /// stop the sweep.
    pub fn run(&self, grid: &mut StateGrid, rejections: &mut RejectionCounter) -> SweepOutcome {
        let start = Instant::now();
        let indices = self.lattice.indices();

        // cos/sin of every tilt angle on one axis, shared by all three axes
        let table: Vec<(f64, f64)> = indices
            .clone()
            .map(|i| {
                let tau = self.lattice.angle(i);
                (tau.cos(), tau.sin())
            })
            .collect();

        let before = rejections.count();
        let mut evaluated = 0u64;
        let progress_step = (table.len() / 10).max(1);

        for (a, &(cos1, sin1)) in table.iter().enumerate() {
            for &(cos2, sin2) in &table {
                for &(cos3, sin3) in &table {
                    let trig = TiltTrig {
                        cos: [cos1, cos2, cos3],
                        sin: [sin1, sin2, sin3],
                    };
                    evaluated += 1;
                    match trig.view_angles(&self.triangle) {
                        Some(view) => {
                            grid.reach(&view);
                        }
                        None => rejections.record(),
                    }
                }
            }

            if (a + 1) % progress_step == 0 {
                log::debug!(
                    "Sweep progress: {}/{} tilt slices",
                    a + 1,
                    table.len()
                );
            }
        }

        let outcome = SweepOutcome {
            evaluated,
            rejected: rejections.count() - before,
        };

        log::info!(
            "Swept {} tilt triples ({} rejected) in {:.2?}",
            outcome.evaluated,
            outcome.rejected,
            start.elapsed()
        );

        outcome
    }
}
