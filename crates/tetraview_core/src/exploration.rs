//! One complete exploration run
//!
//! An [`Exploration`] owns the state grid for a single set of parameters and
//! runs the two passes over it: the reachability sweep first, then the
//! allowability classification. Once both have run the grid is only read.

use crate::{
    AllowabilityClassifier, CellCounts, ExplorationParams, ExplorationSummary, ParamErrors,
    ReachabilitySweep, RejectionCounter, StateGrid, SweepOutcome,
};

/// Rejection ratio above which the sweep result is flagged in the log
const REJECTION_WARN_RATIO: f64 = 0.01;

/// Grid, passes and counters for one parameter set
pub struct Exploration {
    params: ExplorationParams,
    grid: StateGrid,
    sweep: ReachabilitySweep,
    classifier: AllowabilityClassifier,
    rejections: RejectionCounter,
    evaluated: u64,
}

impl Exploration {
    /// Validate `params` and allocate an empty grid
    pub fn new(params: ExplorationParams) -> Result<Self, ParamErrors> {
        params.validate_or_error()?;

        log::info!(
            "Exploring triangle A={:.6} B={:.6} C={:.6}: lattice M={} O={}, grid N={}, {:?} rules",
            params.triangle.a(),
            params.triangle.b(),
            params.triangle.c(),
            params.lattice_resolution,
            params.margin,
            params.grid_resolution,
            params.rules,
        );

        Ok(Self {
            grid: StateGrid::new(params.bins()),
            sweep: ReachabilitySweep::new(params.lattice(), params.triangle),
            classifier: AllowabilityClassifier::for_rule_set(params.rules, params.triangle),
            rejections: RejectionCounter::new(),
            evaluated: 0,
            params,
        })
    }

    /// Validate `params`, then run both passes
    pub fn run(params: ExplorationParams) -> Result<Self, ParamErrors> {
        let mut exploration = Self::new(params)?;
        exploration.sweep();
        exploration.classify();
        Ok(exploration)
    }

    /// Run the reachability sweep
    ///
    /// Running it again leaves the reached flags unchanged but keeps adding
    /// to the evaluated and rejected counts.
    pub fn sweep(&mut self) -> SweepOutcome {
        let outcome = self.sweep.run(&mut self.grid, &mut self.rejections);
        self.evaluated += outcome.evaluated;

        if outcome.evaluated > 0 {
            let ratio = outcome.rejected as f64 / outcome.evaluated as f64;
            if ratio > REJECTION_WARN_RATIO {
                log::warn!(
                    "{:.2}% of tilt triples were rejected; consider a larger margin",
                    ratio * 100.0
                );
            }
        }
        log::info!("{} cells reached", self.grid.reached_count());

        outcome
    }

    /// Run the allowability classification, returning the allowable cell count
    pub fn classify(&mut self) -> usize {
        self.classifier.classify(&mut self.grid)
    }

    #[inline]
    pub fn params(&self) -> &ExplorationParams {
        &self.params
    }

    #[inline]
    pub fn grid(&self) -> &StateGrid {
        &self.grid
    }

    /// Rejected tilt triples over all sweeps so far
    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejections.count()
    }

    /// Population counts and sweep totals
    pub fn summary(&self) -> ExplorationSummary {
        ExplorationSummary {
            counts: CellCounts::from_grid(&self.grid),
            evaluated: self.evaluated,
            rejected: self.rejections.count(),
        }
    }
}
