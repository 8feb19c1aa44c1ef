//! Exploration parameters and their validation
//!
//! [`ExplorationParams`] is the immutable description of one run. The
//! [`validate`](ExplorationParams::validate) check reports every problem at
//! once, before any sweeping starts.

use std::f64::consts::PI;
use std::fmt;

use tetraview_math::{AngleBins, Triangle};

use crate::{RuleSet, StateGrid, TiltLattice};

/// Tolerance for `A + B + C = pi`
const ANGLE_SUM_TOLERANCE: f64 = 1e-9;

/// Largest grid allocated, in one-byte cells (N = 1024)
pub const MAX_GRID_CELLS: usize = 1 << 30;

/// Everything needed to run one exploration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplorationParams {
    /// Tilt lattice steps over `[0, pi]` (M)
    pub lattice_resolution: usize,
    /// Lattice steps skipped at each end (O)
    pub margin: usize,
    /// Grid cells per view-angle axis (N)
    pub grid_resolution: usize,
    /// Base triangle ABC
    pub triangle: Triangle,
    /// Inequality system for the allowability pass
    pub rules: RuleSet,
}

impl Default for ExplorationParams {
    fn default() -> Self {
        Self::reference()
    }
}

impl ExplorationParams {
    /// M = 1000, O = 1, N = 80, triangle (8, 6, 5) pi / 19, base rules
    pub fn reference() -> Self {
        Self {
            lattice_resolution: 1000,
            margin: 1,
            grid_resolution: 80,
            triangle: Triangle::reference(),
            rules: RuleSet::Base,
        }
    }

    pub fn with_lattice(mut self, resolution: usize, margin: usize) -> Self {
        self.lattice_resolution = resolution;
        self.margin = margin;
        self
    }

    pub fn with_grid_resolution(mut self, resolution: usize) -> Self {
        self.grid_resolution = resolution;
        self
    }

    pub fn with_triangle(mut self, triangle: Triangle) -> Self {
        self.triangle = triangle;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// The tilt lattice described by these parameters
    pub fn lattice(&self) -> TiltLattice {
        TiltLattice::new(self.lattice_resolution, self.margin)
    }

    /// The view-angle bins described by these parameters
    ///
    /// # Panics
    /// Panics if `grid_resolution` is zero; call [`validate`](Self::validate) first.
    pub fn bins(&self) -> AngleBins {
        AngleBins::new(self.grid_resolution)
    }

    /// Check the parameters, returning all errors found
    pub fn validate(&self) -> Vec<ParamError> {
        let mut errors = Vec::new();

        if self.grid_resolution == 0 {
            errors.push(ParamError::ZeroGridResolution);
        } else if StateGrid::cell_count(self.grid_resolution).map_or(true, |n| n > MAX_GRID_CELLS) {
            errors.push(ParamError::GridTooLarge(self.grid_resolution));
        }

        if self.lattice().indices().is_empty() {
            errors.push(ParamError::EmptyLattice {
                resolution: self.lattice_resolution,
                margin: self.margin,
            });
        }

        let sum = self.triangle.angle_sum();
        if sum.is_nan() || (sum - PI).abs() > ANGLE_SUM_TOLERANCE {
            errors.push(ParamError::AngleSumNotPi(sum));
        }

        if !self.triangle.is_acute() {
            errors.push(ParamError::NotAcute(self.triangle.angles()));
        }

        errors
    }

    /// Validate and return `Ok` if no errors were found
    pub fn validate_or_error(&self) -> Result<(), ParamErrors> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ParamErrors(errors))
        }
    }
}

/// A problem with [`ExplorationParams`]
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Grid has no cells
    ZeroGridResolution,
    /// Grid would exceed [`MAX_GRID_CELLS`]
    GridTooLarge(usize),
    /// Margin leaves no tilt angles to sweep
    EmptyLattice { resolution: usize, margin: usize },
    /// Triangle angles do not sum to pi
    AngleSumNotPi(f64),
    /// Some triangle angle is not in (0, pi/2)
    NotAcute([f64; 3]),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::ZeroGridResolution => write!(f, "Grid resolution must be at least 1"),
            ParamError::GridTooLarge(n) => write!(
                f,
                "Grid resolution {} needs more than {} cells",
                n, MAX_GRID_CELLS
            ),
            ParamError::EmptyLattice { resolution, margin } => write!(
                f,
                "Margin {} leaves no tilt angles in a lattice of resolution {}",
                margin, resolution
            ),
            ParamError::AngleSumNotPi(sum) => {
                write!(f, "Triangle angles sum to {} instead of pi", sum)
            }
            ParamError::NotAcute(angles) => write!(
                f,
                "Triangle is not acute: angles [{}, {}, {}]",
                angles[0], angles[1], angles[2]
            ),
        }
    }
}

impl std::error::Error for ParamError {}

/// All problems found by [`ExplorationParams::validate_or_error`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParamErrors(pub Vec<ParamError>);

impl ParamErrors {
    pub fn errors(&self) -> &[ParamError] {
        &self.0
    }
}

impl fmt::Display for ParamErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid exploration parameters: ")?;
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParamErrors {}
