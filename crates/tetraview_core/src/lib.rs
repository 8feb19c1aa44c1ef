//! Core exploration pipeline for tetraview
//!
//! This crate owns the discretised view-angle grid and the two passes that
//! fill it:
//!
//! - [`StateGrid`] - N x N x N cells over `[0, pi]^3`, each holding [`CellState`] flags
//! - [`ReachabilitySweep`] - Dense sweep of a [`TiltLattice`], marking reached cells
//! - [`AllowabilityClassifier`] - Marks cells whose midpoint satisfies an [`AllowabilityRule`]
//! - [`Exploration`] - Runs both passes for one [`ExplorationParams`] and summarises them

mod cell;
mod grid;
mod sweep;
mod rules;
mod classifier;
mod params;
mod stats;
mod exploration;

pub use cell::CellState;
pub use grid::StateGrid;
pub use sweep::{ReachabilitySweep, RejectionCounter, SweepOutcome, TiltLattice};
pub use rules::{AllowabilityRule, BaseRules, NearBoundaryRules, RuleSet};
pub use classifier::AllowabilityClassifier;
pub use params::{ExplorationParams, ParamError, ParamErrors, MAX_GRID_CELLS};
pub use stats::{CellCounts, ExplorationSummary};
pub use exploration::Exploration;

// Re-export the math types callers need to build parameters
pub use tetraview_math::{AngleBins, TiltTriple, Triangle, ViewAngles};
