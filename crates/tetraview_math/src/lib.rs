//! Angle mathematics for tetraview
//!
//! This crate provides the geometric primitives shared by the sweep and the
//! classifier.
//!
//! ## Core Types
//!
//! - [`Triangle`] - The base triangle ABC with cached cosines
//! - [`TiltTriple`] - Inclinations of three planes through the triangle's sides
//! - [`ViewAngles`] - Angles (alpha, beta, gamma) seen from the planes' common point
//! - [`AngleBins`] - Uniform partition of `[0, pi]` into bins

mod triangle;
pub mod angles;
pub mod bins;

pub use triangle::Triangle;
pub use angles::{TiltTriple, TiltTrig, ViewAngles};
pub use bins::AngleBins;
