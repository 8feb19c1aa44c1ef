//! tetraview - reachable and allowable view angles for a tilted-plane configuration
//!
//! Three planes, each containing one side line of a fixed triangle ABC, are
//! tilted through a dense lattice of angles. The angles under which the
//! triangle's sides are seen from the planes' common point are binned into a
//! 3D grid, and every cell is also checked against an analytic inequality
//! system. The binary prints the grid and its statistics.
//!
//! The pipeline lives in [`tetraview_core`]; this crate adds configuration
//! loading and the text report.

pub mod config;
pub mod report;
