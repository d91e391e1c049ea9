//! Discrete Fréchet distance between polylines.
//!
//! Pure math library, zero I/O. Builds the coupling-cost matrix of two
//! n-dimensional polylines (bottom-up or memoized top-down), reads the
//! discrete Fréchet distance off its terminal cell, and backtracks the matrix
//! into an optimal monotone coupling sequence.

mod backtrack;
mod builder;
mod config;
mod coupling;
mod distance;
mod error;
mod frechet;
mod matrix;
mod polyline;

pub use config::{FillOrder, FrechetConfig};
pub use coupling::{CouplingSequence, CouplingStep};
pub use distance::{FrechetDistance, euclidean};
pub use error::FrechetError;
pub use frechet::DiscreteFrechet;
pub use matrix::CostMatrix;
pub use polyline::{Polyline, PolylineView};
