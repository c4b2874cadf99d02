//! This crate exposes an ant colony optimization (Ant System) solver which searches for a short
//! closed tour visiting every location of a fixed set exactly once, given a matrix of pairwise
//! travel costs.
//!
//! The matrix itself is produced elsewhere (a road network router, a CSV file, or the
//! [`algorithms::geo`] haversine fallback); the optimizer only consumes it.
//!
//! # Examples
//!
//! ```
//! use aco_core::prelude::*;
//!
//! let eps = 1E-10;
//! let distances = vec![
//!     vec![eps, 1., 2., 2.],
//!     vec![1., eps, 2., 1.],
//!     vec![2., 2., eps, 1.],
//!     vec![2., 1., 1., eps],
//! ];
//!
//! let params = AcoParams::default().with_ant_count(5).with_seed(42);
//! let mut optimizer = AcoOptimizer::new(&distances, params)?;
//!
//! let solution = optimizer.run(20);
//!
//! assert_eq!(solution.tour.len(), 5);
//! assert_eq!(solution.tour.first(), solution.tour.last());
//! assert_eq!(solution.history.len(), 20);
//! # Ok::<(), InvalidParameterError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
