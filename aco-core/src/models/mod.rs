//! Contains the data model of the tour problem: distance and pheromone matrices, tours
//! and run results.

mod matrix;
pub use self::matrix::*;

mod tour;
pub use self::tour::*;
