//! This module reimports commonly used types.

pub use crate::algorithms::geo::{create_haversine_matrix, haversine_distance};

pub use crate::models::{DistanceMatrix, IterationRecord, PheromoneMatrix, Solution, Tour};

pub use crate::solver::AcoOptimizer;
pub use crate::solver::AcoParams;
pub use crate::solver::RunState;
pub use crate::solver::{InfoLogger, TelemetryMetrics, TelemetryMode};

pub use crate::utils::compare_floats;
pub use crate::utils::Float;
pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{GenericError, InvalidParameterError};
