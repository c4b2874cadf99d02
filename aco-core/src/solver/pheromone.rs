#[cfg(test)]
#[path = "../../tests/unit/solver/pheromone_test.rs"]
mod pheromone_test;

use crate::models::{PheromoneMatrix, Tour};
use crate::utils::Float;

/// Scales every pheromone entry by `1 - rho`.
pub fn evaporate(pheromone: &mut PheromoneMatrix, rho: Float) {
    pheromone.scale(1. - rho);
}

/// Adds `q / length` of every tour to both directions of each traversed edge.
/// A tour with a non finite deposit amount (zero length) deposits nothing.
pub fn deposit<'a, I>(pheromone: &mut PheromoneMatrix, tours: I, q: Float)
where
    I: IntoIterator<Item = &'a Tour>,
{
    tours.into_iter().for_each(|tour| {
        let delta = q / tour.length();
        if !delta.is_finite() {
            return;
        }

        tour.nodes().windows(2).for_each(|edge| pheromone.deposit(edge[0], edge[1], delta));
    });
}

/// Applies evaporation globally first, then deposits pheromone from all given tours.
pub fn update_pheromone<'a, I>(pheromone: &mut PheromoneMatrix, tours: I, rho: Float, q: Float)
where
    I: IntoIterator<Item = &'a Tour>,
{
    evaporate(pheromone, rho);
    deposit(pheromone, tours, q);
}
