#[cfg(test)]
#[path = "../../tests/unit/solver/selection_test.rs"]
mod selection_test;

use crate::models::{DistanceMatrix, PheromoneMatrix, select};
use crate::utils::{Float, Random};

/// Keeps read-only state required to choose the next location of an ant.
pub struct SelectionContext<'a> {
    /// Travel costs.
    pub distances: &'a DistanceMatrix,
    /// Current pheromone levels.
    pub pheromone: &'a PheromoneMatrix,
    /// Pheromone influence exponent.
    pub alpha: Float,
    /// Heuristic influence exponent.
    pub beta: Float,
}

/// Specifies how the next location was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Chosen by pheromone and distance weighted roulette.
    Weighted(usize),
    /// Chosen uniformly as all candidate weights vanished.
    Uniform(usize),
}

impl Selection {
    /// Returns chosen location.
    pub fn node(&self) -> usize {
        match self {
            Self::Weighted(node) | Self::Uniform(node) => *node,
        }
    }

    /// Returns true if the choice was made by the degenerate uniform fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Uniform(_))
    }
}

impl SelectionContext<'_> {
    /// Returns a selection weight of moving from `current` to each of `candidates`:
    /// `pheromone ^ alpha * (1 / distance) ^ beta`. An undefined product (zero pheromone on
    /// a zero length edge) has zero weight.
    pub fn weights(&self, current: usize, candidates: &[usize]) -> Vec<Float> {
        let pheromone = select(self.pheromone.row(current), candidates);
        let distances = select(self.distances.row(current), candidates);

        pheromone
            .iter()
            .zip(distances.iter())
            .map(|(tau, distance)| tau.powf(self.alpha) * (1. / distance).powf(self.beta))
            .map(|weight| if weight.is_nan() { 0. } else { weight })
            .collect()
    }
}

/// Chooses the next unvisited location using pheromone and distance weighted roulette selection.
/// Returns `None` when every location is visited already.
///
/// When no candidate has a positive weight (e.g. all weights underflow to zero), the choice
/// falls back to a uniform one among unvisited locations. When some weight is infinite (a zero
/// distance to a candidate), the choice is uniform among candidates with infinite weight.
pub fn select_next_node<R: Random + ?Sized>(
    ctx: &SelectionContext,
    current: usize,
    visited: &[bool],
    random: &mut R,
) -> Option<Selection> {
    let candidates = visited.iter().enumerate().filter(|&(_, &is_visited)| !is_visited).map(|(node, _)| node);
    let candidates = candidates.collect::<Vec<_>>();

    if candidates.is_empty() {
        return None;
    }

    let weights = ctx.weights(current, candidates.as_slice());
    let max_weight = weights.iter().copied().fold(0., Float::max);

    if max_weight.is_infinite() {
        let dominant = candidates
            .iter()
            .zip(weights.iter())
            .filter(|(_, weight)| weight.is_infinite())
            .map(|(&node, _)| node)
            .collect::<Vec<_>>();

        return Some(Selection::Weighted(dominant[random.uniform_index(dominant.len())]));
    }

    if !(max_weight > 0.) {
        return Some(Selection::Uniform(candidates[random.uniform_index(candidates.len())]));
    }

    // NOTE scale by max weight first: a sum of large finite weights may overflow
    let scaled = weights.iter().map(|weight| weight / max_weight).collect::<Vec<_>>();
    let total = scaled.iter().sum::<Float>();
    let probabilities = scaled.iter().map(|weight| weight / total).collect::<Vec<_>>();

    Some(Selection::Weighted(candidates[random.weighted(probabilities.as_slice())]))
}
