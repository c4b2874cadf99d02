#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::DistanceMatrix;
use crate::utils::Float;

/// A sequence of visited locations together with its total travel cost.
///
/// A complete tour has `n + 1` entries: a permutation of all `n` locations followed by its start.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    nodes: Vec<usize>,
    length: Float,
}

impl Tour {
    /// Creates a tour from visited locations, calculating its length with given distances.
    pub fn new(nodes: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let length = distances.tour_length(nodes.as_slice());
        Self { nodes, length }
    }

    /// Returns visited locations.
    pub fn nodes(&self) -> &[usize] {
        self.nodes.as_slice()
    }

    /// Returns total travel cost.
    pub fn length(&self) -> Float {
        self.length
    }

    /// Returns the first visited location.
    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Checks whether the tour returns to its start.
    pub fn is_closed(&self) -> bool {
        self.nodes.len() > 1 && self.nodes.first() == self.nodes.last()
    }

    /// Checks whether the tour is closed and visits each of `size` locations exactly once.
    pub fn is_hamiltonian(&self, size: usize) -> bool {
        if !self.is_closed() || self.nodes.len() != size + 1 {
            return false;
        }

        let mut visited = vec![false; size];
        self.nodes[..size].iter().all(|&node| node < size && !std::mem::replace(&mut visited[node], true))
    }
}

/// Statistics of a single iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationRecord {
    /// Iteration number, starting from one.
    pub iteration: usize,
    /// Best tour length found so far within the run.
    pub best_distance: Float,
    /// Mean tour length among this iteration's tours.
    pub average_distance: Float,
    /// Maximum tour length among this iteration's tours.
    pub worst_distance: Float,
}

/// A result of the optimizer run.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Best tour found: a closed sequence of location indices.
    pub tour: Vec<usize>,
    /// Best tour length.
    pub length: Float,
    /// Convergence history, one record per iteration.
    pub history: Vec<IterationRecord>,
}
