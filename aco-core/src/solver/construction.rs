#[cfg(test)]
#[path = "../../tests/unit/solver/construction_test.rs"]
mod construction_test;

use super::{SelectionContext, select_next_node};
use crate::models::Tour;
use crate::utils::Random;

/// A tour built by a single ant.
#[derive(Clone, Debug)]
pub struct ConstructedTour {
    /// The closed tour.
    pub tour: Tour,
    /// Amount of steps chosen by the degenerate uniform fallback.
    pub fallbacks: usize,
}

/// Builds a closed tour for one ant: starts at a uniformly random location, repeatedly moves to
/// the next selected location until no candidate is left and returns to the start.
pub fn construct_tour<R: Random + ?Sized>(ctx: &SelectionContext, random: &mut R) -> ConstructedTour {
    let size = ctx.distances.size();
    let start = random.uniform_index(size);

    let mut nodes = Vec::with_capacity(size + 1);
    let mut visited = vec![false; size];
    let mut fallbacks = 0;

    nodes.push(start);
    visited[start] = true;

    let mut current = start;
    while nodes.len() < size {
        let Some(selection) = select_next_node(ctx, current, visited.as_slice(), random) else {
            break;
        };

        current = selection.node();
        fallbacks += selection.is_fallback() as usize;

        nodes.push(current);
        visited[current] = true;
    }

    nodes.push(start);

    ConstructedTour { tour: Tour::new(nodes, ctx.distances), fallbacks }
}
