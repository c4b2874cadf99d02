/// Alias to a scalar floating type used for distances, pheromone levels and statistics.
pub type Float = f64;
