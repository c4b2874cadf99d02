#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{Float, InvalidParameterError};

/// A dense square matrix of travel costs between locations, stored as a flattened row-major vector.
///
/// The matrix is owned by the optimizer and never changes during a run. Its diagonal is always
/// forced to [`DistanceMatrix::DIAGONAL`] so that inverse distance weighting never divides by zero.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// A value which replaces every diagonal entry.
    pub const DIAGONAL: Float = 1E-10;

    /// Creates a distance matrix copying given rows.
    pub fn new(rows: &[Vec<Float>]) -> Result<Self, InvalidParameterError> {
        let size = rows.len();
        if size < 2 {
            return Err(InvalidParameterError::TooFewLocations(size));
        }

        if let Some((row, values)) = rows.iter().enumerate().find(|(_, values)| values.len() != size) {
            return Err(InvalidParameterError::NonSquareMatrix { row, expected: size, actual: values.len() });
        }

        Self::from_flatten(rows.iter().flat_map(|row| row.iter().cloned()).collect())
    }

    /// Creates a distance matrix from flattened row-major values.
    pub fn from_flatten(values: Vec<Float>) -> Result<Self, InvalidParameterError> {
        let size = (values.len() as Float).sqrt() as usize;

        if size * size != values.len() {
            return Err(InvalidParameterError::NonSquareMatrix { row: 0, expected: size, actual: values.len() });
        }

        if size < 2 {
            return Err(InvalidParameterError::TooFewLocations(size));
        }

        let mut matrix = Self { size, values };

        for from in 0..size {
            for to in 0..size {
                let idx = from * size + to;
                if from == to {
                    matrix.values[idx] = Self::DIAGONAL;
                } else {
                    let value = matrix.values[idx];
                    if value.is_nan() || value < 0. {
                        return Err(InvalidParameterError::InvalidDistance { from, to, value });
                    }
                }
            }
        }

        Ok(matrix)
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns travel cost from one location to another.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }

    /// Returns all travel costs from the given location.
    pub fn row(&self, from: usize) -> &[Float] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    /// Returns flattened values.
    pub fn values(&self) -> &[Float] {
        self.values.as_slice()
    }

    /// Sums travel costs of consecutive edges. A closed tour includes its closing edge as
    /// the last pair of the sequence.
    pub fn tour_length(&self, nodes: &[usize]) -> Float {
        nodes.windows(2).map(|edge| self.distance(edge[0], edge[1])).sum()
    }
}

/// A dense square matrix of pheromone levels per directed edge.
///
/// Entries are finite and non-negative as long as they are changed only by evaporation
/// with a factor in [0, 1) and by deposits of finite positive amounts.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    values: Vec<Float>,
}

impl PheromoneMatrix {
    /// An initial pheromone level of every edge.
    pub const INITIAL: Float = 0.1;

    /// Creates a pheromone matrix filled with [`PheromoneMatrix::INITIAL`] value.
    pub fn new(size: usize) -> Self {
        Self::with_value(size, Self::INITIAL)
    }

    /// Creates a pheromone matrix filled with given value.
    pub fn with_value(size: usize, value: Float) -> Self {
        Self { size, values: vec![value; size * size] }
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns pheromone level of the edge.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }

    /// Returns pheromone levels of all edges starting at the given location.
    pub fn row(&self, from: usize) -> &[Float] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    /// Returns flattened values.
    pub fn values(&self) -> &[Float] {
        self.values.as_slice()
    }

    /// Multiplies every entry by the factor.
    pub fn scale(&mut self, factor: Float) {
        self.values.iter_mut().for_each(|value| *value *= factor);
    }

    /// Adds the amount to the edge in both directions. Levels saturate at `Float::MAX`.
    pub fn deposit(&mut self, a: usize, b: usize, amount: Float) {
        for idx in [a * self.size + b, b * self.size + a] {
            self.values[idx] = (self.values[idx] + amount).min(Float::MAX);
        }
    }

    /// Checks that every entry is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.values.iter().all(|value| value.is_finite() && *value >= 0.)
    }
}

/// Gathers entries of the row at given column indices.
pub fn select(row: &[Float], indices: &[usize]) -> Vec<Float> {
    indices.iter().map(|&idx| row[idx]).collect()
}
