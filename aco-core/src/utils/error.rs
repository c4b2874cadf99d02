#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for GenericError {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<InvalidParameterError> for GenericError {
    fn from(value: InvalidParameterError) -> Self {
        Self(value.to_string())
    }
}

/// Describes why optimizer input was rejected at construction time.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidParameterError {
    /// Distance matrix has less than two locations.
    TooFewLocations(usize),

    /// Distance matrix row has a different length than the amount of rows.
    NonSquareMatrix {
        /// Index of the offending row.
        row: usize,
        /// Expected row length.
        expected: usize,
        /// Actual row length.
        actual: usize,
    },

    /// Distance matrix contains a negative or NaN entry.
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// The value found.
        value: Float,
    },

    /// Amount of ants is less than one.
    AntCount(usize),

    /// Evaporation rate is outside of the open (0, 1) interval.
    EvaporationRate(Float),

    /// Pheromone or heuristic exponent is negative or not finite.
    Exponent {
        /// Parameter name.
        name: &'static str,
        /// The value found.
        value: Float,
    },

    /// Deposit constant is not a positive finite number.
    DepositConstant(Float),
}

impl Display for InvalidParameterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewLocations(size) => write!(f, "distance matrix should have at least 2 locations, got {size}"),
            Self::NonSquareMatrix { row, expected, actual } => {
                write!(f, "non-square distance matrix: row {row} has {actual} items, expected {expected}")
            }
            Self::InvalidDistance { from, to, value } => {
                write!(f, "invalid distance from {from} to {to}: '{value}', expected non-negative value")
            }
            Self::AntCount(count) => write!(f, "ant count should be at least 1, got {count}"),
            Self::EvaporationRate(rho) => write!(f, "evaporation rate should be in (0, 1) range, got {rho}"),
            Self::Exponent { name, value } => {
                write!(f, "{name} should be a non-negative finite number, got {value}")
            }
            Self::DepositConstant(q) => write!(f, "deposit constant should be a positive finite number, got {q}"),
        }
    }
}

impl std::error::Error for InvalidParameterError {}
