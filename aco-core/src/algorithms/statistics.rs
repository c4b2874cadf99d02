//! Basic statistics over tour lengths.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/statistics_test.rs"]
mod statistics_test;

use crate::utils::Float;

/// Gets mean of values using given iterator, zero when there are no values.
///
/// The mean is accumulated incrementally, so large finite values never overflow to infinity.
/// Values are expected to be non-negative: any infinite value makes the mean infinite.
pub fn get_mean_iter<Iter>(values: Iter) -> Float
where
    Iter: Iterator<Item = Float>,
{
    values.enumerate().fold(0., |mean, (idx, value)| {
        if mean.is_finite() && value.is_finite() { mean + (value - mean) / (idx + 1) as Float } else { mean + value }
    })
}
