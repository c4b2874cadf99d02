//! Great-circle distances, used to populate a distance matrix when no road network data exists.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/geo_test.rs"]
mod geo_test;

use crate::utils::{Float, parallel_collect};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: Float = 6371.0;

/// Gets distance in kilometers between two (latitude, longitude) points using haversine formula.
pub fn haversine_distance(from: (Float, Float), to: (Float, Float)) -> Float {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = (d_phi / 2.).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.).sin().powi(2);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Creates a full distance matrix (in kilometers) for given (latitude, longitude) points.
pub fn create_haversine_matrix(coordinates: &[(Float, Float)]) -> Vec<Vec<Float>> {
    parallel_collect(coordinates, |&from| coordinates.iter().map(|&to| haversine_distance(from, to)).collect())
}
