//! Import command helpers

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

mod csv;
pub use self::csv::*;

mod json;
pub use self::json::*;

use aco_core::prelude::{Float, GenericError, create_haversine_matrix};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A named location with geographic coordinates.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Stop {
    /// Location name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: Float,
    /// Longitude in degrees.
    pub longitude: Float,
}

/// An imported problem: a distance matrix and, optionally, locations it was built from.
#[derive(Clone, Debug)]
pub struct ProblemInput {
    /// Distance matrix rows.
    pub distances: Vec<Vec<Float>>,
    /// Locations in matrix order, if known.
    pub stops: Option<Vec<Stop>>,
}

impl ProblemInput {
    /// Creates a problem input from locations using great-circle distances.
    pub fn from_stops(stops: Vec<Stop>) -> Self {
        let coordinates = stops.iter().map(|stop| (stop.latitude, stop.longitude)).collect::<Vec<_>>();

        Self { distances: create_haversine_matrix(coordinates.as_slice()), stops: Some(stops) }
    }
}

/// Imports problem from specific format.
pub fn import_problem<R: Read>(input_format: &str, reader: BufReader<R>) -> Result<ProblemInput, GenericError> {
    match input_format {
        "csv" => read_csv_matrix(reader)
            .map(|distances| ProblemInput { distances, stops: None })
            .map_err(|err| format!("cannot read csv matrix: {err}").into()),
        "json" | "literal" => read_json_matrix(reader)
            .map(|distances| ProblemInput { distances, stops: None })
            .map_err(|err| format!("cannot read json matrix: {err}").into()),
        "locations" => read_csv_locations(reader)
            .map(ProblemInput::from_stops)
            .map_err(|err| format!("cannot read locations: {err}").into()),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
