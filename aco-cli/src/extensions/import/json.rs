//! Import from a json array of arrays logic.

use aco_core::prelude::Float;
use std::error::Error;
use std::io::{BufReader, Read};

/// Reads distance matrix rows from a json array of arrays.
pub fn read_json_matrix<R: Read>(reader: BufReader<R>) -> Result<Vec<Vec<Float>>, Box<dyn Error>> {
    serde_json::from_reader(reader).map_err(|err| err.into())
}
