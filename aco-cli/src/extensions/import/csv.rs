//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

extern crate csv;

use super::Stop;
use aco_core::prelude::Float;
use serde::Deserialize;
use std::error::Error;
use std::io::{BufReader, Read};

fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> Result<Vec<T>, Box<dyn Error>>
where
    for<'de> T: Deserialize<'de>,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = vec![];

    for entry in reader.deserialize() {
        entries.push(entry?);
    }

    Ok(entries)
}

/// Reads distance matrix rows: one comma separated row per line, no header.
pub fn read_csv_matrix<R: Read>(reader: BufReader<R>) -> Result<Vec<Vec<Float>>, Box<dyn Error>> {
    let mut reader =
        csv::ReaderBuilder::new().has_headers(false).flexible(true).trim(csv::Trim::All).from_reader(reader);

    let mut rows = vec![];
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .map(|value| {
                value.parse::<Float>().map_err(|err| format!("invalid value '{value}' at row {}: {err}", idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(row);
    }

    Ok(rows)
}

/// Reads locations from csv with `name,latitude,longitude` header.
pub fn read_csv_locations<R: Read>(reader: BufReader<R>) -> Result<Vec<Stop>, Box<dyn Error>> {
    let stops = read_csv_entries::<Stop, _>(reader)?;

    if let Some(stop) = stops.iter().find(|stop| !(-90. ..=90.).contains(&stop.latitude)) {
        return Err(format!("invalid latitude of '{}': {}", stop.name, stop.latitude).into());
    }

    if let Some(stop) = stops.iter().find(|stop| !(-180. ..=180.).contains(&stop.longitude)) {
        return Err(format!("invalid longitude of '{}': {}", stop.name, stop.longitude).into());
    }

    Ok(stops)
}
