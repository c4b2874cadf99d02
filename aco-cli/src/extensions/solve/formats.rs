//! Writers of optimizer results.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

extern crate csv;

use crate::extensions::import::Stop;
use aco_core::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SolutionOutput<'a> {
    tour: &'a [usize],
    length: Float,
    history: Vec<HistoryOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stops: Option<Vec<&'a str>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryOutput {
    iteration: usize,
    best_distance: Float,
    average_distance: Float,
    worst_distance: Float,
}

impl From<&IterationRecord> for HistoryOutput {
    fn from(record: &IterationRecord) -> Self {
        Self {
            iteration: record.iteration,
            best_distance: record.best_distance,
            average_distance: record.average_distance,
            worst_distance: record.worst_distance,
        }
    }
}

#[derive(Serialize)]
struct RouteRecord<'a> {
    order: usize,
    node: usize,
    name: Option<&'a str>,
    latitude: Option<Float>,
    longitude: Option<Float>,
    distance_to_next: Float,
}

/// Writes solution as json. When locations are known, their names are listed in tour order.
/// A non finite length is written as `null`.
pub fn write_solution_json<W: Write>(
    writer: BufWriter<W>,
    solution: &Solution,
    stops: Option<&[Stop]>,
) -> Result<(), GenericError> {
    let stops = stops
        .map(|stops| {
            solution
                .tour
                .iter()
                .map(|&node| {
                    stops
                        .get(node)
                        .map(|stop| stop.name.as_str())
                        .ok_or_else(|| GenericError::from(format!("no location for node {node}")))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    let output = SolutionOutput {
        tour: solution.tour.as_slice(),
        length: solution.length,
        history: solution
            .history
            .iter()
            .map(HistoryOutput::from)
            .collect(),
        stops,
    };

    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, &output).map_err(|err| format!("cannot write solution: '{err}'"))?;
    writer.flush().map_err(GenericError::from)
}

/// Writes convergence history as csv, one row per iteration.
pub fn write_history_csv<W: Write>(writer: BufWriter<W>, history: &[IterationRecord]) -> Result<(), GenericError> {
    let mut writer = csv::Writer::from_writer(writer);
    let to_error = |err: csv::Error| GenericError::from(format!("cannot write history: '{err}'"));

    writer.write_record(["iteration", "best_distance", "average_distance", "worst_distance"]).map_err(to_error)?;
    history.iter().try_for_each(|record| {
        writer
            .serialize((record.iteration, record.best_distance, record.average_distance, record.worst_distance))
            .map_err(to_error)
    })?;

    writer.flush().map_err(GenericError::from)
}

/// Writes route details as csv: visiting order, location and distance to the next one. The last
/// row's distance is the closing edge back to the start.
pub fn write_route_csv<W: Write>(
    writer: BufWriter<W>,
    solution: &Solution,
    distances: &DistanceMatrix,
    stops: Option<&[Stop]>,
) -> Result<(), GenericError> {
    let mut writer = csv::Writer::from_writer(writer);

    solution.tour.windows(2).enumerate().try_for_each(|(idx, edge)| {
        let (node, next) = (edge[0], edge[1]);
        if node >= distances.size() || next >= distances.size() {
            return Err(GenericError::from(format!("node {} is out of matrix range", node.max(next))));
        }

        let stop = stops.and_then(|stops| stops.get(node));
        writer
            .serialize(RouteRecord {
                order: idx + 1,
                node,
                name: stop.map(|stop| stop.name.as_str()),
                latitude: stop.map(|stop| stop.latitude),
                longitude: stop.map(|stop| stop.longitude),
                distance_to_next: distances.distance(node, next),
            })
            .map_err(|err| GenericError::from(format!("cannot write route: '{err}'")))
    })?;

    writer.flush().map_err(GenericError::from)
}
