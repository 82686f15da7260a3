//! Readers of locations and routing data, and a writer of ranked paths.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use pathga_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A location record as it is stored in input files. Coordinates can be omitted when location is
/// resolved using gazetteer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LocationRecord {
    /// Location id, e.g. postal code.
    pub id: String,
    /// Longitude or x.
    pub x: Option<f64>,
    /// Latitude or y.
    pub y: Option<f64>,
}

impl LocationRecord {
    fn to_location(&self) -> Option<Location> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Location::new(self.id.as_str(), Coordinate::new(x, y))),
            _ => None,
        }
    }
}

/// Reads location records from json array.
pub fn read_json_locations<R: Read>(reader: BufReader<R>) -> Result<Vec<LocationRecord>, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize locations: '{err}'").into())
}

/// Reads location records from csv with `id,x,y` header.
#[cfg(feature = "csv-format")]
pub fn read_csv_locations<R: Read>(reader: BufReader<R>) -> Result<Vec<LocationRecord>, GenericError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<LocationRecord>, _>>()
        .map_err(|err| format!("cannot read csv locations: '{err}'").into())
}

/// Reads gazetteer: json array of location records where every record has coordinates.
pub fn read_gazetteer<R: Read>(reader: BufReader<R>) -> Result<StaticResolver, GenericError> {
    let locations = read_json_locations(reader)?
        .iter()
        .map(|record| {
            record.to_location().ok_or_else(|| format!("no coordinates in gazetteer for '{}'", record.id).into())
        })
        .collect::<Result<Vec<_>, GenericError>>()?;

    Ok(StaticResolver::new(locations))
}

/// Reads routing matrix: json array of `{ "from", "to", "value" }` entries.
pub fn read_routing_matrix<R: Read>(reader: BufReader<R>) -> Result<Vec<CostEntry>, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize routing matrix: '{err}'").into())
}

/// Converts records into locations keeping their order. Coordinates of a record take precedence
/// over gazetteer. Unresolved and repeated ids are logged and excluded.
pub fn resolve_locations(
    records: Vec<LocationRecord>,
    gazetteer: Option<StaticResolver>,
    logger: &InfoLogger,
) -> Result<Vec<Location>, GenericError> {
    let ids = records.iter().map(|record| record.id.clone()).collect::<Vec<_>>();
    let inline = records.iter().filter_map(|record| record.to_location());
    let resolver = RecordResolver { inline: StaticResolver::new(inline), gazetteer: gazetteer.unwrap_or_default() };

    let locations = create_location_set(ids.iter().map(String::as_str), &resolver, logger)?;

    Ok(locations.all().cloned().collect())
}

struct RecordResolver {
    inline: StaticResolver,
    gazetteer: StaticResolver,
}

impl LocationResolver for RecordResolver {
    fn resolve(&self, id: &str) -> Option<Location> {
        self.inline.resolve(id).or_else(|| self.gazetteer.resolve(id))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SolutionOutput {
    paths: Vec<PathOutput>,
    statistics: StatisticsOutput,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PathOutput {
    rank: usize,
    fitness: Fitness,
    ids: Vec<String>,
    indices: Vec<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsOutput {
    generations: usize,
    duration: u128,
    speed: f64,
    service_calls: usize,
    cache_hits: usize,
}

/// Writes ranked paths and run statistics as json. When `top` is set, only that amount of best
/// paths is written.
pub fn write_solution<W: Write>(
    writer: BufWriter<W>,
    locations: &LocationSet,
    solution: &Solution,
    top: Option<usize>,
) -> Result<(), GenericError> {
    let paths = solution
        .paths
        .iter()
        .take(top.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(rank, ranked)| PathOutput {
            rank: rank + 1,
            fitness: ranked.fitness,
            ids: ranked.path.iter().filter_map(|&idx| locations.get(idx)).map(|location| location.id.clone()).collect(),
            indices: ranked.path.indices().to_vec(),
        })
        .collect();

    let metrics = &solution.metrics;
    let output = SolutionOutput {
        paths,
        statistics: StatisticsOutput {
            generations: metrics.generations,
            duration: metrics.duration,
            speed: metrics.speed,
            service_calls: metrics.oracle.service_calls,
            cache_hits: metrics.oracle.cache_hits,
        },
    };

    serde_json::to_writer_pretty(writer, &output).map_err(|err| format!("cannot write solution: '{err}'").into())
}
