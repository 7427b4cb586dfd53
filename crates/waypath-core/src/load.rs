//! Dataset loading: location and connection files into a [`Graph`]
//!
//! Both datasets are whitespace-separated, one record per line. Lines with
//! at most one token are skipped.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::bail_record;
use crate::error::{Result, WaypathError};
use crate::graph::{Graph, GraphBuilder};
use crate::trace_time;

const LOCATIONS: &str = "locations";

/// One parsed line of the location dataset
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One parsed line of the connection dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
}

/// Non-skipped lines with their 1-based line numbers
fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| tokens.len() > 1)
}

fn parse_coordinate(dataset: &str, line: usize, field: &str, raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => bail_record!(dataset, line, format!("{field} is not a number: {raw}")),
    }
}

pub fn parse_locations(text: &str) -> Result<Vec<LocationRecord>> {
    let mut parsed = Vec::new();
    for (line, tokens) in records(text) {
        let [name, region, latitude, longitude, ..] = tokens[..] else {
            bail_record!(
                LOCATIONS,
                line,
                format!("expected 4 fields, found {}", tokens.len())
            );
        };
        parsed.push(LocationRecord {
            name: name.to_string(),
            region: region.to_string(),
            latitude: parse_coordinate(LOCATIONS, line, "latitude", latitude)?,
            longitude: parse_coordinate(LOCATIONS, line, "longitude", longitude)?,
        });
    }
    Ok(parsed)
}

pub fn parse_connections(text: &str) -> Result<Vec<ConnectionRecord>> {
    Ok(records(text)
        .map(|(_, tokens)| ConnectionRecord {
            from: tokens[0].to_string(),
            to: tokens[1].to_string(),
        })
        .collect())
}

/// Assemble a graph from parsed records. A repeated location name keeps its
/// first identity for connection lookup, matching [`Graph::find_vertex`].
pub fn build_graph(locations: &[LocationRecord], connections: &[ConnectionRecord]) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    let mut by_name = HashMap::with_capacity(locations.len());

    for record in locations {
        let id = builder.add_vertex(
            record.name.as_str(),
            record.region.as_str(),
            record.latitude,
            record.longitude,
        );
        match by_name.entry(record.name.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
            Entry::Occupied(_) => {
                tracing::warn!(name = %record.name, "duplicate location name; keeping the first");
            }
        }
    }

    for connection in connections {
        let lookup = |name: &str| {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| WaypathError::unknown_location(name))
        };
        builder.add_edge(lookup(&connection.from)?, lookup(&connection.to)?)?;
    }

    let graph = builder.build();
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    Ok(graph)
}

/// Parse both datasets from text and build the graph
pub fn parse_graph(locations: &str, connections: &str) -> Result<Graph> {
    build_graph(&parse_locations(locations)?, &parse_connections(connections)?)
}

/// Read both dataset files and build the graph
#[tracing::instrument(skip_all, fields(locations = %locations.display(), connections = %connections.display()))]
pub fn load_graph(locations: &Path, connections: &Path) -> Result<Graph> {
    let start = Instant::now();
    let read = |path: &Path| {
        fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read", path.display(), e))
    };

    let graph = parse_graph(&read(locations)?, &read(connections)?)?;
    trace_time!(start, "load_graph");
    Ok(graph)
}
