//! Route search command
//!
//! Reads the start and goal names, loads the graph, runs each configured
//! algorithm in order and writes one report section per algorithm.

pub mod format;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use waypath_core::bail_usage;
use waypath_core::config::Config;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::RouteFinder;
use waypath_core::load::load_graph;

use self::format::{output_human, output_json};

const STDIO: &str = "-";

/// Start and goal location names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub start: String,
    pub goal: String,
}

/// Execute the search command
pub fn execute(cli: &Cli, config: &Config, start: Instant) -> Result<()> {
    let endpoints = parse_endpoints(&read_input(&cli.input)?)?;
    debug!(start = %endpoints.start, goal = %endpoints.goal, "read_input");

    let graph = load_graph(&config.locations, &config.connections)?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed = ?start.elapsed(),
        "load_graph"
    );

    let finder = RouteFinder::new(&graph).with_options(config.search_options());
    let from = finder.resolve(&endpoints.start)?;
    let to = finder.resolve(&endpoints.goal)?;

    let outcomes = finder.search_all(&config.algorithms, from, to);
    debug!(count = outcomes.len(), elapsed = ?start.elapsed(), "search");

    let mut out = open_output(&cli.output)?;
    match cli.format {
        OutputFormat::Human => output_human(&mut out, &outcomes)?,
        OutputFormat::Json => output_json(&mut out, &endpoints, &outcomes)?,
    }
    out.flush()?;
    Ok(())
}

/// First line names the start, second the goal; both trimmed
pub fn parse_endpoints(text: &str) -> Result<Endpoints> {
    let mut lines = text.lines().map(str::trim);
    let start = lines.next().unwrap_or_default();
    let goal = lines.next().unwrap_or_default();

    if start.is_empty() {
        bail_usage!("input must name a start location on its first line");
    }
    if goal.is_empty() {
        bail_usage!("input must name a goal location on its second line");
    }

    Ok(Endpoints {
        start: start.to_string(),
        goal: goal.to_string(),
    })
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIO) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| WaypathError::io_operation("read", path.display(), e))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new(STDIO) {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file =
        File::create(path).map_err(|e| WaypathError::io_operation("create", path.display(), e))?;
    Ok(Box::new(BufWriter::new(file)))
}
