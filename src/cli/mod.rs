//! CLI argument parsing for waypath
//!
//! `waypath [OPTIONS] <INPUT> <OUTPUT>`: the input names the start and goal
//! locations, one per line; the report is written to the output. Either
//! positional may be `-` for the standard stream.

pub mod parse;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use waypath_core::graph::Algorithm;
pub use waypath_core::format::OutputFormat;
use parse::{parse_algorithm, parse_format};

/// Waypath - route search over a city map with BFS, DFS and A*
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File with the start location on line one and the goal on line two ("-" for stdin)
    pub input: PathBuf,

    /// File to write the report to ("-" for stdout)
    pub output: PathBuf,

    /// Location dataset (`name region latitude longitude` per line)
    #[arg(long, env = "WAYPATH_LOCATIONS")]
    pub locations: Option<PathBuf>,

    /// Connection dataset (`name name` per line)
    #[arg(long, env = "WAYPATH_CONNECTIONS")]
    pub connections: Option<PathBuf>,

    /// Explicit config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Algorithm to run; repeat to run several in order (default: bfs, dfs, astar)
    #[arg(long = "algorithm", short, value_parser = parse_algorithm, action = ArgAction::Append)]
    pub algorithms: Vec<Algorithm>,

    /// Output format
    #[arg(long, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// When a search exhausts, report the path to the last vertex it processed
    #[arg(long)]
    pub allow_partial: bool,

    /// Suppress error messages in human mode
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log filter level or directive (e.g. "debug", "waypath_core=trace")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
