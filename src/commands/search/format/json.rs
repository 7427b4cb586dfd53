//! JSON output formatting for search reports

use std::io::Write;

use serde::Serialize;

use crate::commands::search::Endpoints;
use waypath_core::error::Result;
use waypath_core::graph::{Algorithm, OutcomeStatus, SearchOutcome};

#[derive(Debug, Serialize)]
struct Report<'a> {
    start: &'a str,
    goal: &'a str,
    results: Vec<ResultEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ResultEntry<'a> {
    algorithm: Algorithm,
    title: &'a str,
    status: OutcomeStatus,
    path: Vec<&'a str>,
    hops: usize,
    distance: u64,
}

impl<'a, 'g: 'a> From<&'a SearchOutcome<'g>> for ResultEntry<'a> {
    fn from(outcome: &'a SearchOutcome<'g>) -> Self {
        Self {
            algorithm: outcome.algorithm(),
            title: outcome.title(),
            status: outcome.status(),
            path: outcome.path_names(),
            hops: outcome.hops(),
            distance: outcome.total_distance(),
        }
    }
}

/// Output in JSON format
pub fn output_json(
    out: &mut dyn Write,
    endpoints: &Endpoints,
    outcomes: &[SearchOutcome<'_>],
) -> Result<()> {
    let report = Report {
        start: &endpoints.start,
        goal: &endpoints.goal,
        results: outcomes.iter().map(ResultEntry::from).collect(),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
