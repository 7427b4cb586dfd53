//! Result assembly: turns a vertex path into a titled search outcome

use serde::Serialize;

use crate::graph::model::Vertex;
use crate::graph::types::Algorithm;

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutcomeStatus {
    /// The goal was reached
    Found,
    /// The frontier emptied without reaching the goal
    NoPath,
    /// The frontier emptied; the path ends at the last processed vertex
    Partial,
}

impl OutcomeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeStatus::Found => "found",
            OutcomeStatus::NoPath => "no-path",
            OutcomeStatus::Partial => "partial",
        }
    }
}

/// Titled result of one traversal. Distance is kept unrounded; rounding
/// happens only when it is read through [`SearchOutcome::total_distance`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'g> {
    title: String,
    algorithm: Algorithm,
    status: OutcomeStatus,
    path: Vec<&'g Vertex>,
    hops: usize,
    distance: f64,
}

impl<'g> SearchOutcome<'g> {
    /// Wrap a path, computing hop count and distance from it
    pub fn assemble(
        title: impl Into<String>,
        algorithm: Algorithm,
        status: OutcomeStatus,
        path: Vec<&'g Vertex>,
    ) -> Self {
        let hops = path.len().saturating_sub(1);
        let distance = path_distance(&path);
        Self {
            title: title.into(),
            algorithm,
            status,
            path,
            hops,
            distance,
        }
    }

    /// Explicit "no path" outcome: empty path, zero hops, zero distance
    pub fn no_path(title: impl Into<String>, algorithm: Algorithm) -> Self {
        Self::assemble(title, algorithm, OutcomeStatus::NoPath, Vec::new())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    pub fn is_found(&self) -> bool {
        self.status == OutcomeStatus::Found
    }

    pub fn path(&self) -> &[&'g Vertex] {
        &self.path
    }

    pub fn path_names(&self) -> Vec<&'g str> {
        self.path.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn hops(&self) -> usize {
        self.hops
    }

    /// Unrounded distance along the path
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Distance rounded half-up to the nearest integer
    pub fn total_distance(&self) -> u64 {
        round_half_up(self.distance)
    }
}

/// Sum of scaled straight-line distances between consecutive vertices,
/// computed from coordinates rather than stored edge weights.
pub fn path_distance(path: &[&Vertex]) -> f64 {
    path.windows(2).map(|pair| pair[0].distance_to(pair[1])).sum()
}

/// Round half-up; distances are never negative
pub fn round_half_up(value: f64) -> u64 {
    (value + 0.5).floor().max(0.0) as u64
}
