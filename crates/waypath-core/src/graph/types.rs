use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WaypathError;

/// Factor applied to raw coordinate distance; edge weights, heuristic
/// estimates and reported distances all share this unit.
pub const DISTANCE_SCALE: f64 = 100.0;

/// Dense, zero-based vertex identity (position in insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense, zero-based edge identity (position in construction order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Scaled straight-line distance between two coordinate pairs
pub fn scaled_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let d_lat = a.0 - b.0;
    let d_lon = a.1 - b.1;
    (d_lat * d_lat + d_lon * d_lon).sqrt() * DISTANCE_SCALE
}

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "bfs")]
    Bfs,
    #[serde(rename = "dfs")]
    Dfs,
    #[serde(rename = "astar", alias = "a-star", alias = "a*")]
    AStar,
}

impl Algorithm {
    /// Every algorithm, in the default report order
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    /// Report title for this algorithm's outcome
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-First Search Results",
            Algorithm::Dfs => "Depth-First Search Results",
            Algorithm::AStar => "A* Search Results",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "astar" | "a-star" | "a*" => Ok(Algorithm::AStar),
            other => Err(WaypathError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// What a search reports when its frontier empties before reaching the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExhaustedPolicy {
    /// Report an explicit "no path" outcome
    #[default]
    NoPath,
    /// Report the path to the last node the search processed
    LastExpanded,
}

/// Options shared by every search run through the facade
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub on_exhausted: ExhaustedPolicy,
}
