//! Graph model and path-finding operations
//!
//! Provides the route-search core:
//! - Immutable vertex/edge model with adjacency lookup
//! - BFS, DFS and A* traversals over a pluggable graph provider
//! - Result assembly and a name-based query facade

pub mod algos;
pub mod model;
pub mod outcome;
pub mod query;
pub mod traversal;
pub mod types;

pub use algos::{astar_search, bfs_search, dfs_search, Traversal};
pub use model::{Edge, Graph, GraphBuilder, Vertex};
pub use outcome::{path_distance, round_half_up, OutcomeStatus, SearchOutcome};
pub use query::RouteFinder;
pub use traversal::GraphProvider;
pub use types::{
    scaled_distance, Algorithm, EdgeId, ExhaustedPolicy, SearchOptions, VertexId, DISTANCE_SCALE,
};
