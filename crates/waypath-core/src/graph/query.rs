//! Name-based lookup and search dispatch over a loaded graph

use crate::error::{Result, WaypathError};
use crate::graph::algos::{astar_search, bfs_search, dfs_search, Traversal};
use crate::graph::model::{Graph, Vertex};
use crate::graph::outcome::{OutcomeStatus, SearchOutcome};
use crate::graph::types::{Algorithm, ExhaustedPolicy, SearchOptions, VertexId};

/// Facade over a [`Graph`]: resolves location names and runs searches
#[derive(Debug, Clone, Copy)]
pub struct RouteFinder<'g> {
    graph: &'g Graph,
    options: SearchOptions,
}

impl<'g> RouteFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn vertex_exists(&self, name: &str) -> bool {
        self.graph.find_vertex(name).is_some()
    }

    pub fn vertex_for_name(&self, name: &str) -> Option<&'g Vertex> {
        self.graph.find_vertex(name)
    }

    /// Like [`Self::vertex_for_name`], but an unknown name is an error
    pub fn resolve(&self, name: &str) -> Result<&'g Vertex> {
        self.vertex_for_name(name)
            .ok_or_else(|| WaypathError::unknown_location(name))
    }

    pub fn bfs(&self, start: &Vertex, goal: &Vertex) -> SearchOutcome<'g> {
        self.search(Algorithm::Bfs, start, goal)
    }

    pub fn dfs(&self, start: &Vertex, goal: &Vertex) -> SearchOutcome<'g> {
        self.search(Algorithm::Dfs, start, goal)
    }

    pub fn a_star(&self, start: &Vertex, goal: &Vertex) -> SearchOutcome<'g> {
        self.search(Algorithm::AStar, start, goal)
    }

    /// Run `algorithm` and assemble its outcome under the configured policy
    pub fn search(&self, algorithm: Algorithm, start: &Vertex, goal: &Vertex) -> SearchOutcome<'g> {
        let traversal = match algorithm {
            Algorithm::Bfs => bfs_search(self.graph, start.id, goal.id),
            Algorithm::Dfs => dfs_search(self.graph, start.id, goal.id),
            Algorithm::AStar => astar_search(self.graph, start.id, goal.id),
        };

        let outcome = self.assemble(algorithm, traversal);
        tracing::debug!(
            algorithm = %algorithm,
            status = outcome.status().as_str(),
            hops = outcome.hops(),
            distance = outcome.distance(),
            "search complete"
        );
        outcome
    }

    /// Run every algorithm in `algorithms`, in order
    pub fn search_all(
        &self,
        algorithms: &[Algorithm],
        start: &Vertex,
        goal: &Vertex,
    ) -> Vec<SearchOutcome<'g>> {
        algorithms
            .iter()
            .map(|algorithm| self.search(*algorithm, start, goal))
            .collect()
    }

    fn assemble(&self, algorithm: Algorithm, traversal: Traversal) -> SearchOutcome<'g> {
        let title = algorithm.title();
        match traversal {
            Traversal::Found { path, .. } => {
                SearchOutcome::assemble(title, algorithm, OutcomeStatus::Found, self.vertices(&path))
            }
            Traversal::Exhausted { last, .. } => match self.options.on_exhausted {
                ExhaustedPolicy::NoPath => SearchOutcome::no_path(title, algorithm),
                ExhaustedPolicy::LastExpanded => SearchOutcome::assemble(
                    title,
                    algorithm,
                    OutcomeStatus::Partial,
                    self.vertices(&last),
                ),
            },
        }
    }

    fn vertices(&self, ids: &[VertexId]) -> Vec<&'g Vertex> {
        ids.iter().filter_map(|id| self.graph.vertex(*id)).collect()
    }
}
