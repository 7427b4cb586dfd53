use crate::graph::model::{Edge, Graph, Vertex};
use crate::graph::types::VertexId;

/// Trait for providing adjacency and vertex data to the search algorithms
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn get_vertex(&self, id: VertexId) -> Option<&Vertex>;
    /// Incident edges of `id`, in edge-construction order
    fn get_incident_edges(&self, id: VertexId) -> Vec<&Edge>;
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex(id)
    }

    fn get_incident_edges(&self, id: VertexId) -> Vec<&Edge> {
        self.incident_edges(id)
            .iter()
            .filter_map(|edge_id| self.edge(*edge_id))
            .collect()
    }
}
