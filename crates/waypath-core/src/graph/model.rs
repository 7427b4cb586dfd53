//! Immutable graph model: vertices, undirected edges and adjacency

use serde::Serialize;

use crate::error::{Result, WaypathError};
use crate::graph::types::{scaled_distance, EdgeId, VertexId};

/// A named, coordinate-bearing location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    #[serde(skip)]
    pub id: VertexId,
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Vertex {
    pub fn new(
        id: VertexId,
        name: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            region: region.into(),
            latitude,
            longitude,
        }
    }

    /// Straight-line distance to `other`, scaled into edge-weight units.
    /// Defined for any pair, connected or not.
    pub fn distance_to(&self, other: &Vertex) -> f64 {
        scaled_distance(
            (self.latitude, self.longitude),
            (other.latitude, other.longitude),
        )
    }
}

/// An undirected, weighted connection between two distinct vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    a: VertexId,
    b: VertexId,
    weight: f64,
}

impl Edge {
    /// Build an edge; endpoints are stored lower identity first.
    pub fn new(id: EdgeId, a: &Vertex, b: &Vertex) -> Result<Self> {
        let (a_id, b_id) = if a.id < b.id {
            (a.id, b.id)
        } else if b.id < a.id {
            (b.id, a.id)
        } else {
            return Err(WaypathError::SelfLoop {
                name: a.name.clone(),
            });
        };

        Ok(Self {
            id,
            a: a_id,
            b: b_id,
            weight: a.distance_to(b),
        })
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The endpoint that is not `current`. Any identity other than the
    /// first endpoint resolves to the first endpoint.
    pub fn other(&self, current: VertexId) -> VertexId {
        if current == self.a {
            self.b
        } else {
            self.a
        }
    }

    pub fn connects(&self, x: VertexId, y: VertexId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Read-only graph aggregate
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    incident: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Edges touching `id`, in edge-construction order
    pub fn incident_edges(&self, id: VertexId) -> &[EdgeId] {
        self.incident
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First vertex whose name equals `name` (linear scan)
    pub fn find_vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.name == name)
    }
}

/// Incrementally assembles a [`Graph`]; identities follow insertion order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(
        &mut self,
        name: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> VertexId {
        let id = VertexId(self.graph.vertices.len());
        self.graph
            .vertices
            .push(Vertex::new(id, name, region, latitude, longitude));
        self.graph.incident.push(Vec::new());
        id
    }

    /// Connect two existing vertices. Fails on a self-loop or an identity
    /// the builder never issued.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId> {
        let lookup = |id: VertexId| {
            self.graph
                .vertices
                .get(id.index())
                .ok_or_else(|| WaypathError::not_found("vertex", id))
        };
        let id = EdgeId(self.graph.edges.len());
        let edge = Edge::new(id, lookup(a)?, lookup(b)?)?;

        self.graph.incident[a.index()].push(id);
        self.graph.incident[b.index()].push(id);
        self.graph.edges.push(edge);
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertices.len()
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_vertices() -> (GraphBuilder, VertexId, VertexId) {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A", "XX", 0.0, 0.0);
        let b = builder.add_vertex("B", "XX", 3.0, 4.0);
        (builder, a, b)
    }

    #[test]
    fn test_vertex_ids_are_dense() {
        let (mut builder, a, b) = two_vertices();
        let c = builder.add_vertex("C", "XX", 1.0, 1.0);
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
    }

    #[test]
    fn test_edge_weight_is_scaled_distance() {
        let (mut builder, a, b) = two_vertices();
        let id = builder.add_edge(a, b).unwrap();
        let graph = builder.build();
        assert_eq!(graph.edge(id).unwrap().weight(), 500.0);
    }

    #[test]
    fn test_self_loop_rejected() {
        let (mut builder, a, _) = two_vertices();
        let err = builder.add_edge(a, a).unwrap_err();
        assert!(matches!(err, WaypathError::SelfLoop { ref name } if name == "A"));
        assert_eq!(builder.build().edge_count(), 0);
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let (mut builder, a, _) = two_vertices();
        let err = builder.add_edge(a, VertexId(9)).unwrap_err();
        assert!(matches!(err, WaypathError::NotFound { .. }));
    }

    #[test]
    fn test_endpoints_normalized_and_other() {
        let (mut builder, a, b) = two_vertices();
        let id = builder.add_edge(b, a).unwrap();
        let graph = builder.build();
        let edge = graph.edge(id).unwrap();

        assert_eq!(edge.endpoints(), (a, b));
        assert_eq!(edge.other(a), b);
        assert_eq!(edge.other(b), a);
        assert!(edge.connects(b, a));
    }

    #[test]
    fn test_incident_edges_in_construction_order() {
        let mut builder = GraphBuilder::new();
        let hub = builder.add_vertex("Hub", "XX", 0.0, 0.0);
        let z = builder.add_vertex("Z", "XX", 1.0, 0.0);
        let y = builder.add_vertex("Y", "XX", 0.0, 1.0);
        let e1 = builder.add_edge(hub, z).unwrap();
        let e2 = builder.add_edge(y, hub).unwrap();
        let graph = builder.build();

        assert_eq!(graph.incident_edges(hub), &[e1, e2]);
        assert_eq!(graph.incident_edges(y), &[e2]);
        assert!(graph.incident_edges(VertexId(42)).is_empty());
    }

    #[test]
    fn test_find_vertex_first_match() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex("Springfield", "IL", 39.8, -89.6);
        builder.add_vertex("Springfield", "MA", 42.1, -72.6);
        let graph = builder.build();

        let found = graph.find_vertex("Springfield").unwrap();
        assert_eq!(found.region, "IL");
        assert!(graph.find_vertex("Shelbyville").is_none());
    }
}
