//! Small graph fixtures shared by the algorithm tests

use crate::graph::model::{Graph, GraphBuilder};
use crate::graph::types::VertexId;

/// Build a graph from `(name, latitude, longitude)` vertices and
/// `(name, name)` edges, both applied in the order given.
pub fn build(vertices: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> Graph {
    let mut builder = GraphBuilder::new();
    let mut by_name = std::collections::HashMap::new();
    for (name, lat, lon) in vertices {
        let id = builder.add_vertex(*name, "XX", *lat, *lon);
        by_name.insert(*name, id);
    }
    for (a, b) in edges {
        builder.add_edge(by_name[a], by_name[b]).unwrap();
    }
    builder.build()
}

pub fn ids(graph: &Graph, names: &[&str]) -> Vec<VertexId> {
    names
        .iter()
        .map(|name| graph.find_vertex(name).unwrap().id)
        .collect()
}

pub fn id(graph: &Graph, name: &str) -> VertexId {
    graph.find_vertex(name).unwrap().id
}

pub fn names<'g>(graph: &'g Graph, path: &[VertexId]) -> Vec<&'g str> {
    path.iter()
        .map(|id| graph.vertex(*id).unwrap().name.as_str())
        .collect()
}

/// `A(0,0) - B(0,1) - C(1,1) - D(2,2)` chain plus an isolated `E(5,5)`
pub fn chain() -> Graph {
    build(
        &[
            ("A", 0.0, 0.0),
            ("B", 0.0, 1.0),
            ("C", 1.0, 1.0),
            ("D", 2.0, 2.0),
            ("E", 5.0, 5.0),
        ],
        &[("A", "B"), ("B", "C"), ("C", "D")],
    )
}

/// Two equal-hop routes `A-B-D` and `A-C-D`; the `A-C` edge is built first
/// so adjacency order alone would favour `C`.
pub fn diamond() -> Graph {
    build(
        &[
            ("A", 0.0, 0.0),
            ("B", 1.0, 1.0),
            ("C", 1.0, -1.0),
            ("D", 2.0, 0.0),
        ],
        &[("A", "C"), ("A", "B"), ("C", "D"), ("B", "D")],
    )
}

/// A short-but-costly route `A-Z-G` and a longer-but-cheaper `A-B-C-G`
pub fn detour() -> Graph {
    build(
        &[
            ("A", 0.0, 0.0),
            ("B", 0.0, 1.0),
            ("C", 2.0, 1.0),
            ("G", 2.0, 0.0),
            ("Z", 1.0, -3.0),
        ],
        &[("A", "B"), ("B", "C"), ("C", "G"), ("A", "Z"), ("Z", "G")],
    )
}
