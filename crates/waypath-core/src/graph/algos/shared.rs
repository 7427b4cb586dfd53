use std::cmp::Ordering;

use crate::graph::traversal::GraphProvider;
use crate::graph::types::VertexId;

/// Handle to a node in a [`PathArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle(usize);

#[derive(Debug, Clone)]
struct PathNode {
    parent: Option<NodeHandle>,
    vertex: VertexId,
    g: f64,
    h: f64,
}

/// Arena of parent-linked partial paths. Nodes are never removed, so a
/// handle stays valid for the arena's lifetime.
#[derive(Debug, Default)]
pub struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parentless node for the search's start vertex
    pub fn root(&mut self, vertex: VertexId) -> NodeHandle {
        self.push(None, vertex, 0.0, 0.0)
    }

    pub fn child(&mut self, parent: NodeHandle, vertex: VertexId) -> NodeHandle {
        self.push(Some(parent), vertex, 0.0, 0.0)
    }

    pub fn root_with_cost(&mut self, vertex: VertexId, h: f64) -> NodeHandle {
        self.push(None, vertex, 0.0, h)
    }

    pub fn child_with_cost(
        &mut self,
        parent: NodeHandle,
        vertex: VertexId,
        g: f64,
        h: f64,
    ) -> NodeHandle {
        self.push(Some(parent), vertex, g, h)
    }

    fn push(&mut self, parent: Option<NodeHandle>, vertex: VertexId, g: f64, h: f64) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(PathNode {
            parent,
            vertex,
            g,
            h,
        });
        handle
    }

    pub fn vertex(&self, node: NodeHandle) -> VertexId {
        self.nodes[node.0].vertex
    }

    pub fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.nodes[node.0].parent
    }

    /// Accumulated cost from the root
    pub fn g(&self, node: NodeHandle) -> f64 {
        self.nodes[node.0].g
    }

    /// Estimated total cost `g + h`
    pub fn f(&self, node: NodeHandle) -> f64 {
        let n = &self.nodes[node.0];
        n.g + n.h
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Vertices from the root down to `node`, root first
    pub fn path_to(&self, node: NodeHandle) -> Vec<VertexId> {
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(handle) = current {
            path.push(self.vertex(handle));
            current = self.parent(handle);
        }
        path.reverse();
        path
    }
}

/// Fixed-size membership set over dense vertex identities
#[derive(Debug, Clone)]
pub struct VertexSet {
    members: Vec<bool>,
}

impl VertexSet {
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            members: vec![false; vertex_count],
        }
    }

    /// Returns true if `id` was not already a member
    pub fn insert(&mut self, id: VertexId) -> bool {
        match self.members.get_mut(id.index()) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: VertexId) {
        if let Some(slot) = self.members.get_mut(id.index()) {
            *slot = false;
        }
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.members.get(id.index()).copied().unwrap_or(false)
    }
}

/// Outcome of a single traversal, before result assembly
#[derive(Debug, Clone, PartialEq)]
pub enum Traversal {
    /// Goal reached; path runs start to goal inclusive
    Found { path: Vec<VertexId>, expanded: usize },
    /// Frontier emptied; `last` is the path to the last processed node
    Exhausted { last: Vec<VertexId>, expanded: usize },
}

impl Traversal {
    pub fn is_found(&self) -> bool {
        matches!(self, Traversal::Found { .. })
    }

    pub fn expanded(&self) -> usize {
        match self {
            Traversal::Found { expanded, .. } | Traversal::Exhausted { expanded, .. } => *expanded,
        }
    }

    pub fn path(&self) -> &[VertexId] {
        match self {
            Traversal::Found { path, .. } => path,
            Traversal::Exhausted { last, .. } => last,
        }
    }
}

/// Direction of a by-name sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    Ascending,
    Descending,
}

/// Name of `id`, or the empty string for an identity the provider lacks
pub fn name_of(provider: &dyn GraphProvider, id: VertexId) -> &str {
    provider.get_vertex(id).map_or("", |v| v.name.as_str())
}

/// Stable sort of vertex identities by vertex name
pub fn sort_by_name(provider: &dyn GraphProvider, ids: &mut [VertexId], order: NameOrder) {
    ids.sort_by(|a, b| {
        let ord: Ordering = name_of(provider, *a).cmp(name_of(provider, *b));
        match order {
            NameOrder::Ascending => ord,
            NameOrder::Descending => ord.reverse(),
        }
    });
}

/// Other endpoints of every edge incident on `id`, in edge order
pub fn neighbor_ids(provider: &dyn GraphProvider, id: VertexId) -> Vec<VertexId> {
    provider
        .get_incident_edges(id)
        .into_iter()
        .map(|edge| edge.other(id))
        .collect()
}

/// Scaled straight-line estimate from `from` to `goal`
pub fn heuristic(provider: &dyn GraphProvider, from: VertexId, goal: VertexId) -> f64 {
    match (provider.get_vertex(from), provider.get_vertex(goal)) {
        (Some(a), Some(b)) => a.distance_to(b),
        _ => 0.0,
    }
}
