use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::algos::shared::{heuristic, name_of, NodeHandle, PathArena, Traversal, VertexSet};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::VertexId;

/// Open-list entry, ordered by `f` and then by vertex name
#[derive(Debug, Clone)]
pub struct FrontierEntry<'p> {
    pub f: f64,
    pub name: &'p str,
    pub node: NodeHandle,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.name.cmp(other.name))
    }
}

/// A* search from `start` to `goal` using scaled straight-line distance as
/// the heuristic.
///
/// A vertex is queued at most once: neighbors already closed or already on
/// the open list are skipped, and the first cost found for a vertex is the
/// one kept. Edge weights share the heuristic's metric, which keeps that
/// first cost optimal on these graphs.
#[tracing::instrument(skip(provider), fields(start = %name_of(provider, start), goal = %name_of(provider, goal)))]
pub fn astar_search(provider: &dyn GraphProvider, start: VertexId, goal: VertexId) -> Traversal {
    let mut arena = PathArena::new();
    let mut heap: BinaryHeap<Reverse<FrontierEntry<'_>>> = BinaryHeap::new();
    let mut queued = VertexSet::with_capacity(provider.vertex_count());
    let mut closed = VertexSet::with_capacity(provider.vertex_count());
    let mut expanded = 0;

    let root = arena.root_with_cost(start, heuristic(provider, start, goal));
    queued.insert(start);
    heap.push(Reverse(FrontierEntry {
        f: arena.f(root),
        name: name_of(provider, start),
        node: root,
    }));
    let mut last = root;

    while let Some(Reverse(entry)) = heap.pop() {
        let node = entry.node;
        last = node;
        let current = arena.vertex(node);
        queued.remove(current);

        if current == goal {
            tracing::debug!(expanded, cost = arena.g(node), "goal reached");
            return Traversal::Found {
                path: arena.path_to(node),
                expanded,
            };
        }

        closed.insert(current);
        expanded += 1;

        for edge in provider.get_incident_edges(current) {
            let next = edge.other(current);
            if closed.contains(next) || queued.contains(next) {
                continue;
            }

            let g = arena.g(node) + edge.weight();
            let h = heuristic(provider, next, goal);
            let child = arena.child_with_cost(node, next, g, h);
            queued.insert(next);
            heap.push(Reverse(FrontierEntry {
                f: g + h,
                name: name_of(provider, next),
                node: child,
            }));
        }
    }

    tracing::debug!(expanded, "frontier exhausted");
    Traversal::Exhausted {
        last: arena.path_to(last),
        expanded,
    }
}

#[cfg(test)]
mod tests;
