use std::collections::VecDeque;

use crate::graph::algos::shared::{
    name_of, neighbor_ids, sort_by_name, NameOrder, PathArena, Traversal, VertexSet,
};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::VertexId;

/// Breadth-first search from `start` to `goal`.
///
/// Each expansion orders its candidates by name ascending before they are
/// marked visited, so among equal-hop paths the one that is alphabetically
/// first at the earliest divergence wins.
#[tracing::instrument(skip(provider), fields(start = %name_of(provider, start), goal = %name_of(provider, goal)))]
pub fn bfs_search(provider: &dyn GraphProvider, start: VertexId, goal: VertexId) -> Traversal {
    let mut arena = PathArena::new();
    let mut visited = VertexSet::with_capacity(provider.vertex_count());
    let mut queue = VecDeque::new();
    let mut expanded = 0;

    visited.insert(start);
    let root = arena.root(start);
    queue.push_back(root);
    let mut last = root;

    while let Some(node) = queue.pop_front() {
        last = node;
        let current = arena.vertex(node);
        if current == goal {
            tracing::debug!(expanded, "goal reached");
            return Traversal::Found {
                path: arena.path_to(node),
                expanded,
            };
        }

        expanded += 1;
        let mut candidates = neighbor_ids(provider, current);
        sort_by_name(provider, &mut candidates, NameOrder::Ascending);

        for next in candidates {
            if visited.insert(next) {
                let child = arena.child(node, next);
                queue.push_back(child);
            }
        }
    }

    tracing::debug!(expanded, "frontier exhausted");
    Traversal::Exhausted {
        last: arena.path_to(last),
        expanded,
    }
}
