use std::collections::VecDeque;

use crate::graph::algos::shared::{
    name_of, neighbor_ids, sort_by_name, NameOrder, PathArena, Traversal, VertexSet,
};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::VertexId;

/// Depth-first search from `start` to `goal`.
///
/// The open list is a stack fed through its front. The goal is tested
/// while children are enumerated, so the search can stop one level before
/// the goal would be popped. Children already on the open list or already
/// expanded are dropped; survivors are sorted by name descending and
/// pushed one by one, leaving the alphabetically first child on top.
#[tracing::instrument(skip(provider), fields(start = %name_of(provider, start), goal = %name_of(provider, goal)))]
pub fn dfs_search(provider: &dyn GraphProvider, start: VertexId, goal: VertexId) -> Traversal {
    let mut arena = PathArena::new();
    let mut open = VecDeque::new();
    // Vertices currently on `open` or already expanded. A popped vertex is
    // expanded in the same step, so membership never needs clearing.
    let mut seen = VertexSet::with_capacity(provider.vertex_count());
    let mut expanded = 0;

    seen.insert(start);
    let root = arena.root(start);
    open.push_front(root);
    let mut last = root;

    while let Some(node) = open.pop_front() {
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
        let mut children = Vec::new();
        for next in neighbor_ids(provider, current) {
            if next == goal {
                let terminal = arena.child(node, next);
                tracing::debug!(expanded, "goal found among children");
                return Traversal::Found {
                    path: arena.path_to(terminal),
                    expanded,
                };
            }
            children.push(next);
        }

        children.retain(|child| !seen.contains(*child));
        sort_by_name(provider, &mut children, NameOrder::Descending);

        for child in children {
            seen.insert(child);
            let handle = arena.child(node, child);
            open.push_front(handle);
        }
    }

    tracing::debug!(expanded, "frontier exhausted");
    Traversal::Exhausted {
        last: arena.path_to(last),
        expanded,
    }
}
