use super::*;
use crate::graph::algos::bfs::bfs_search;
use crate::graph::algos::dfs::dfs_search;
use crate::graph::algos::test_support::{build, chain, detour, diamond, id, names};
use crate::graph::model::Graph;

fn path_weight(graph: &Graph, path: &[VertexId]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edges()
                .iter()
                .find(|edge| edge.connects(pair[0], pair[1]))
                .map(|edge| edge.weight())
                .unwrap()
        })
        .sum()
}

/// Test FrontierEntry comparison ordering
#[test]
fn test_frontier_entry_ordering() {
    let mut arena = PathArena::new();
    let node = arena.root(VertexId(0));
    let cheap = FrontierEntry {
        f: 1.0,
        name: "Zebra",
        node,
    };
    let dear = FrontierEntry {
        f: 2.0,
        name: "Aardvark",
        node,
    };
    let cheap_tie = FrontierEntry {
        f: 1.0,
        name: "Moose",
        node,
    };

    // Lower f wins regardless of name
    assert_eq!(cheap.cmp(&dear), Ordering::Less);
    // Equal f falls back to name ascending
    assert_eq!(cheap_tie.cmp(&cheap), Ordering::Less);
    assert_eq!(cheap.cmp(&cheap.clone()), Ordering::Equal);
}

/// Reverse-wrapped heap pops the smallest entry first
#[test]
fn test_heap_pops_min_f_then_name() {
    let mut arena = PathArena::new();
    let node = arena.root(VertexId(0));
    let mut heap = BinaryHeap::new();
    for (f, name) in [(3.0, "C"), (1.0, "B"), (1.0, "A"), (2.0, "D")] {
        heap.push(Reverse(FrontierEntry { f, name, node }));
    }

    let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.name)).collect();
    assert_eq!(order, vec!["A", "B", "D", "C"]);
}

#[test]
fn test_astar_chain() {
    let graph = chain();
    let result = astar_search(&graph, id(&graph, "A"), id(&graph, "D"));
    assert!(result.is_found());
    assert_eq!(names(&graph, result.path()), vec!["A", "B", "C", "D"]);

    let expected = 100.0 + 100.0 + 2f64.sqrt() * 100.0;
    assert!((path_weight(&graph, result.path()) - expected).abs() < 1e-9);
}

#[test]
fn test_astar_start_is_goal() {
    let graph = chain();
    let c = id(&graph, "C");
    let result = astar_search(&graph, c, c);
    assert_eq!(
        result,
        Traversal::Found {
            path: vec![c],
            expanded: 0
        }
    );
}

#[test]
fn test_astar_equal_f_breaks_ties_by_name() {
    let graph = diamond();
    let result = astar_search(&graph, id(&graph, "A"), id(&graph, "D"));
    assert_eq!(names(&graph, result.path()), vec!["A", "B", "D"]);
    // A, B and C are expanded; C's route to D is ignored since D is already queued
    assert_eq!(result.expanded(), 3);
}

#[test]
fn test_astar_finds_cheaper_route_than_bfs_and_dfs() {
    let graph = detour();
    let (a, g) = (id(&graph, "A"), id(&graph, "G"));

    let astar = astar_search(&graph, a, g);
    let bfs = bfs_search(&graph, a, g);
    let dfs = dfs_search(&graph, a, g);

    assert_eq!(names(&graph, astar.path()), vec!["A", "B", "C", "G"]);
    let astar_cost = path_weight(&graph, astar.path());
    assert!((astar_cost - 400.0).abs() < 1e-9);
    assert!(astar_cost < path_weight(&graph, bfs.path()));
    assert!(astar_cost <= path_weight(&graph, dfs.path()));
}

#[test]
fn test_astar_never_costlier_on_grid() {
    // 3x3 lattice with one diagonal shortcut
    let mut vertices = Vec::new();
    let labels = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
    for (i, label) in labels.iter().enumerate() {
        vertices.push((*label, (i / 3) as f64, (i % 3) as f64));
    }
    let graph = build(
        &vertices,
        &[
            ("a", "b"),
            ("b", "c"),
            ("d", "e"),
            ("e", "f"),
            ("g", "h"),
            ("h", "i"),
            ("a", "d"),
            ("d", "g"),
            ("b", "e"),
            ("e", "h"),
            ("c", "f"),
            ("f", "i"),
            ("a", "e"),
        ],
    );

    for (from, to) in [("a", "i"), ("c", "g"), ("g", "c"), ("b", "i")] {
        let (s, t) = (id(&graph, from), id(&graph, to));
        let astar = path_weight(&graph, astar_search(&graph, s, t).path());
        let bfs = path_weight(&graph, bfs_search(&graph, s, t).path());
        let dfs = path_weight(&graph, dfs_search(&graph, s, t).path());
        assert!(astar <= bfs + 1e-9, "{from}->{to}: {astar} > bfs {bfs}");
        assert!(astar <= dfs + 1e-9, "{from}->{to}: {astar} > dfs {dfs}");
    }
}

#[test]
fn test_astar_disconnected_goal_exhausts() {
    let graph = chain();
    let result = astar_search(&graph, id(&graph, "A"), id(&graph, "E"));
    assert!(!result.is_found());
    assert_eq!(names(&graph, result.path()), vec!["A", "B", "C", "D"]);
    assert_eq!(result.expanded(), 4);
}
