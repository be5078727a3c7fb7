//! Bundled example graphs.
//!
//! These are configuration data, not engine behavior: each constructor
//! yields a finished snapshot plus its heuristic/value table, ready to seed
//! a [`crate::workbench::Workbench`] or feed a session directly.

use searchlab_graph::{GraphSnapshot, GraphStore, HeuristicTable, NodeId};

fn nid(s: &str) -> NodeId {
    NodeId::from(s)
}

/// Undirected weighted example: S, A, B, C, D, E, G with manual heuristics.
///
/// A* tree-search over this graph finds S, A, D, G at cost 11.
#[must_use]
pub fn example_weighted_undirected() -> (GraphSnapshot, HeuristicTable) {
    let mut store = GraphStore::new();
    let nodes = [
        ("S", 80.0, 260.0),
        ("A", 220.0, 140.0),
        ("B", 240.0, 360.0),
        ("C", 400.0, 400.0),
        ("D", 420.0, 120.0),
        ("E", 560.0, 360.0),
        ("G", 580.0, 180.0),
    ];
    for (id, x, y) in nodes {
        store
            .add_node_with_id(nid(id), x, y)
            .expect("preset ids are unique");
    }
    let edges = [
        ("S", "A", 3.0),
        ("S", "B", 5.0),
        ("A", "B", 4.0),
        ("A", "D", 3.0),
        ("B", "C", 4.0),
        ("C", "E", 7.0),
        ("D", "G", 5.0),
    ];
    for (from, to, weight) in edges {
        store
            .add_edge(nid(from), nid(to), weight)
            .expect("preset edges reference known nodes");
    }
    store.set_directed(false);
    store.set_start(nid("S")).expect("S exists");
    store.set_goal(nid("G")).expect("G exists");

    let mut heuristics = HeuristicTable::new();
    heuristics.set_manual(true);
    for (id, h) in [
        ("S", 9.8),
        ("A", 7.6),
        ("B", 6.5),
        ("C", 7.6),
        ("D", 5.0),
        ("E", 4.1),
        ("G", 0.0),
    ] {
        heuristics.set_value(nid(id), h);
    }
    (store.snapshot(), heuristics)
}

/// Directed weighted example: S, A, B, C, G with manual heuristics.
///
/// A* graph-search over this graph reaches G at cost 8, cheaper than the
/// direct S, A, G route at 12.
#[must_use]
pub fn example_weighted_directed() -> (GraphSnapshot, HeuristicTable) {
    let mut store = GraphStore::new();
    let nodes = [
        ("S", 80.0, 200.0),
        ("A", 240.0, 120.0),
        ("B", 260.0, 300.0),
        ("C", 440.0, 260.0),
        ("G", 600.0, 160.0),
    ];
    for (id, x, y) in nodes {
        store
            .add_node_with_id(nid(id), x, y)
            .expect("preset ids are unique");
    }
    let edges = [
        ("S", "A", 1.0),
        ("S", "B", 3.0),
        ("A", "B", 2.0),
        ("A", "C", 4.0),
        ("A", "G", 11.0),
        ("B", "C", 2.0),
        ("C", "G", 3.0),
    ];
    for (from, to, weight) in edges {
        store
            .add_edge(nid(from), nid(to), weight)
            .expect("preset edges reference known nodes");
    }
    store.set_directed(true);
    store.set_start(nid("S")).expect("S exists");
    store.set_goal(nid("G")).expect("G exists");

    let mut heuristics = HeuristicTable::new();
    heuristics.set_manual(true);
    for (id, h) in [("S", 7.0), ("A", 6.0), ("B", 2.0), ("C", 2.0), ("G", 0.0)] {
        heuristics.set_value(nid(id), h);
    }
    (store.snapshot(), heuristics)
}

/// Two-ply minimax tree: root R over min nodes A and B, leaves C, D, E, F.
///
/// With a maximizing root, A evaluates to min(3, 5) = 3, B to min(2, 9) = 2,
/// and the root to 3 along R, A, C.
#[must_use]
pub fn example_minimax_tree() -> (GraphSnapshot, HeuristicTable) {
    let mut store = GraphStore::new();
    let nodes = [
        ("R", 320.0, 80.0),
        ("A", 200.0, 220.0),
        ("B", 440.0, 220.0),
        ("C", 140.0, 360.0),
        ("D", 260.0, 360.0),
        ("E", 380.0, 360.0),
        ("F", 500.0, 360.0),
    ];
    for (id, x, y) in nodes {
        store
            .add_node_with_id(nid(id), x, y)
            .expect("preset ids are unique");
    }
    for (from, to) in [
        ("R", "A"),
        ("R", "B"),
        ("A", "C"),
        ("A", "D"),
        ("B", "E"),
        ("B", "F"),
    ] {
        store
            .add_edge(nid(from), nid(to), 1.0)
            .expect("preset edges reference known nodes");
    }
    store.set_directed(true);
    store.set_start(nid("R")).expect("R exists");

    let mut values = HeuristicTable::new();
    values.set_manual(true);
    for (id, v) in [("C", 3.0), ("D", 5.0), ("E", 2.0), ("F", 9.0)] {
        values.set_value(nid(id), v);
    }
    (store.snapshot(), values)
}
