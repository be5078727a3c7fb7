//! Optimality properties cross-checked against a brute-force oracle.
//!
//! Proves:
//! 1. UCS graph-search cost equals exhaustive cheapest-path cost on the
//!    bundled examples and a handful of adversarial graphs
//! 2. A* with an admissible heuristic matches the UCS cost
//! 3. BFS finds a minimum-hop path on uniform-weight graphs
//! 4. On a DAG, tree-search and graph-search agree on the optimal cost

use scenario_tests::{brute_force_cheapest, complete, graph, manual_values};
use searchlab_engine::{Algorithm, RunOptions, RunOutcome};
use searchlab_graph::{GraphSnapshot, HeuristicTable};
use searchlab_runner::presets::{example_weighted_directed, example_weighted_undirected};

fn goal_cost(snapshot: GraphSnapshot, heuristics: HeuristicTable, options: RunOptions) -> f64 {
    let (_, report) = complete(snapshot, heuristics, options);
    match report.outcome {
        RunOutcome::Goal { cost, .. } => cost,
        other => panic!("expected goal, got {other:?}"),
    }
}

fn goal_path(snapshot: GraphSnapshot, heuristics: HeuristicTable, options: RunOptions) -> Vec<String> {
    let (_, report) = complete(snapshot, heuristics, options);
    match report.outcome {
        RunOutcome::Goal { path, .. } => {
            path.into_iter().map(|n| n.as_str().to_string()).collect()
        }
        other => panic!("expected goal, got {other:?}"),
    }
}

/// A graph where greedy-by-h would go wrong: the short hop is expensive.
fn trap_graph() -> GraphSnapshot {
    graph(
        &[
            ("S", 0.0, 0.0),
            ("A", 1.0, 0.0),
            ("B", 2.0, 0.0),
            ("C", 3.0, 0.0),
            ("G", 4.0, 0.0),
        ],
        &[
            ("S", "G", 100.0),
            ("S", "A", 1.0),
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "G", 1.0),
            ("A", "G", 50.0),
        ],
        "S",
        Some("G"),
        true,
    )
}

// ---------------------------------------------------------------------------
// 1. UCS equals brute force
// ---------------------------------------------------------------------------

#[test]
fn ucs_matches_brute_force_on_the_presets() {
    let options = RunOptions {
        algorithm: Algorithm::Ucs,
        ..RunOptions::default()
    };
    for (snapshot, heuristics) in [example_weighted_undirected(), example_weighted_directed()] {
        let (_, oracle_cost) =
            brute_force_cheapest(&snapshot).expect("presets have a reachable goal");
        let cost = goal_cost(snapshot, heuristics, options);
        assert!((cost - oracle_cost).abs() < 1e-9);
    }
}

#[test]
fn ucs_matches_brute_force_on_the_trap_graph() {
    let snapshot = trap_graph();
    let (_, oracle_cost) = brute_force_cheapest(&snapshot).expect("reachable");
    let options = RunOptions {
        algorithm: Algorithm::Ucs,
        ..RunOptions::default()
    };
    let cost = goal_cost(snapshot, HeuristicTable::new(), options);
    assert!((cost - 4.0).abs() < f64::EPSILON);
    assert!((cost - oracle_cost).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// 2. Admissible A* equals UCS
// ---------------------------------------------------------------------------

#[test]
fn admissible_a_star_matches_ucs_cost() {
    // True remaining costs are 4, 3, 2, 1, 0; these stay at or below them.
    let admissible = manual_values(&[("S", 3.5), ("A", 3.0), ("B", 2.0), ("C", 1.0), ("G", 0.0)]);
    let ucs = RunOptions {
        algorithm: Algorithm::Ucs,
        ..RunOptions::default()
    };
    let a_star = RunOptions {
        algorithm: Algorithm::AStar,
        ..RunOptions::default()
    };
    let ucs_cost = goal_cost(trap_graph(), HeuristicTable::new(), ucs);
    let a_star_cost = goal_cost(trap_graph(), admissible, a_star);
    assert!((ucs_cost - a_star_cost).abs() < 1e-9);
}

#[test]
fn admissible_a_star_matches_ucs_on_the_presets() {
    for (snapshot, heuristics) in [example_weighted_undirected(), example_weighted_directed()] {
        let ucs_cost = goal_cost(
            snapshot.clone(),
            HeuristicTable::new(),
            RunOptions {
                algorithm: Algorithm::Ucs,
                ..RunOptions::default()
            },
        );
        let a_star_cost = goal_cost(
            snapshot,
            heuristics,
            RunOptions {
                algorithm: Algorithm::AStar,
                ..RunOptions::default()
            },
        );
        assert!((ucs_cost - a_star_cost).abs() < 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 3. BFS hop minimality under uniform weights
// ---------------------------------------------------------------------------

#[test]
fn bfs_finds_minimum_hops_on_uniform_weights() {
    // Two routes to G: three hops via A, B and one hop direct.
    let snapshot = graph(
        &[
            ("S", 0.0, 0.0),
            ("A", 1.0, 0.0),
            ("B", 2.0, 0.0),
            ("G", 3.0, 0.0),
        ],
        &[
            ("S", "A", 1.0),
            ("A", "B", 1.0),
            ("B", "G", 1.0),
            ("S", "G", 1.0),
        ],
        "S",
        Some("G"),
        true,
    );
    let path = goal_path(
        snapshot,
        HeuristicTable::new(),
        RunOptions {
            algorithm: Algorithm::Bfs,
            ..RunOptions::default()
        },
    );
    assert_eq!(path, vec!["S", "G"]);
}

// ---------------------------------------------------------------------------
// 4. DAG: tree-search and graph-search agree
// ---------------------------------------------------------------------------

#[test]
fn dag_tree_and_graph_search_agree_on_optimal_cost() {
    let dag = || {
        graph(
            &[
                ("S", 0.0, 0.0),
                ("A", 1.0, 1.0),
                ("B", 1.0, -1.0),
                ("C", 2.0, 0.0),
                ("G", 3.0, 0.0),
            ],
            &[
                ("S", "A", 2.0),
                ("S", "B", 1.0),
                ("A", "C", 1.0),
                ("B", "C", 3.0),
                ("C", "G", 2.0),
                ("A", "G", 9.0),
            ],
            "S",
            Some("G"),
            true,
        )
    };
    for algorithm in [Algorithm::Ucs, Algorithm::AStar] {
        let graph_cost = goal_cost(
            dag(),
            HeuristicTable::new(),
            RunOptions {
                algorithm,
                ..RunOptions::default()
            },
        );
        let tree_cost = goal_cost(
            dag(),
            HeuristicTable::new(),
            RunOptions {
                algorithm,
                tree_search: true,
                ..RunOptions::default()
            },
        );
        assert!((graph_cost - tree_cost).abs() < 1e-9);
        assert!((graph_cost - 5.0).abs() < f64::EPSILON);
    }
}
