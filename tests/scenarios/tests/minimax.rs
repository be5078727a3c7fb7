//! Minimax scenario locks.
//!
//! Proves:
//! 1. The bundled two-ply tree evaluates to 3 with best line R, A, C under
//!    a maximizing root, and to 5 (R, A, D) under a minimizing root
//! 2. Repeated runs are identical, records and digest included
//! 3. Replay emits post-order Evaluate records, leaves before parents
//! 4. An all-zero value table raises the advisory warning without failing

use scenario_tests::{complete, graph, manual_values, nid};
use searchlab_engine::{
    Algorithm, EvalRole, RunOptions, RunOutcome, RunWarning, StepRecord,
};
use searchlab_graph::HeuristicTable;
use searchlab_runner::presets::example_minimax_tree;

fn minimax_options(root_is_max: bool) -> RunOptions {
    RunOptions {
        algorithm: Algorithm::Minimax,
        root_is_max,
        ..RunOptions::default()
    }
}

// ---------------------------------------------------------------------------
// 1. Root value and best line
// ---------------------------------------------------------------------------

#[test]
fn max_root_evaluates_the_preset_tree_to_three() {
    let (snapshot, values) = example_minimax_tree();
    let (_, report) = complete(snapshot, values, minimax_options(true));
    match report.outcome {
        RunOutcome::Minimax { value, best_path } => {
            assert!((value - 3.0).abs() < f64::EPSILON);
            assert_eq!(best_path, vec![nid("R"), nid("A"), nid("C")]);
        }
        other => panic!("expected minimax outcome, got {other:?}"),
    }
}

#[test]
fn min_root_evaluates_the_preset_tree_to_five() {
    // Roles flip: A maxes to 5, B maxes to 9, the minimizing root takes
    // min(5, 9) = 5 along R, A, D.
    let (snapshot, values) = example_minimax_tree();
    let (_, report) = complete(snapshot, values, minimax_options(false));
    match report.outcome {
        RunOutcome::Minimax { value, best_path } => {
            assert!((value - 5.0).abs() < f64::EPSILON);
            assert_eq!(best_path, vec![nid("R"), nid("A"), nid("D")]);
        }
        other => panic!("expected minimax outcome, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 2. Determinism across repeated runs
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_replay_identically() {
    let run = || {
        let (snapshot, values) = example_minimax_tree();
        complete(snapshot, values, minimax_options(true))
    };
    let (first_session, first_report) = run();
    let (second_session, second_report) = run();
    assert_eq!(first_report, second_report);
    assert_eq!(first_session.trace().records(), second_session.trace().records());
    assert_eq!(first_session.trace().digest(), second_session.trace().digest());
}

// ---------------------------------------------------------------------------
// 3. Post-order replay
// ---------------------------------------------------------------------------

#[test]
fn evaluate_records_arrive_in_post_order() {
    let (snapshot, values) = example_minimax_tree();
    let (session, _) = complete(snapshot, values, minimax_options(true));
    let order: Vec<(String, EvalRole)> = session
        .trace()
        .records()
        .iter()
        .map(|r| match r {
            StepRecord::Evaluate { node, role, .. } => (node.as_str().to_string(), *role),
            other => panic!("minimax traces hold only Evaluate records, got {other:?}"),
        })
        .collect();
    let names: Vec<&str> = order.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["C", "D", "A", "E", "F", "B", "R"]);
    assert_eq!(order[0].1, EvalRole::Leaf);
    assert_eq!(order[2].1, EvalRole::Min);
    assert_eq!(order[6].1, EvalRole::Max);
}

// ---------------------------------------------------------------------------
// 4. All-zero advisory
// ---------------------------------------------------------------------------

#[test]
fn all_zero_values_warn_but_still_evaluate() {
    let snapshot = graph(
        &[("R", 0.0, 0.0), ("L", 0.0, 1.0)],
        &[("R", "L", 1.0)],
        "R",
        None,
        true,
    );
    let (session, report) = complete(snapshot, HeuristicTable::new(), minimax_options(true));
    assert_eq!(session.warnings(), &[RunWarning::AllValuesZero]);
    assert_eq!(report.warnings, vec![RunWarning::AllValuesZero]);
    match report.outcome {
        RunOutcome::Minimax { value, .. } => assert!(value.abs() < f64::EPSILON),
        other => panic!("expected minimax outcome, got {other:?}"),
    }
}

#[test]
fn nonzero_values_do_not_warn() {
    let (snapshot, values) = example_minimax_tree();
    let (session, _) = complete(snapshot, values, minimax_options(true));
    assert!(session.warnings().is_empty());
}

#[test]
fn ties_resolve_to_the_first_child_in_ascending_id_order() {
    let snapshot = graph(
        &[
            ("R", 0.0, 0.0),
            ("A", -1.0, 1.0),
            ("B", 1.0, 1.0),
        ],
        &[("R", "A", 1.0), ("R", "B", 1.0)],
        "R",
        None,
        true,
    );
    let values = manual_values(&[("A", 4.0), ("B", 4.0)]);
    let (_, report) = complete(snapshot, values, minimax_options(true));
    match report.outcome {
        RunOutcome::Minimax { value, best_path } => {
            assert!((value - 4.0).abs() < f64::EPSILON);
            assert_eq!(best_path, vec![nid("R"), nid("A")]);
        }
        other => panic!("expected minimax outcome, got {other:?}"),
    }
}
