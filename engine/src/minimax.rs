//! Minimax evaluation over a directed value graph.
//!
//! Deliberately separate from the shared frontier loop: minimax control
//! flow is recursive path extremization, not frontier management. Children
//! always follow the stored edge direction, visited in ascending id order;
//! tie-breaks are first-wins, so repeated runs are bit-identical.
//!
//! A node already on the current root-to-here path is never re-entered
//! (cycle guard). A node whose every child is guarded away resolves as a
//! leaf with its own stored value, which also bounds recursion depth by the
//! node count — cyclic graphs terminate.

use std::collections::BTreeMap;

use searchlab_graph::{GraphSnapshot, HeuristicTable, NodeId};

use crate::trace::EvalRole;

/// Terminal result of a minimax run.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimaxOutcome {
    /// The root's game-theoretic value.
    pub value: f64,
    /// Node ids from the root to the leaf realizing that value.
    pub best_path: Vec<NodeId>,
    /// The latest computed value per evaluated node, for per-node display.
    pub computed: BTreeMap<NodeId, f64>,
}

/// One resolved recursive call, in resolution (post-) order.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimaxEvent {
    pub node: NodeId,
    pub role: EvalRole,
    pub value: f64,
    /// The root-to-node path under evaluation when this call resolved.
    pub path: Vec<NodeId>,
}

/// Evaluate the graph from `root`, alternating max/min by depth parity.
///
/// Leaf values come from the heuristic/value table (0 when unset). Goal
/// markers and edge weights play no part.
#[must_use]
pub fn evaluate(
    snapshot: &GraphSnapshot,
    values: &HeuristicTable,
    root: &NodeId,
    root_is_max: bool,
) -> (MinimaxOutcome, Vec<MinimaxEvent>) {
    let mut events = Vec::new();
    let mut computed = BTreeMap::new();
    let mut path = Vec::new();
    let (value, best_path) = eval_node(
        snapshot,
        values,
        root,
        root_is_max,
        &mut path,
        &mut events,
        &mut computed,
    );
    (
        MinimaxOutcome {
            value,
            best_path,
            computed,
        },
        events,
    )
}

fn eval_node(
    snapshot: &GraphSnapshot,
    values: &HeuristicTable,
    node: &NodeId,
    maximizing: bool,
    path: &mut Vec<NodeId>,
    events: &mut Vec<MinimaxEvent>,
    computed: &mut BTreeMap<NodeId, f64>,
) -> (f64, Vec<NodeId>) {
    path.push(node.clone());

    let mut children = snapshot.outgoing(node);
    children.sort();
    children.dedup();
    // Cycle guard: a child already on the current path is not re-entered.
    children.retain(|c| !path.contains(c));

    let (role, value, best_tail) = if children.is_empty() {
        // True leaf, or every child was cycle-guarded away: the node's own
        // stored value stands.
        (EvalRole::Leaf, values.value(node), Vec::new())
    } else {
        let mut best: Option<(f64, Vec<NodeId>)> = None;
        for child in &children {
            let (child_value, child_path) =
                eval_node(snapshot, values, child, !maximizing, path, events, computed);
            let improves = match &best {
                None => true,
                // Strict comparison: the first child achieving the extremum
                // wins ties, consistent with ascending id order.
                Some((best_value, _)) => {
                    if maximizing {
                        child_value.total_cmp(best_value) == std::cmp::Ordering::Greater
                    } else {
                        child_value.total_cmp(best_value) == std::cmp::Ordering::Less
                    }
                }
            };
            if improves {
                best = Some((child_value, child_path));
            }
        }
        let (value, tail) = best.expect("non-empty children always yield a best");
        let role = if maximizing { EvalRole::Max } else { EvalRole::Min };
        (role, value, tail)
    };

    computed.insert(node.clone(), value);
    events.push(MinimaxEvent {
        node: node.clone(),
        role,
        value,
        path: path.clone(),
    });
    path.pop();

    let mut best_path = vec![node.clone()];
    best_path.extend(best_tail);
    (value, best_path)
}
