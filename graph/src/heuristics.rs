//! Per-node heuristic estimates and minimax leaf values.
//!
//! One table serves both purposes: for BFS/DFS/UCS/A* it holds the h(n)
//! estimate toward the goal; for Minimax the same entries are leaf
//! evaluation values. A `BTreeMap` keeps iteration deterministic at the
//! serialization boundary.

use std::collections::BTreeMap;

use crate::id::NodeId;
use crate::snapshot::GraphSnapshot;

/// Heuristic / leaf-value table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicTable {
    values: BTreeMap<NodeId, f64>,
    manual: bool,
}

impl HeuristicTable {
    /// Create an empty table in automatic mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for a node, defaulting to `0.0` when unset.
    ///
    /// The zero default doubles as the minimax leaf default and the h = 0
    /// used when displaying BFS/DFS/UCS entries.
    #[must_use]
    pub fn value(&self, id: &NodeId) -> f64 {
        self.values.get(id).copied().unwrap_or(0.0)
    }

    /// Set a value. Callers flip [`HeuristicTable::set_manual`] first if the
    /// edit should survive automatic recomputation.
    pub fn set_value(&mut self, id: NodeId, value: f64) {
        self.values.insert(id, value);
    }

    /// Switch manual mode on or off. Manual values are authoritative:
    /// [`HeuristicTable::auto_compute`] becomes a no-op while set.
    pub fn set_manual(&mut self, manual: bool) {
        self.manual = manual;
    }

    /// Whether manual mode is active.
    #[must_use]
    pub fn manual(&self) -> bool {
        self.manual
    }

    /// Cascade a node rename.
    pub fn rename(&mut self, old: &NodeId, new: NodeId) {
        if let Some(v) = self.values.remove(old) {
            self.values.insert(new, v);
        }
    }

    /// Drop a node's entry.
    pub fn remove(&mut self, id: &NodeId) {
        self.values.remove(id);
    }

    /// Clear all values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Read-only view of the table.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<NodeId, f64> {
        &self.values
    }

    /// True when every stored value is exactly zero (or the table is empty).
    ///
    /// Feeds the minimax structural warning: an all-zero table most likely
    /// means values were never entered, not that every leaf is worth zero.
    #[must_use]
    pub fn all_zero(&self) -> bool {
        self.values.values().all(|v| *v == 0.0)
    }

    /// Recompute automatic heuristics: `round(distance(node, goal) / 10)`
    /// for every node, with the goal itself at 0.
    ///
    /// A no-op when manual mode is active or the snapshot has no goal with
    /// a known position. Callers invoke this whenever the goal marker or
    /// node positions change.
    pub fn auto_compute(&mut self, snapshot: &GraphSnapshot) {
        if self.manual {
            return;
        }
        let Some(goal) = snapshot.goal.as_ref() else {
            return;
        };
        let Some((gx, gy)) = snapshot.position(goal) else {
            return;
        };
        self.values.clear();
        for node in &snapshot.nodes {
            let dist = ((node.x - gx).powi(2) + (node.y - gy).powi(2)).sqrt();
            self.values.insert(node.id.clone(), (dist / 10.0).round());
        }
    }
}
