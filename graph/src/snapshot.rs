//! Immutable graph snapshot consumed by a single run.
//!
//! The editor owns the mutable [`crate::store::GraphStore`]; the engine only
//! ever sees a `GraphSnapshot` cloned out of it, so nothing a run does can
//! alias live editor state.

use crate::id::NodeId;

/// A node: identifier plus a presentational 2D position.
///
/// The position takes no part in algorithm logic except as input to the
/// automatic Euclidean heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// An edge: ordered `(from, to)` pair with a numeric weight.
///
/// The weight is the step cost for UCS/A*; BFS/DFS/Minimax ignore it for
/// ordering. In undirected mode the stored direction is presentational only.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// One traversable step out of a node, already normalized for direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub id: NodeId,
    pub weight: f64,
}

/// The immutable graph view a run consumes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub start: Option<NodeId>,
    pub goal: Option<NodeId>,
    pub directed: bool,
}

impl GraphSnapshot {
    /// Whether a node with this id exists.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    /// Position of a node, if present.
    #[must_use]
    pub fn position(&self, id: &NodeId) -> Option<(f64, f64)> {
        self.nodes.iter().find(|n| &n.id == id).map(|n| (n.x, n.y))
    }

    /// Enumerate the traversable neighbors of `of`.
    ///
    /// Directed mode follows edges with `from == of`; undirected mode
    /// accepts either endpoint and normalizes the result to the far
    /// endpoint. Edges referencing a node id that does not exist in the
    /// node set are skipped rather than reported — the engine must tolerate
    /// malformed input. No ordering is promised; callers order neighbors
    /// per strategy.
    #[must_use]
    pub fn neighbors(&self, of: &NodeId) -> Vec<Neighbor> {
        let mut out = Vec::new();
        for edge in &self.edges {
            if !self.contains(&edge.from) || !self.contains(&edge.to) {
                continue; // dangling edge
            }
            if edge.from == *of {
                out.push(Neighbor {
                    id: edge.to.clone(),
                    weight: edge.weight,
                });
            } else if !self.directed && edge.to == *of {
                out.push(Neighbor {
                    id: edge.from.clone(),
                    weight: edge.weight,
                });
            }
        }
        out
    }

    /// Outgoing edge targets regardless of the undirected display flag.
    ///
    /// Minimax children always follow the stored `from → to` direction; an
    /// evaluation tree has no undirected reading. Dangling edges are
    /// skipped here too.
    #[must_use]
    pub fn outgoing(&self, of: &NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|e| e.from == *of && self.contains(&e.from) && self.contains(&e.to))
            .map(|e| e.to.clone())
            .collect()
    }

    /// JSON view for the UI boundary.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "directed": self.directed,
            "edges": self.edges.iter().map(|e| serde_json::json!({
                "from": e.from.as_str(),
                "to": e.to.as_str(),
                "weight": e.weight,
            })).collect::<Vec<_>>(),
            "goal": self.goal.as_ref().map(NodeId::as_str),
            "nodes": self.nodes.iter().map(|n| serde_json::json!({
                "id": n.id.as_str(),
                "x": n.x,
                "y": n.y,
            })).collect::<Vec<_>>(),
            "start": self.start.as_ref().map(NodeId::as_str),
        })
    }
}
