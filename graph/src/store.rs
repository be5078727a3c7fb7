//! Mutable editor store with cascading edits.
//!
//! All operations are synchronous and immediate-effect: this is UI editor
//! state, not a durability-critical store, so there is no transactional
//! rollback. Validation that the engine does not perform (duplicate edges,
//! id uniqueness) lives here.

use std::collections::BTreeSet;

use crate::id::{next_unused_letter, NodeId};
use crate::snapshot::{EdgeSpec, GraphSnapshot, NodeSpec};

/// Typed failure for editor operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The referenced node id does not exist.
    UnknownNode { id: String },
    /// A node with this id already exists.
    DuplicateId { id: String },
    /// An edge with this `(from, to)` pair already exists.
    DuplicateEdge { from: String, to: String },
    /// The referenced edge does not exist.
    UnknownEdge { from: String, to: String },
    /// All 26 auto-generated single-letter ids are in use.
    IdSpaceExhausted,
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode { id } => write!(f, "unknown node: {id}"),
            Self::DuplicateId { id } => write!(f, "node id already in use: {id}"),
            Self::DuplicateEdge { from, to } => {
                write!(f, "edge already exists: {from} -> {to}")
            }
            Self::UnknownEdge { from, to } => write!(f, "unknown edge: {from} -> {to}"),
            Self::IdSpaceExhausted => {
                write!(f, "all single-letter node ids are in use; supply a custom id")
            }
        }
    }
}

impl std::error::Error for EditError {}

/// The long-lived mutable editor graph.
///
/// The engine never touches this type: runs consume a [`GraphSnapshot`]
/// cloned out via [`GraphStore::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<NodeSpec>,
    edges: Vec<EdgeSpec>,
    start: Option<NodeId>,
    goal: Option<NodeId>,
    directed: bool,
}

impl GraphStore {
    /// Create an empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All node ids currently in use.
    #[must_use]
    pub fn node_ids(&self) -> BTreeSet<NodeId> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    /// Add a node with the next unused single-letter id.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IdSpaceExhausted`] once `A..=Z` are all taken.
    pub fn add_node(&mut self, x: f64, y: f64) -> Result<NodeId, EditError> {
        let id = next_unused_letter(&self.node_ids()).ok_or(EditError::IdSpaceExhausted)?;
        self.nodes.push(NodeSpec { id: id.clone(), x, y });
        Ok(id)
    }

    /// Add a node with a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::DuplicateId`] if the id is taken.
    pub fn add_node_with_id(&mut self, id: NodeId, x: f64, y: f64) -> Result<(), EditError> {
        if self.has_node(&id) {
            return Err(EditError::DuplicateId { id: id.as_str().to_string() });
        }
        self.nodes.push(NodeSpec { id, x, y });
        Ok(())
    }

    /// Move a node to a new position.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownNode`] if absent.
    pub fn move_node(&mut self, id: &NodeId, x: f64, y: f64) -> Result<(), EditError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| EditError::UnknownNode { id: id.as_str().to_string() })?;
        node.x = x;
        node.y = y;
        Ok(())
    }

    /// Rename a node, cascading to edges and the start/goal markers.
    ///
    /// The heuristic table is owned elsewhere; callers cascade the rename
    /// into it with [`crate::heuristics::HeuristicTable::rename`].
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownNode`] if `old` is absent, or
    /// [`EditError::DuplicateId`] if `new` is already in use.
    pub fn rename_node(&mut self, old: &NodeId, new: NodeId) -> Result<(), EditError> {
        if !self.has_node(old) {
            return Err(EditError::UnknownNode { id: old.as_str().to_string() });
        }
        if &new != old && self.has_node(&new) {
            return Err(EditError::DuplicateId { id: new.as_str().to_string() });
        }
        for node in &mut self.nodes {
            if &node.id == old {
                node.id = new.clone();
            }
        }
        for edge in &mut self.edges {
            if &edge.from == old {
                edge.from = new.clone();
            }
            if &edge.to == old {
                edge.to = new.clone();
            }
        }
        if self.start.as_ref() == Some(old) {
            self.start = Some(new.clone());
        }
        if self.goal.as_ref() == Some(old) {
            self.goal = Some(new);
        }
        Ok(())
    }

    /// Delete a node, cascading removal of incident edges and clearing the
    /// start/goal markers if they referenced it.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownNode`] if absent.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<(), EditError> {
        if !self.has_node(id) {
            return Err(EditError::UnknownNode { id: id.as_str().to_string() });
        }
        self.nodes.retain(|n| &n.id != id);
        self.edges.retain(|e| &e.from != id && &e.to != id);
        if self.start.as_ref() == Some(id) {
            self.start = None;
        }
        if self.goal.as_ref() == Some(id) {
            self.goal = None;
        }
        Ok(())
    }

    /// Add an edge. Both endpoints must exist; duplicate `(from, to)` pairs
    /// are rejected here (an editor-level check — the engine itself
    /// tolerates duplicates in a snapshot). Self-loops are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownNode`] or [`EditError::DuplicateEdge`].
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<(), EditError> {
        for endpoint in [&from, &to] {
            if !self.has_node(endpoint) {
                return Err(EditError::UnknownNode { id: endpoint.as_str().to_string() });
            }
        }
        if self.edges.iter().any(|e| e.from == from && e.to == to) {
            return Err(EditError::DuplicateEdge {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        self.edges.push(EdgeSpec { from, to, weight });
        Ok(())
    }

    /// Update an existing edge's weight.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownEdge`] if absent.
    pub fn set_edge_weight(
        &mut self,
        from: &NodeId,
        to: &NodeId,
        weight: f64,
    ) -> Result<(), EditError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| &e.from == from && &e.to == to)
            .ok_or_else(|| EditError::UnknownEdge {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            })?;
        edge.weight = weight;
        Ok(())
    }

    /// Remove an edge.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownEdge`] if absent.
    pub fn remove_edge(&mut self, from: &NodeId, to: &NodeId) -> Result<(), EditError> {
        let before = self.edges.len();
        self.edges.retain(|e| !(&e.from == from && &e.to == to));
        if self.edges.len() == before {
            return Err(EditError::UnknownEdge {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        Ok(())
    }

    /// Mark a node as the start.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownNode`] if absent.
    pub fn set_start(&mut self, id: NodeId) -> Result<(), EditError> {
        if !self.has_node(&id) {
            return Err(EditError::UnknownNode { id: id.as_str().to_string() });
        }
        self.start = Some(id);
        Ok(())
    }

    /// Clear the start marker.
    pub fn clear_start(&mut self) {
        self.start = None;
    }

    /// Mark a node as the goal.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownNode`] if absent.
    pub fn set_goal(&mut self, id: NodeId) -> Result<(), EditError> {
        if !self.has_node(&id) {
            return Err(EditError::UnknownNode { id: id.as_str().to_string() });
        }
        self.goal = Some(id);
        Ok(())
    }

    /// Clear the goal marker.
    pub fn clear_goal(&mut self) {
        self.goal = None;
    }

    /// Toggle between directed and undirected traversal.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Current start marker.
    #[must_use]
    pub fn start(&self) -> Option<&NodeId> {
        self.start.as_ref()
    }

    /// Current goal marker.
    #[must_use]
    pub fn goal(&self) -> Option<&NodeId> {
        self.goal.as_ref()
    }

    /// Whether edges are currently directed.
    #[must_use]
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Clone out the immutable view a run consumes.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            start: self.start.clone(),
            goal: self.goal.clone(),
            directed: self.directed,
        }
    }
}
