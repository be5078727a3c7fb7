//! Editor workbench: long-lived graph + heuristic state, with the
//! edit-during-run gate.
//!
//! The engine treats its snapshot as exclusively owned for the duration of
//! a run; that discipline is advisory at the engine level and enforced
//! here, at the editor seam, by refusing mutations while a run is active.

use searchlab_engine::{PreconditionError, RunWarning, SearchSession};
use searchlab_graph::{EditError, GraphStore, HeuristicTable, NodeId};

use crate::config::RunConfig;

/// Typed failure for workbench operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchError {
    /// Editor mutations are disabled while a run is active.
    RunInProgress,
    /// The underlying editor operation was rejected.
    Edit(EditError),
    /// Session construction failed its precondition checks.
    Precondition(PreconditionError),
}

impl std::fmt::Display for WorkbenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RunInProgress => write!(f, "a run is in progress; stop it before editing"),
            Self::Edit(e) => write!(f, "{e}"),
            Self::Precondition(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for WorkbenchError {}

impl From<EditError> for WorkbenchError {
    fn from(e: EditError) -> Self {
        Self::Edit(e)
    }
}

impl From<PreconditionError> for WorkbenchError {
    fn from(e: PreconditionError) -> Self {
        Self::Precondition(e)
    }
}

/// A running session plus the warnings raised at construction.
///
/// Hand the session to [`crate::driver::drive`]; call
/// [`Workbench::finish_run`] afterwards to release the edit gate.
pub struct ActiveRun {
    pub session: SearchSession,
    pub warnings: Vec<RunWarning>,
}

impl std::fmt::Debug for ActiveRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveRun")
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

/// The long-lived editor state.
#[derive(Debug, Default)]
pub struct Workbench {
    store: GraphStore,
    heuristics: HeuristicTable,
    run_active: bool,
}

impl Workbench {
    /// An empty workbench.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A workbench seeded from existing state (presets).
    #[must_use]
    pub fn from_parts(store: GraphStore, heuristics: HeuristicTable) -> Self {
        Self {
            store,
            heuristics,
            run_active: false,
        }
    }

    /// Read access to the graph.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Read access to the heuristic table.
    #[must_use]
    pub fn heuristics(&self) -> &HeuristicTable {
        &self.heuristics
    }

    fn gate(&self) -> Result<(), WorkbenchError> {
        if self.run_active {
            return Err(WorkbenchError::RunInProgress);
        }
        Ok(())
    }

    fn refresh_heuristics(&mut self) {
        // Manual values are authoritative; auto_compute no-ops then.
        let snapshot = self.store.snapshot();
        self.heuristics.auto_compute(&snapshot);
    }

    /// Add a node with an auto-generated id.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn add_node(&mut self, x: f64, y: f64) -> Result<NodeId, WorkbenchError> {
        self.gate()?;
        let id = self.store.add_node(x, y)?;
        self.refresh_heuristics();
        Ok(id)
    }

    /// Add a node with a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn add_node_with_id(&mut self, id: NodeId, x: f64, y: f64) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.add_node_with_id(id, x, y)?;
        self.refresh_heuristics();
        Ok(())
    }

    /// Move a node; automatic heuristics follow the new position.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn move_node(&mut self, id: &NodeId, x: f64, y: f64) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.move_node(id, x, y)?;
        self.refresh_heuristics();
        Ok(())
    }

    /// Rename a node, cascading through edges, markers, and the heuristic
    /// table.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn rename_node(&mut self, old: &NodeId, new: NodeId) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.rename_node(old, new.clone())?;
        self.heuristics.rename(old, new);
        Ok(())
    }

    /// Remove a node, cascading through edges, markers, and the heuristic
    /// table.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn remove_node(&mut self, id: &NodeId) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.remove_node(id)?;
        self.heuristics.remove(id);
        self.refresh_heuristics();
        Ok(())
    }

    /// Add an edge.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.add_edge(from, to, weight)?;
        Ok(())
    }

    /// Update an edge weight.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn set_edge_weight(
        &mut self,
        from: &NodeId,
        to: &NodeId,
        weight: f64,
    ) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.set_edge_weight(from, to, weight)?;
        Ok(())
    }

    /// Remove an edge.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn remove_edge(&mut self, from: &NodeId, to: &NodeId) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.remove_edge(from, to)?;
        Ok(())
    }

    /// Set the start marker.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn set_start(&mut self, id: NodeId) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.set_start(id)?;
        Ok(())
    }

    /// Clear the start marker.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError::RunInProgress`] while a run is active.
    pub fn clear_start(&mut self) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.clear_start();
        Ok(())
    }

    /// Set the goal marker; automatic heuristics recompute toward it.
    ///
    /// # Errors
    ///
    /// Gate and editor errors per [`WorkbenchError`].
    pub fn set_goal(&mut self, id: NodeId) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.set_goal(id)?;
        self.refresh_heuristics();
        Ok(())
    }

    /// Clear the goal marker. Automatic heuristic values are left as last
    /// computed; the next goal change recomputes them.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError::RunInProgress`] while a run is active.
    pub fn clear_goal(&mut self) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.clear_goal();
        Ok(())
    }

    /// Toggle directed/undirected traversal.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError::RunInProgress`] while a run is active.
    pub fn set_directed(&mut self, directed: bool) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.store.set_directed(directed);
        Ok(())
    }

    /// Switch heuristic manual mode; leaving it recomputes automatics.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError::RunInProgress`] while a run is active.
    pub fn set_manual_heuristics(&mut self, manual: bool) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.heuristics.set_manual(manual);
        if !manual {
            self.refresh_heuristics();
        }
        Ok(())
    }

    /// Set one heuristic/value entry (manual mode is implied and switched
    /// on, so the edit is not silently overwritten later).
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError::RunInProgress`] while a run is active.
    pub fn set_heuristic(&mut self, id: NodeId, value: f64) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.heuristics.set_manual(true);
        self.heuristics.set_value(id, value);
        Ok(())
    }

    /// Drop all stored heuristic values; automatics recompute immediately
    /// unless manual mode is on.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError::RunInProgress`] while a run is active.
    pub fn clear_heuristics(&mut self) -> Result<(), WorkbenchError> {
        self.gate()?;
        self.heuristics.clear();
        self.refresh_heuristics();
        Ok(())
    }

    /// Whether a run currently owns the graph state.
    #[must_use]
    pub fn run_active(&self) -> bool {
        self.run_active
    }

    /// Snapshot current state and start a run, flipping the edit gate.
    ///
    /// Starting requires that no other run is active — a previous run must
    /// have completed, failed, or been cancelled and released via
    /// [`Workbench::finish_run`].
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError::RunInProgress`] or a wrapped
    /// [`PreconditionError`]; precondition failures leave the gate open
    /// and nothing mutated.
    pub fn begin_run(&mut self, config: &RunConfig) -> Result<ActiveRun, WorkbenchError> {
        self.gate()?;
        let session = SearchSession::new(
            self.store.snapshot(),
            self.heuristics.clone(),
            config.options,
        )?;
        let warnings = session.warnings().to_vec();
        self.run_active = true;
        Ok(ActiveRun { session, warnings })
    }

    /// Release the edit gate after a run has finished or been cancelled.
    pub fn finish_run(&mut self, run: ActiveRun) {
        drop(run);
        self.run_active = false;
    }
}
