//! Typed pre-flight errors.
//!
//! `PreconditionError` covers failures detected before any run state
//! exists. Runtime outcomes — no path found, cancelled — are expressed via
//! [`crate::session::RunOutcome`] and are never errors: a run that
//! exhausts its frontier terminated normally.

/// Typed failure for session construction.
///
/// Returned before the run starts; no session state is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// No start node is set.
    MissingStart,
    /// No goal node is set (required for everything except Minimax).
    MissingGoal,
    /// The start marker references a node absent from the snapshot.
    UnknownStart { id: String },
    /// The goal marker references a node absent from the snapshot.
    UnknownGoal { id: String },
}

impl std::fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStart => write!(f, "no start node is set"),
            Self::MissingGoal => write!(f, "no goal node is set"),
            Self::UnknownStart { id } => write!(f, "start marker references unknown node: {id}"),
            Self::UnknownGoal { id } => write!(f, "goal marker references unknown node: {id}"),
        }
    }
}

impl std::error::Error for PreconditionError {}
