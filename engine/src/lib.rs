//! Searchlab engine: deterministic step-simulated graph search.
//!
//! Five algorithms run against an immutable [`searchlab_graph::GraphSnapshot`]:
//! BFS, DFS, UCS, and A* share one frontier loop parameterized by a
//! [`Strategy`]; Minimax is a separate recursive evaluator whose records are
//! replayed through the same stepping surface.
//!
//! The engine is wall-clock-free: [`SearchSession::step`] performs exactly
//! one pop/expand/enqueue cycle and returns the step record plus the updated
//! visualization state. Pacing and cancellation live in the runner layer,
//! which simply decides when (and whether) to call `step` again.
//!
//! # Key types
//!
//! - [`SearchSession`] — one run, from precondition check to terminal report
//! - [`RunOptions`] / [`Algorithm`] — run configuration
//! - [`Frontier`] / [`Strategy`] — per-algorithm frontier discipline
//! - [`TraceRecorder`] — append-only step trace with a canonical digest
//! - [`VizState`] — the incremental output surface for the visualization sink

#![forbid(unsafe_code)]

pub mod canon;
pub mod error;
pub mod frontier;
pub mod minimax;
pub mod options;
pub mod session;
pub mod strategy;
pub mod trace;

pub use error::PreconditionError;
pub use frontier::{Frontier, FrontierEntry};
pub use options::{Algorithm, RunOptions};
pub use session::{RunOutcome, RunReport, RunState, RunWarning, SearchSession, StepEmit, VizState};
pub use strategy::Strategy;
pub use trace::{EvalRole, FrontierLine, StepRecord, TraceRecorder};
