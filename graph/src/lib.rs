//! Searchlab graph layer: editor store, run snapshot, heuristic table.
//!
//! This crate holds the data model for the search visualizer. It has no
//! dependency on the engine — the dependency arrow points the other way:
//!
//! ```text
//! searchlab_graph  ←  searchlab_engine  ←  searchlab_runner
//! (store, snapshot)   (frontier, session)   (pacing, presets)
//! ```
//!
//! # Key types
//!
//! - [`NodeId`] — short string node identifier with lexicographic ordering
//! - [`GraphStore`] — the long-lived mutable editor state
//! - [`GraphSnapshot`] — the immutable view a single run consumes
//! - [`HeuristicTable`] — per-node heuristic estimates or minimax leaf values

#![forbid(unsafe_code)]

pub mod heuristics;
pub mod id;
pub mod snapshot;
pub mod store;

pub use heuristics::HeuristicTable;
pub use id::NodeId;
pub use snapshot::{EdgeSpec, GraphSnapshot, Neighbor, NodeSpec};
pub use store::{EditError, GraphStore};
