//! Searchlab runner: pacing, cancellation, and editor orchestration.
//!
//! The runner drives a [`searchlab_engine::SearchSession`] one step at a
//! time, pausing between steps for human-paced visualization and checking
//! a cancel token at each suspension point. It owns the long-lived editor
//! state ([`Workbench`]) and the contract the visualization layer plugs
//! into ([`VizSink`]); the engine itself stays wall-clock-free.

#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod pacer;
pub mod presets;
pub mod workbench;

pub use config::RunConfig;
pub use driver::{drive, CollectingSink, NullSink, VizSink};
pub use pacer::{CancelToken, DelayPacer, NoDelay, Pacer};
pub use workbench::{ActiveRun, Workbench, WorkbenchError};
