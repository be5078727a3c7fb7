//! One search run, from precondition check to terminal report.
//!
//! A `SearchSession` owns only transient run state, built from an immutable
//! graph snapshot and a copy of the heuristic table. The editor's
//! long-lived state stays outside; nothing here can mutate it.
//!
//! [`SearchSession::step`] is the single suspension point: one call is one
//! pop/expand/enqueue cycle (or one replayed minimax evaluation), emitting
//! the step record and the updated visualization state. The runner decides
//! pacing and cancellation between calls; tests call
//! [`SearchSession::run_to_completion`] at full speed.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use searchlab_graph::{GraphSnapshot, HeuristicTable, NodeId};

use crate::error::PreconditionError;
use crate::frontier::{Frontier, FrontierEntry};
use crate::minimax;
use crate::options::{Algorithm, RunOptions};
use crate::strategy::{strategy_for, Strategy};
use crate::trace::{FrontierLine, StepRecord, TraceRecorder};

/// Run lifecycle. `Idle` is the absence of a session; a freshly built
/// session is already `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Goal reached, or (Minimax) the tree was fully evaluated.
    Succeeded,
    /// Frontier exhausted without reaching the goal.
    Failed,
    /// Cancelled by the user; emitted state stands, nothing is rolled back.
    Aborted,
}

/// Terminal result of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Goal reached: the solution path and its accumulated cost.
    Goal { path: Vec<NodeId>, cost: f64 },
    /// Frontier exhausted: no route from start to goal. A normal outcome,
    /// not an error.
    NoPath,
    /// Minimax finished: root value and the best line realizing it.
    Minimax { value: f64, best_path: Vec<NodeId> },
    /// The run was cancelled before terminating.
    Aborted,
}

/// Non-fatal advisory raised during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunWarning {
    /// Every minimax value is exactly zero — most likely missing input
    /// rather than a genuine all-zero evaluation.
    AllValuesZero,
}

impl RunWarning {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllValuesZero => "all minimax values are zero; did you enter leaf values?",
        }
    }
}

/// Terminal report: outcome plus any advisories raised along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub warnings: Vec<RunWarning>,
}

/// The incremental output surface consumed by the visualization sink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VizState {
    /// Expanded (closed) node ids.
    pub visited: BTreeSet<NodeId>,
    /// Node ids currently on the frontier.
    pub frontier: BTreeSet<NodeId>,
    /// The path being highlighted: the popped entry's path, or the minimax
    /// path under evaluation.
    pub current_path: Vec<NodeId>,
    /// Per-node computed values (Minimax only; empty otherwise).
    pub values: BTreeMap<NodeId, f64>,
}

impl VizState {
    /// JSON view for the UI boundary.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "current_path": self.current_path.iter().map(NodeId::as_str).collect::<Vec<_>>(),
            "frontier": self.frontier.iter().map(NodeId::as_str).collect::<Vec<_>>(),
            "values": self.values.iter()
                .map(|(k, v)| (k.as_str().to_string(), serde_json::json!(v)))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
            "visited": self.visited.iter().map(NodeId::as_str).collect::<Vec<_>>(),
        })
    }
}

/// What one suspension point emits.
#[derive(Debug, Clone)]
pub struct StepEmit {
    pub record: StepRecord,
    pub viz: VizState,
}

enum Machine {
    /// The shared BFS/DFS/UCS/A* frontier loop.
    Loop(LoopMachine),
    /// Minimax: evaluated eagerly at construction, replayed one record per
    /// step so pacing and cancellation behave uniformly.
    Replay(ReplayMachine),
}

struct LoopMachine {
    strategy: &'static dyn Strategy,
    frontier: Frontier,
    /// Minimal g at which each node was finalized. Graph-search mode only;
    /// entries are written only for nodes actually expanded.
    closed: BTreeMap<NodeId, f64>,
    /// Expanded ids for display, maintained in both modes.
    expanded: BTreeSet<NodeId>,
    goal: NodeId,
    expansions: u64,
    enqueues: u64,
}

struct ReplayMachine {
    pending: VecDeque<(StepRecord, VizState)>,
    final_outcome: RunOutcome,
}

/// A single run over an immutable snapshot.
pub struct SearchSession {
    snapshot: GraphSnapshot,
    heuristics: HeuristicTable,
    options: RunOptions,
    trace: TraceRecorder,
    state: RunState,
    warnings: Vec<RunWarning>,
    machine: Machine,
    outcome: Option<RunOutcome>,
    last_viz: VizState,
}

impl fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSession")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("warnings", &self.warnings)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl SearchSession {
    /// Build a session, failing fast on missing or dangling start/goal
    /// markers. No state is created on error.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::MissingStart`] when no start is set,
    /// [`PreconditionError::MissingGoal`] when no goal is set and the
    /// algorithm is not Minimax, and the `Unknown*` variants when a marker
    /// references a node absent from the snapshot.
    pub fn new(
        snapshot: GraphSnapshot,
        heuristics: HeuristicTable,
        options: RunOptions,
    ) -> Result<Self, PreconditionError> {
        let start = snapshot
            .start
            .clone()
            .ok_or(PreconditionError::MissingStart)?;
        if !snapshot.contains(&start) {
            return Err(PreconditionError::UnknownStart {
                id: start.as_str().to_string(),
            });
        }

        let mut warnings = Vec::new();
        let machine = if options.algorithm == Algorithm::Minimax {
            if heuristics.all_zero() {
                warnings.push(RunWarning::AllValuesZero);
            }
            Machine::Replay(build_replay(&snapshot, &heuristics, &start, options.root_is_max))
        } else {
            let goal = snapshot
                .goal
                .clone()
                .ok_or(PreconditionError::MissingGoal)?;
            if !snapshot.contains(&goal) {
                return Err(PreconditionError::UnknownGoal {
                    id: goal.as_str().to_string(),
                });
            }
            let strategy =
                strategy_for(options.algorithm).expect("every non-minimax algorithm has a strategy");
            let mut frontier = strategy.empty_frontier();
            // h is carried on entries only for A*, the one algorithm that
            // scores with it; the rest store 0 (see FrontierEntry::h).
            let h = if options.algorithm == Algorithm::AStar {
                heuristics.value(&start)
            } else {
                0.0
            };
            frontier.push(FrontierEntry {
                path: vec![start],
                g: 0.0,
                h,
            });
            Machine::Loop(LoopMachine {
                strategy,
                frontier,
                closed: BTreeMap::new(),
                expanded: BTreeSet::new(),
                goal,
                expansions: 0,
                enqueues: 1, // the initial start entry counts
            })
        };

        Ok(Self {
            snapshot,
            heuristics,
            options,
            trace: TraceRecorder::new(),
            state: RunState::Running,
            warnings,
            machine,
            outcome: None,
            last_viz: VizState::default(),
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the run has reached a terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state != RunState::Running
    }

    /// Options echo.
    #[must_use]
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// The trace so far.
    #[must_use]
    pub fn trace(&self) -> &TraceRecorder {
        &self.trace
    }

    /// The last emitted visualization state.
    #[must_use]
    pub fn viz_state(&self) -> &VizState {
        &self.last_viz
    }

    /// Advisories raised so far.
    #[must_use]
    pub fn warnings(&self) -> &[RunWarning] {
        &self.warnings
    }

    /// Terminal report, once finished.
    #[must_use]
    pub fn report(&self) -> Option<RunReport> {
        self.outcome.clone().map(|outcome| RunReport {
            outcome,
            warnings: self.warnings.clone(),
        })
    }

    /// Cancel the run. Takes effect immediately: the session is `Aborted`
    /// and further [`SearchSession::step`] calls return `None`. Emitted
    /// records and the last visualization state remain as the last
    /// observed snapshot.
    pub fn cancel(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Aborted;
            self.outcome = Some(RunOutcome::Aborted);
        }
    }

    /// Run the remaining steps at full speed and return the report.
    ///
    /// # Panics
    ///
    /// Panics only if the session finishes without an outcome, which the
    /// state machine does not allow.
    pub fn run_to_completion(&mut self) -> RunReport {
        while self.step().is_some() {}
        self.report().expect("finished session always has an outcome")
    }

    /// Execute one suspension point. Returns `None` once the run is in a
    /// terminal state; the final emit (goal pop, last minimax record) is
    /// returned by the call that produced it.
    pub fn step(&mut self) -> Option<StepEmit> {
        if self.state != RunState::Running {
            return None;
        }
        if matches!(self.machine, Machine::Loop(_)) {
            self.loop_step()
        } else {
            self.replay_step()
        }
    }

    #[allow(clippy::too_many_lines)]
    fn loop_step(&mut self) -> Option<StepEmit> {
        let Machine::Loop(machine) = &mut self.machine else {
            return None;
        };
        loop {
            if machine.frontier.is_empty() {
                self.state = RunState::Failed;
                self.outcome = Some(RunOutcome::NoPath);
                return None;
            }

            // Snapshot in reading order before the pop.
            let frontier_lines: Vec<FrontierLine> = machine
                .strategy
                .snapshot(&machine.frontier)
                .into_iter()
                .map(FrontierLine::from)
                .collect();

            let Some(entry) = machine.strategy.pop(&mut machine.frontier) else {
                // Unreachable after the emptiness check; treat as exhausted.
                self.state = RunState::Failed;
                self.outcome = Some(RunOutcome::NoPath);
                return None;
            };

            // Lazy duplicate elimination (UCS/A*, graph-search mode):
            // discard entries whose node was already finalized at an
            // equal-or-lower g. Never counted as an expansion.
            if !self.options.tree_search && machine.strategy.lazy_dedup() {
                if let Some(&closed_g) = machine.closed.get(entry.node()) {
                    if closed_g <= entry.g {
                        if self.options.log_skipped_duplicates {
                            let record = StepRecord::DuplicateSkipped {
                                step: self.trace.next_step(),
                                node: entry.node().clone(),
                                g: entry.g,
                            };
                            self.trace.append(record.clone());
                            let viz = VizState {
                                visited: machine.expanded.clone(),
                                frontier: frontier_ids(&machine.frontier),
                                current_path: entry.path,
                                values: BTreeMap::new(),
                            };
                            self.last_viz = viz.clone();
                            return Some(StepEmit { record, viz });
                        }
                        // Silent skip: same suspension point, next pop.
                        continue;
                    }
                }
            }

            machine.expansions += 1;
            let record = StepRecord::Expand {
                step: self.trace.next_step(),
                frontier: frontier_lines,
                chosen: Some(entry.node().clone()),
                expanded: machine.expanded.iter().cloned().collect(),
                expansions: machine.expansions,
                enqueues: machine.enqueues,
            };
            self.trace.append(record.clone());

            if entry.node() == &machine.goal {
                self.state = RunState::Succeeded;
                self.outcome = Some(RunOutcome::Goal {
                    path: entry.path.clone(),
                    cost: entry.g,
                });
                let viz = VizState {
                    visited: machine.expanded.clone(),
                    frontier: frontier_ids(&machine.frontier),
                    current_path: entry.path,
                    values: BTreeMap::new(),
                };
                self.last_viz = viz.clone();
                return Some(StepEmit { record, viz });
            }

            let current = entry.node().clone();
            if !self.options.tree_search {
                // Keep the minimal finalization cost.
                machine
                    .closed
                    .entry(current.clone())
                    .and_modify(|g| {
                        if entry.g < *g {
                            *g = entry.g;
                        }
                    })
                    .or_insert(entry.g);
            }
            machine.expanded.insert(current.clone());

            let mut neighbors = self.snapshot.neighbors(&current);
            machine.strategy.order_neighbors(&mut neighbors);

            for neighbor in neighbors {
                let tentative_g = entry.g + neighbor.weight;
                let h = if self.options.algorithm == Algorithm::AStar {
                    self.heuristics.value(&neighbor.id)
                } else {
                    0.0
                };

                if self.options.tree_search {
                    // Cycle guard only; duplicates across paths are allowed.
                    if entry.path.contains(&neighbor.id) {
                        continue;
                    }
                    let mut path = entry.path.clone();
                    path.push(neighbor.id);
                    machine.frontier.push(FrontierEntry { path, g: tentative_g, h });
                    machine.enqueues += 1;
                } else if machine.strategy.lazy_dedup() {
                    // UCS/A*: always enqueue; the pop-time check discards.
                    let mut path = entry.path.clone();
                    path.push(neighbor.id);
                    machine.frontier.push(FrontierEntry { path, g: tentative_g, h });
                    machine.enqueues += 1;
                } else {
                    // BFS/DFS graph mode: closed-set skip, then in-place
                    // improvement of an existing frontier entry, else push.
                    if let Some(&closed_g) = machine.closed.get(&neighbor.id) {
                        if closed_g <= tentative_g {
                            continue;
                        }
                    }
                    if let Some(existing) = machine.frontier.find_node_mut(&neighbor.id) {
                        if tentative_g < existing.g {
                            existing.g = tentative_g;
                            existing.h = h;
                            existing.path = entry.path.clone();
                            existing.path.push(neighbor.id);
                        }
                        // No enqueue count either way.
                    } else {
                        let mut path = entry.path.clone();
                        path.push(neighbor.id);
                        machine.frontier.push(FrontierEntry { path, g: tentative_g, h });
                        machine.enqueues += 1;
                    }
                }
            }

            let viz = VizState {
                visited: machine.expanded.clone(),
                frontier: frontier_ids(&machine.frontier),
                current_path: entry.path,
                values: BTreeMap::new(),
            };
            self.last_viz = viz.clone();
            return Some(StepEmit { record, viz });
        }
    }

    fn replay_step(&mut self) -> Option<StepEmit> {
        let Machine::Replay(machine) = &mut self.machine else {
            return None;
        };
        let (record, viz) = machine.pending.pop_front()?;
        self.trace.append(record.clone());
        self.last_viz = viz.clone();
        if machine.pending.is_empty() {
            self.state = RunState::Succeeded;
            self.outcome = Some(machine.final_outcome.clone());
        }
        Some(StepEmit { record, viz })
    }
}

fn frontier_ids(frontier: &Frontier) -> BTreeSet<NodeId> {
    frontier.iter().map(|e| e.node().clone()).collect()
}

fn build_replay(
    snapshot: &GraphSnapshot,
    values: &HeuristicTable,
    root: &NodeId,
    root_is_max: bool,
) -> ReplayMachine {
    let (outcome, events) = minimax::evaluate(snapshot, values, root, root_is_max);

    let mut pending = VecDeque::with_capacity(events.len());
    let mut visited = BTreeSet::new();
    let mut computed = BTreeMap::new();
    for (step, event) in events.into_iter().enumerate() {
        visited.insert(event.node.clone());
        computed.insert(event.node.clone(), event.value);
        let record = StepRecord::Evaluate {
            step: step as u64,
            node: event.node,
            role: event.role,
            value: event.value,
        };
        let viz = VizState {
            visited: visited.clone(),
            frontier: BTreeSet::new(),
            current_path: event.path,
            values: computed.clone(),
        };
        pending.push_back((record, viz));
    }

    ReplayMachine {
        pending,
        final_outcome: RunOutcome::Minimax {
            value: outcome.value,
            best_path: outcome.best_path,
        },
    }
}
