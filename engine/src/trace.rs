//! Append-only step trace for pedagogical replay.
//!
//! The trace is the normative record of a run: one record per suspension
//! point, in order, never rewritten. The visualization layer renders it
//! live; tests hash it. Records are cleared only by starting a new session.

use sha2::{Digest, Sha256};

use searchlab_graph::NodeId;

use crate::canon::canonical_json_bytes;
use crate::frontier::FrontierEntry;

/// Domain prefix for trace digests, so a trace digest can never collide
/// with other sha256 uses.
pub const DOMAIN_STEP_TRACE: &[u8] = b"SEARCHLAB::STEP_TRACE::V1\0";

/// One frontier entry as shown in a step record's snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierLine {
    pub node: NodeId,
    pub path: Vec<NodeId>,
    pub g: f64,
    pub h: f64,
    pub f: f64,
}

impl From<&FrontierEntry> for FrontierLine {
    fn from(entry: &FrontierEntry) -> Self {
        Self {
            node: entry.node().clone(),
            path: entry.path.clone(),
            g: entry.g,
            h: entry.h,
            f: entry.f(),
        }
    }
}

/// Which role a minimax node resolved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalRole {
    Max,
    Min,
    /// No children, or every child was cycle-guarded away.
    Leaf,
}

impl EvalRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
            Self::Leaf => "leaf",
        }
    }
}

/// A single trace record.
#[derive(Debug, Clone, PartialEq)]
pub enum StepRecord {
    /// One frontier pop in the shared loop. The snapshot is taken before
    /// the pop, in reading order (DFS top-to-bottom). `expanded` lists the
    /// nodes finalized before this step; counters are running totals as of
    /// this record.
    Expand {
        step: u64,
        frontier: Vec<FrontierLine>,
        chosen: Option<NodeId>,
        expanded: Vec<NodeId>,
        expansions: u64,
        enqueues: u64,
    },
    /// A lazily-discarded UCS/A* duplicate pop. Emitted only when
    /// [`crate::options::RunOptions::log_skipped_duplicates`] is set; never
    /// counted as an expansion.
    DuplicateSkipped { step: u64, node: NodeId, g: f64 },
    /// One resolved minimax call.
    Evaluate {
        step: u64,
        node: NodeId,
        role: EvalRole,
        value: f64,
    },
}

impl StepRecord {
    /// The record's step index.
    #[must_use]
    pub fn step(&self) -> u64 {
        match self {
            Self::Expand { step, .. }
            | Self::DuplicateSkipped { step, .. }
            | Self::Evaluate { step, .. } => *step,
        }
    }

    /// JSON view for the UI boundary and for digesting.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Expand {
                step,
                frontier,
                chosen,
                expanded,
                expansions,
                enqueues,
            } => serde_json::json!({
                "chosen": chosen.as_ref().map(NodeId::as_str),
                "enqueues": enqueues,
                "expanded": expanded.iter().map(NodeId::as_str).collect::<Vec<_>>(),
                "expansions": expansions,
                "frontier": frontier.iter().map(frontier_line_to_json).collect::<Vec<_>>(),
                "step": step,
                "type": "expand",
            }),
            Self::DuplicateSkipped { step, node, g } => serde_json::json!({
                "g": g,
                "node": node.as_str(),
                "step": step,
                "type": "duplicate_skipped",
            }),
            Self::Evaluate { step, node, role, value } => serde_json::json!({
                "node": node.as_str(),
                "role": role.as_str(),
                "step": step,
                "type": "evaluate",
                "value": value,
            }),
        }
    }
}

fn frontier_line_to_json(line: &FrontierLine) -> serde_json::Value {
    serde_json::json!({
        "f": line.f,
        "g": line.g,
        "h": line.h,
        "node": line.node.as_str(),
        "path": line.path.iter().map(NodeId::as_str).collect::<Vec<_>>(),
    })
}

/// Append-only recorder for a single run.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    records: Vec<StepRecord>,
}

impl TraceRecorder {
    /// A fresh, empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The next step index.
    #[must_use]
    pub fn next_step(&self) -> u64 {
        self.records.len() as u64
    }

    /// Append a record.
    pub fn append(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// All records, in emission order.
    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// JSON view of the whole trace.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "records": self.records.iter().map(StepRecord::to_json_value).collect::<Vec<_>>(),
        })
    }

    /// Hex sha256 digest over the canonical JSON of the trace.
    ///
    /// Two runs with identical inputs must produce identical digests; the
    /// determinism tests lock on this.
    #[must_use]
    pub fn digest(&self) -> String {
        let bytes = canonical_json_bytes(&self.to_json_value());
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_STEP_TRACE);
        hasher.update(&bytes);
        hex::encode(hasher.finalize())
    }
}
