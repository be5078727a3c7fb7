//! Run configuration for a single session.

/// Algorithm selection.
///
/// BFS, DFS, UCS, and A* share one frontier loop and differ only in
/// frontier discipline, neighbor ordering, and duplicate handling; Minimax
/// is a separate recursive evaluator. UCS and A* report optimal costs only
/// for non-negative edge weights — negative weights are accepted as input
/// but the results are then undefined (a documented limitation, not a
/// guarded error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    AStar,
    Minimax,
}

impl Algorithm {
    /// Stable lowercase name, used in trace/config serialization.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ucs => "ucs",
            Self::AStar => "a_star",
            Self::Minimax => "minimax",
        }
    }
}

/// Engine-level options for one run.
///
/// Pacing (step delay) is deliberately absent: the engine exposes one step
/// per call and the runner decides when to call it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Tree-search mode: revisits bounded only by the path cycle guard,
    /// no closed set. Graph-search mode eliminates finalized duplicates.
    pub tree_search: bool,
    /// Emit a [`crate::trace::StepRecord::DuplicateSkipped`] record for
    /// each lazily-discarded UCS/A* frontier entry. Off by default; the
    /// discard itself happens either way and never counts as an expansion.
    pub log_skipped_duplicates: bool,
    /// Minimax only: whether the root is the maximizing player.
    pub root_is_max: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            tree_search: false,
            log_skipped_duplicates: false,
            root_is_max: true,
        }
    }
}
