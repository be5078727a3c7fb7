//! Per-algorithm frontier discipline.
//!
//! BFS, DFS, UCS, and A* differ only in how they order the frontier, how
//! they order a node's neighbors before generation, and how duplicates are
//! eliminated. Those three decisions live behind [`Strategy`]; the session
//! loop stays algorithm-agnostic. Minimax never enters the shared loop and
//! has no strategy ([`strategy_for`] returns `None` for it).

use std::cmp::Ordering;
use std::collections::VecDeque;

use searchlab_graph::Neighbor;

use crate::frontier::{Frontier, FrontierEntry};
use crate::options::Algorithm;

/// Frontier/neighbor/duplicate policy for one of the four loop algorithms.
pub trait Strategy {
    /// A fresh frontier with this algorithm's storage discipline.
    fn empty_frontier(&self) -> Frontier;

    /// Remove and return the next entry to expand.
    fn pop(&self, frontier: &mut Frontier) -> Option<FrontierEntry>;

    /// Order neighbors before generation.
    ///
    /// - BFS: ascending id.
    /// - DFS: descending id, so the smallest id lands on top of the stack.
    /// - UCS/A*: ascending edge weight, tie ascending id.
    fn order_neighbors(&self, neighbors: &mut [Neighbor]);

    /// Lazy duplicate elimination at pop time (UCS/A*): duplicates are
    /// always enqueued and discarded when popped after their node was
    /// closed at an equal-or-lower g. When `false` (BFS/DFS) duplicates
    /// are handled at enqueue time via the closed-set skip plus
    /// strictly-better in-place frontier replacement.
    fn lazy_dedup(&self) -> bool;

    /// The frontier as a human reads it at pop time: queue front-to-back,
    /// stack top-to-bottom, ordered pool best-first.
    fn snapshot<'a>(&self, frontier: &'a Frontier) -> Vec<&'a FrontierEntry>;
}

/// UCS ordering: ascending g, tie ascending node id, then ascending path.
fn cmp_ucs(a: &FrontierEntry, b: &FrontierEntry) -> Ordering {
    a.g.total_cmp(&b.g)
        .then_with(|| a.node().cmp(b.node()))
        .then_with(|| a.path_key().cmp(&b.path_key()))
}

/// A* ordering: ascending f, tie ascending node id, then ascending path.
fn cmp_a_star(a: &FrontierEntry, b: &FrontierEntry) -> Ordering {
    a.f()
        .total_cmp(&b.f())
        .then_with(|| a.node().cmp(b.node()))
        .then_with(|| a.path_key().cmp(&b.path_key()))
}

struct Bfs;
struct Dfs;
struct Ucs;
struct AStar;

impl Strategy for Bfs {
    fn empty_frontier(&self) -> Frontier {
        Frontier::Fifo(VecDeque::new())
    }

    fn pop(&self, frontier: &mut Frontier) -> Option<FrontierEntry> {
        frontier.pop_with(cmp_ucs) // comparator unused by FIFO
    }

    fn order_neighbors(&self, neighbors: &mut [Neighbor]) {
        neighbors.sort_by(|a, b| a.id.cmp(&b.id));
    }

    fn lazy_dedup(&self) -> bool {
        false
    }

    fn snapshot<'a>(&self, frontier: &'a Frontier) -> Vec<&'a FrontierEntry> {
        frontier.iter().collect()
    }
}

impl Strategy for Dfs {
    fn empty_frontier(&self) -> Frontier {
        Frontier::Lifo(Vec::new())
    }

    fn pop(&self, frontier: &mut Frontier) -> Option<FrontierEntry> {
        frontier.pop_with(cmp_ucs) // comparator unused by LIFO
    }

    fn order_neighbors(&self, neighbors: &mut [Neighbor]) {
        // Descending, so that after pushing in order the smallest id is on
        // top of the stack and pops first.
        neighbors.sort_by(|a, b| b.id.cmp(&a.id));
    }

    fn lazy_dedup(&self) -> bool {
        false
    }

    fn snapshot<'a>(&self, frontier: &'a Frontier) -> Vec<&'a FrontierEntry> {
        // Top-to-bottom: reverse of internal stack storage.
        let mut entries: Vec<&FrontierEntry> = frontier.iter().collect();
        entries.reverse();
        entries
    }
}

impl Strategy for Ucs {
    fn empty_frontier(&self) -> Frontier {
        Frontier::Ordered(Vec::new())
    }

    fn pop(&self, frontier: &mut Frontier) -> Option<FrontierEntry> {
        frontier.pop_with(cmp_ucs)
    }

    fn order_neighbors(&self, neighbors: &mut [Neighbor]) {
        neighbors.sort_by(|a, b| a.weight.total_cmp(&b.weight).then_with(|| a.id.cmp(&b.id)));
    }

    fn lazy_dedup(&self) -> bool {
        true
    }

    fn snapshot<'a>(&self, frontier: &'a Frontier) -> Vec<&'a FrontierEntry> {
        let mut entries: Vec<&FrontierEntry> = frontier.iter().collect();
        entries.sort_by(|a, b| cmp_ucs(a, b));
        entries
    }
}

impl Strategy for AStar {
    fn empty_frontier(&self) -> Frontier {
        Frontier::Ordered(Vec::new())
    }

    fn pop(&self, frontier: &mut Frontier) -> Option<FrontierEntry> {
        frontier.pop_with(cmp_a_star)
    }

    fn order_neighbors(&self, neighbors: &mut [Neighbor]) {
        neighbors.sort_by(|a, b| a.weight.total_cmp(&b.weight).then_with(|| a.id.cmp(&b.id)));
    }

    fn lazy_dedup(&self) -> bool {
        true
    }

    fn snapshot<'a>(&self, frontier: &'a Frontier) -> Vec<&'a FrontierEntry> {
        let mut entries: Vec<&FrontierEntry> = frontier.iter().collect();
        entries.sort_by(|a, b| cmp_a_star(a, b));
        entries
    }
}

/// The strategy for an algorithm, or `None` for Minimax.
#[must_use]
pub fn strategy_for(algorithm: Algorithm) -> Option<&'static dyn Strategy> {
    match algorithm {
        Algorithm::Bfs => Some(&Bfs),
        Algorithm::Dfs => Some(&Dfs),
        Algorithm::Ucs => Some(&Ucs),
        Algorithm::AStar => Some(&AStar),
        Algorithm::Minimax => None,
    }
}
