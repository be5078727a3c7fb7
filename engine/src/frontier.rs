//! Frontier containers, one per discipline.
//!
//! Sharing a single array between stack-pop and queue-shift is exactly the
//! hidden-ordering-bug factory this module exists to avoid: BFS gets a real
//! FIFO queue, DFS a real LIFO stack, and UCS/A* an ordered pool whose pop
//! applies the strategy's comparator. Entries retain full paths, so
//! tree-search history and final-path reconstruction need no back-pointers.

use std::cmp::Ordering;
use std::collections::VecDeque;

use searchlab_graph::NodeId;

/// A discovered-but-not-yet-expanded search entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry {
    /// Node ids from the start to this node, inclusive.
    pub path: Vec<NodeId>,
    /// Accumulated path cost.
    pub g: f64,
    /// Heuristic at this node. Only A* scores with h; every other
    /// algorithm stores 0 here so its frontier display never shows an
    /// estimate it did not use.
    pub h: f64,
}

impl FrontierEntry {
    /// `f = g + h`, the A* ordering key.
    #[must_use]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// The entry's node: the last element of its path.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty, which no constructor in this crate
    /// produces.
    #[must_use]
    pub fn node(&self) -> &NodeId {
        self.path.last().expect("frontier entry path is never empty")
    }

    /// The path joined with `->`, the last tie-break key for UCS/A*.
    #[must_use]
    pub fn path_key(&self) -> String {
        let parts: Vec<&str> = self.path.iter().map(NodeId::as_str).collect();
        parts.join("->")
    }
}

/// The frontier, with storage discipline fixed at construction.
#[derive(Debug, Clone)]
pub enum Frontier {
    /// Strict FIFO queue (BFS): push back, pop front.
    Fifo(VecDeque<FrontierEntry>),
    /// Strict LIFO stack (DFS): push back, pop back.
    Lifo(Vec<FrontierEntry>),
    /// Ordered pool (UCS/A*): pop = minimum under a comparator, stable for
    /// equal keys.
    Ordered(Vec<FrontierEntry>),
}

impl Frontier {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Fifo(q) => q.len(),
            Self::Lifo(s) | Self::Ordered(s) => s.len(),
        }
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an entry under the container's discipline.
    pub fn push(&mut self, entry: FrontierEntry) {
        match self {
            Self::Fifo(q) => q.push_back(entry),
            Self::Lifo(s) | Self::Ordered(s) => s.push(entry),
        }
    }

    /// Pop under the discipline: FIFO front, LIFO top, Ordered minimum per
    /// `cmp` (first occurrence wins among equals).
    pub fn pop_with(
        &mut self,
        cmp: impl Fn(&FrontierEntry, &FrontierEntry) -> Ordering,
    ) -> Option<FrontierEntry> {
        match self {
            Self::Fifo(q) => q.pop_front(),
            Self::Lifo(s) => s.pop(),
            Self::Ordered(s) => {
                let mut best = 0;
                for i in 1..s.len() {
                    if cmp(&s[i], &s[best]) == Ordering::Less {
                        best = i;
                    }
                }
                if s.is_empty() {
                    None
                } else {
                    Some(s.remove(best))
                }
            }
        }
    }

    /// Entries in internal storage order.
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> {
        match self {
            Self::Fifo(q) => FrontierIter::Fifo(q.iter()),
            Self::Lifo(s) | Self::Ordered(s) => FrontierIter::Slice(s.iter()),
        }
    }

    /// Mutable access to the entry for a node, if any (BFS/DFS in-place
    /// improvement).
    pub fn find_node_mut(&mut self, id: &NodeId) -> Option<&mut FrontierEntry> {
        match self {
            Self::Fifo(q) => q.iter_mut().find(|e| e.node() == id),
            Self::Lifo(s) | Self::Ordered(s) => s.iter_mut().find(|e| e.node() == id),
        }
    }
}

enum FrontierIter<'a> {
    Fifo(std::collections::vec_deque::Iter<'a, FrontierEntry>),
    Slice(std::slice::Iter<'a, FrontierEntry>),
}

impl<'a> Iterator for FrontierIter<'a> {
    type Item = &'a FrontierEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Fifo(it) => it.next(),
            Self::Slice(it) => it.next(),
        }
    }
}
