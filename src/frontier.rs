//! Frontier structures: FIFO and LIFO frontiers for the blind searches,
//! and the ranked open list for the A* variants.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use crate::search::Cost;
use crate::search::NodeId;

/// Expansion-order policy of the blind searches.
pub trait Frontier: Default {
    fn push(&mut self, id: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
}

/// Expands the oldest node first (BFS).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    #[inline(always)]
    fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }
}

/// Expands the most recently pushed node first (DFS).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    #[inline(always)]
    fn push(&mut self, id: NodeId) {
        self.stack.push(id);
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }
}

/// The ranking tuple for A*.
///
/// We prefer better f-values and tie-break for lower h; remaining ties go
/// to the oldest entry, so pop order is fully deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank {
    f: Cost,
    h: Cost,
    seq: u32,
}

impl Rank {
    #[must_use]
    fn new(g: Cost, h: Cost, seq: u32) -> Self {
        Self {
            f: g.saturating_add(h),
            h,
            seq,
        }
    }

    /// The g-value this entry was pushed with.
    #[inline(always)]
    #[must_use]
    pub fn g(&self) -> Cost {
        self.f - self.h
    }
}

#[derive(Copy, Clone, Debug)]
struct OpenEntry {
    rank: Rank,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for OpenEntry {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// The A* open set.
///
/// Entries are immutable once pushed. Reaching a node through a better
/// path pushes a fresh entry; the stale one is recognised at pop time by
/// comparing its g-value against the node's current g.
#[derive(Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<Reverse<OpenEntry>>,
    next_seq: u32,
}

impl OpenList {
    pub fn push(&mut self, g: Cost, h: Cost, node: NodeId) {
        let rank = Rank::new(g, h, self.next_seq);
        self.next_seq += 1;
        self.heap.push(Reverse(OpenEntry { rank, node }));
    }

    /// The entry with the least rank.
    #[must_use]
    pub fn pop(&mut self) -> Option<(Rank, NodeId)> {
        self.heap.pop().map(|Reverse(e)| (e.rank, e.node))
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
