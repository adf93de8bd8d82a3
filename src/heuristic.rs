//! Admissible cost estimates for the A* variants.

use rustc_hash::FxHashMap;

use crate::maze::Cell;
use crate::search::Cost;

/// Largest objective count the multi-goal bitmask can track.
pub const MAX_GOALS: usize = 32;

/// The objectives still unvisited, as a bitmask over a fixed objective
/// ordering.
///
/// Equality and hashing of a (cell, mask) search state stay cheap, and the
/// mask doubles as the memoisation key for [`MstHeuristic`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GoalMask(u32);

impl GoalMask {
    pub const EMPTY: GoalMask = GoalMask(0);

    /// The mask with the first `n` objectives still unvisited.
    #[must_use]
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= MAX_GOALS);
        if n == MAX_GOALS {
            Self(u32::MAX)
        } else {
            Self((1u32 << n) - 1)
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        debug_assert!(index < MAX_GOALS);
        self.0 & (1u32 << index) != 0
    }

    #[inline(always)]
    #[must_use]
    pub fn without(&self, index: usize) -> Self {
        debug_assert!(index < MAX_GOALS);
        Self(self.0 & !(1u32 << index))
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Indices of the objectives still in the mask, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let mask = self.0;
        (0..MAX_GOALS).filter(move |i| mask & (1u32 << i) != 0)
    }
}

/// Lower bound on the cost of visiting every remaining objective.
///
/// For a cell `c` and remaining set `R` the estimate is the weight of a
/// minimum spanning tree over `R` (pairwise Manhattan edge weights) plus
/// the Manhattan distance from `c` to the nearest member of `R`; zero when
/// `R` is empty. Any tour through `R` walks at least the MST weight among
/// the goals after first reaching one of them, and grid distances are
/// never below Manhattan distance, so the bound is admissible.
#[derive(Debug)]
pub struct MstHeuristic {
    goals: Vec<Cell>,
    // A* asks about the same mask for many cells; the MST weight only
    // depends on the mask.
    mst_cache: FxHashMap<GoalMask, Cost>,
}

impl MstHeuristic {
    #[must_use]
    pub fn new(goals: Vec<Cell>) -> Self {
        debug_assert!(goals.len() <= MAX_GOALS);
        Self {
            goals,
            mst_cache: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn estimate(&mut self, cell: Cell, remaining: GoalMask) -> Cost {
        if remaining.is_empty() {
            return 0;
        }
        let nearest = remaining
            .iter()
            .map(|i| cell.manhattan_distance(&self.goals[i]))
            .min()
            .unwrap_or(0);
        nearest + self.mst_weight(remaining)
    }

    /// Prim's algorithm over the masked objectives, memoised per mask.
    fn mst_weight(&mut self, mask: GoalMask) -> Cost {
        if let Some(&w) = self.mst_cache.get(&mask) {
            return w;
        }

        let members: Vec<Cell> = mask.iter().map(|i| self.goals[i]).collect();
        let mut in_tree = vec![false; members.len()];
        let mut best = vec![Cost::MAX; members.len()];
        best[0] = 0;

        let mut weight: Cost = 0;
        for _ in 0..members.len() {
            // Pull the cheapest fringe vertex into the tree.
            let mut next = None;
            for (i, &cost) in best.iter().enumerate() {
                if !in_tree[i] && next.is_none_or(|(_, c)| cost < c) {
                    next = Some((i, cost));
                }
            }
            let Some((i, cost)) = next else { break };
            in_tree[i] = true;
            weight += cost;

            for (j, b) in best.iter_mut().enumerate() {
                if !in_tree[j] {
                    *b = (*b).min(members[i].manhattan_distance(&members[j]));
                }
            }
        }

        self.mst_cache.insert(mask, weight);
        weight
    }
}
