//! The search engines.
//!
//! Each engine runs against the abstract [`Maze`](crate::maze::Maze)
//! interface and returns the path as an ordered cell sequence from the
//! start to the terminal state. An empty sequence means the target is
//! unreachable. Every engine owns all of its bookkeeping for the duration
//! of one call; nothing persists between runs.

pub mod astar;
pub mod astar_multi;
pub mod bfs;
pub mod dfs;

use rustc_hash::FxHashSet;

use crate::frontier::Frontier;
use crate::maze::Cell;
use crate::maze::Maze;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// Blind search towards the first objective.
///
/// The frontier decides the expansion order; everything else is shared.
/// Cells are marked visited when enqueued, never re-enqueued, and
/// goal-checked when dequeued.
pub(crate) fn blind_search<M, F>(maze: &M) -> Vec<Cell>
where
    M: Maze,
    F: Frontier,
{
    debug_assert!(!maze.objectives().is_empty());
    let start = maze.start();
    let goal = maze.objectives()[0];

    let mut tree = SearchTree::new();
    let mut frontier = F::default();
    let mut visited: FxHashSet<Cell> = FxHashSet::default();

    visited.insert(start);
    frontier.push(tree.push(SearchTreeNode::new(start, None, 0)));

    let mut expansions = 0usize;
    while let Some(node) = frontier.pop() {
        expansions += 1;
        let state = *tree[node].state();
        if state == goal {
            log::debug!("goal {goal} reached after {expansions} expansions");
            return tree.path(node);
        }

        let g = tree[node].g;
        for n in maze.neighbours(state) {
            if visited.insert(n) {
                frontier.push(tree.push(SearchTreeNode::new(n, Some(node), g + 1)));
            }
        }
    }

    log::debug!("frontier exhausted after {expansions} expansions; {goal} unreachable");
    vec![]
}
