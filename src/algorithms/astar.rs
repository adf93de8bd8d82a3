use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::frontier::OpenList;
use crate::maze::Cell;
use crate::maze::Maze;
use crate::search::NodeId;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// Cost-optimal path in edge count from the start to the first objective.
///
/// Uses the Manhattan distance to the objective, which is admissible and
/// consistent on a 4-connected unit-cost grid, so a closed cell is never
/// re-expanded. Returns an empty sequence when the objective is
/// unreachable.
#[must_use]
pub fn astar<M: Maze>(maze: &M) -> Vec<Cell> {
    debug_assert!(!maze.objectives().is_empty());
    let start = maze.start();
    let goal = maze.objectives()[0];

    let mut tree = SearchTree::new();
    let mut open = OpenList::default();
    let mut node_map: FxHashMap<Cell, NodeId> = FxHashMap::default();
    let mut closed: FxHashSet<Cell> = FxHashSet::default();

    let root = tree.push(SearchTreeNode::new(start, None, 0));
    node_map.insert(start, root);
    open.push(0, start.manhattan_distance(&goal), root);

    while let Some((rank, node)) = open.pop() {
        let state = *tree[node].state();
        if closed.contains(&state) || rank.g() > tree[node].g {
            // Stale entry, superseded by a better path to the same cell.
            continue;
        }
        if state == goal {
            log::debug!("goal {goal} reached, g={}, |tree|={}", tree[node].g, tree.len());
            return tree.path(node);
        }
        closed.insert(state);

        let g = tree[node].g;
        for n in maze.neighbours(state) {
            if closed.contains(&n) {
                continue;
            }
            let tentative = g + 1;
            match node_map.get(&n).copied() {
                Some(existing) => {
                    if tentative < tree[existing].g {
                        tree[existing].reach(node, tentative);
                        open.push(tentative, n.manhattan_distance(&goal), existing);
                    }
                }
                None => {
                    let id = tree.push(SearchTreeNode::new(n, Some(node), tentative));
                    node_map.insert(n, id);
                    open.push(tentative, n.manhattan_distance(&goal), id);
                }
            }
        }
    }

    log::debug!("open set exhausted, {goal} unreachable");
    vec![]
}
