use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::frontier::OpenList;
use crate::heuristic::GoalMask;
use crate::heuristic::MstHeuristic;
use crate::maze::Cell;
use crate::maze::Maze;
use crate::search::NodeId;
use crate::search::SearchState;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// A state of the objective-visiting problem: where we are, and which
/// objectives are still unvisited.
///
/// Two states are equal iff both components are equal, so the same cell
/// can be expanded once per remaining set. The state space is
/// |grid| * 2^|objectives|.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultiGoalState {
    pub cell: Cell,
    pub remaining: GoalMask,
}

impl SearchState for MultiGoalState {}

/// Cost-optimal path that starts at the start cell, visits every
/// objective at least once in any order, and ends at the last objective
/// visited.
///
/// A* over the augmented (cell, remaining objectives) space, with the
/// MST-plus-nearest-objective bound from [`MstHeuristic`]. Returns an
/// empty sequence when some objective is unreachable.
#[must_use]
pub fn astar_multi<M: Maze>(maze: &M) -> Vec<Cell> {
    let start = maze.start();
    let goals = maze.objectives().to_vec();
    debug_assert!(!goals.is_empty());
    debug_assert!(goals.len() <= crate::heuristic::MAX_GOALS);

    let goal_index: FxHashMap<Cell, usize> =
        goals.iter().enumerate().map(|(i, &g)| (g, i)).collect();

    // Starting on an objective counts as visiting it.
    let mut remaining = GoalMask::full(goals.len());
    let mut heuristic = MstHeuristic::new(goals);
    if let Some(&i) = goal_index.get(&start) {
        remaining = remaining.without(i);
    }

    let mut tree = SearchTree::new();
    let mut open = OpenList::default();
    let mut node_map: FxHashMap<MultiGoalState, NodeId> = FxHashMap::default();
    let mut closed: FxHashSet<MultiGoalState> = FxHashSet::default();

    let root_state = MultiGoalState {
        cell: start,
        remaining,
    };
    let root = tree.push(SearchTreeNode::new(root_state, None, 0));
    node_map.insert(root_state, root);
    open.push(0, heuristic.estimate(start, remaining), root);

    while let Some((rank, node)) = open.pop() {
        let state = *tree[node].state();
        if closed.contains(&state) || rank.g() > tree[node].g {
            continue;
        }
        if state.remaining.is_empty() {
            log::debug!(
                "all objectives visited, g={}, |tree|={}",
                tree[node].g,
                tree.len()
            );
            return tree.path(node).into_iter().map(|s| s.cell).collect();
        }
        closed.insert(state);

        let g = tree[node].g;
        for n in maze.neighbours(state.cell) {
            // Walking onto an objective removes it from the remaining set.
            let mask = match goal_index.get(&n) {
                Some(&i) => state.remaining.without(i),
                None => state.remaining,
            };
            let succ = MultiGoalState {
                cell: n,
                remaining: mask,
            };
            if closed.contains(&succ) {
                continue;
            }

            let tentative = g + 1;
            match node_map.get(&succ).copied() {
                Some(existing) => {
                    if tentative < tree[existing].g {
                        tree[existing].reach(node, tentative);
                        open.push(tentative, heuristic.estimate(n, mask), existing);
                    }
                }
                None => {
                    let id = tree.push(SearchTreeNode::new(succ, Some(node), tentative));
                    node_map.insert(succ, id);
                    open.push(tentative, heuristic.estimate(n, mask), id);
                }
            }
        }
    }

    log::debug!("open set exhausted, some objective is unreachable");
    vec![]
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use rustc_hash::FxHashSet;

    use super::*;
    use crate::algorithms::astar::astar;
    use crate::algorithms::test_util::assert_connected;
    use crate::algorithms::test_util::point_to_point_moves;
    use crate::maze::GridMaze;

    /// Cheapest visiting-order tour by brute force over goal
    /// permutations, in moves. `None` when some leg is unreachable.
    fn brute_force_moves(text: &str, maze: &GridMaze) -> Option<usize> {
        let goals = maze.objectives().to_vec();
        assert!(goals.len() <= 4, "brute force only scales to a few goals");

        let mut order: Vec<usize> = (0..goals.len()).collect();
        let mut best: Option<usize> = None;
        permute(&mut order, 0, &mut |order| {
            let mut total = 0usize;
            let mut from = maze.start();
            for &i in order {
                match point_to_point_moves(text, from, goals[i]) {
                    Some(moves) => total += moves,
                    None => return,
                }
                from = goals[i];
            }
            best = Some(best.map_or(total, |b| b.min(total)));
        });
        best
    }

    fn permute(order: &mut Vec<usize>, k: usize, f: &mut impl FnMut(&[usize])) {
        if k == order.len() {
            f(order);
            return;
        }
        for i in k..order.len() {
            order.swap(k, i);
            permute(order, k + 1, f);
            order.swap(k, i);
        }
    }

    fn assert_visits_all(maze: &GridMaze, path: &[Cell]) {
        let cells: FxHashSet<Cell> = path.iter().copied().collect();
        for goal in maze.objectives() {
            assert!(cells.contains(goal), "{goal} was never visited");
        }
        // The tour ends on the objective visited last.
        assert!(maze.objectives().contains(path.last().unwrap()));
    }

    #[test]
    fn opposite_corners_tour() {
        let text = indoc! {"
            ....G
            .....
            .....
            .....
            G...S
        "};
        let maze = GridMaze::try_from(text).unwrap();
        // The start sits in a corner between the two goals; the cheapest
        // tour walks 4 to one corner and 8 across to the other.
        let path = astar_multi(&maze);
        assert_eq!(path.len() - 1, 12);
        assert_connected(&maze, &path);
        assert_visits_all(&maze, &path);
    }

    #[test]
    fn single_objective_degenerates_to_plain_astar() {
        let text = indoc! {"
            S..#.
            .#.#.
            .#...
            .#.#.
            ...#G
        "};
        let maze = GridMaze::try_from(text).unwrap();
        assert_eq!(astar_multi(&maze).len(), astar(&maze).len());
    }

    #[test]
    fn start_on_an_objective() {
        let maze = GridMaze::try_from("G..S\n").unwrap();
        struct StartGoal(GridMaze);
        impl Maze for StartGoal {
            fn start(&self) -> Cell {
                self.0.objectives()[0]
            }
            fn objectives(&self) -> &[Cell] {
                self.0.objectives()
            }
            fn neighbours(&self, cell: Cell) -> crate::maze::Neighbours {
                self.0.neighbours(cell)
            }
        }

        // The only objective is already visited: a one-cell path.
        let path = astar_multi(&StartGoal(maze));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn matches_brute_force_on_small_tours() {
        for text in [
            indoc! {"
                G...G
                .....
                ..S..
                .....
                G...G
            "},
            indoc! {"
                G.#.G
                ..#..
                S....
                ..#..
                G.#..
            "},
            indoc! {"
                S....
                .###.
                .G#G.
                .###.
                ....G
            "},
        ] {
            let maze = GridMaze::try_from(text).unwrap();
            let path = astar_multi(&maze);
            let best = brute_force_moves(text, &maze).unwrap();
            assert_eq!(path.len() - 1, best, "maze:\n{text}");
            assert_connected(&maze, &path);
            assert_visits_all(&maze, &path);
        }
    }

    #[test]
    fn unreachable_objective_empties_the_result() {
        let maze = GridMaze::try_from(indoc! {"
            S..#G
            ...##
            ..G..
        "})
        .unwrap();

        assert!(astar_multi(&maze).is_empty());
    }

    #[test]
    fn repeated_runs_agree() {
        let maze = GridMaze::try_from(indoc! {"
            G...G
            .....
            ..S..
        "})
        .unwrap();

        assert_eq!(astar_multi(&maze), astar_multi(&maze));
    }
}
