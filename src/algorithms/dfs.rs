use crate::frontier::LifoFrontier;
use crate::maze::Cell;
use crate::maze::Maze;

/// Some path from the start to the first objective, not necessarily the
/// shortest one.
///
/// The visited-on-enqueue discipline means no cell is ever expanded twice,
/// so the result is a simple path; there is no backtracking to undo.
/// Returns an empty sequence when the objective is unreachable.
#[must_use]
pub fn dfs<M: Maze>(maze: &M) -> Vec<Cell> {
    super::blind_search::<M, LifoFrontier>(maze)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use rustc_hash::FxHashSet;

    use super::*;
    use crate::algorithms::bfs::bfs;
    use crate::algorithms::test_util::assert_connected;
    use crate::maze::GridMaze;

    #[test]
    fn finds_a_simple_path() {
        let maze = GridMaze::try_from(indoc! {"
            S....
            .###.
            .#...
            .#.#.
            ...#G
        "})
        .unwrap();

        let path = dfs(&maze);
        assert_connected(&maze, &path);
        assert_eq!(*path.last().unwrap(), Cell::new(4, 4));

        // A simple path never revisits a cell.
        let distinct: FxHashSet<Cell> = path.iter().copied().collect();
        assert_eq!(distinct.len(), path.len());

        // Reachability agrees with BFS, length may not.
        assert!(path.len() >= bfs(&maze).len());
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        let maze = GridMaze::try_from(indoc! {"
            S.#G
            ..##
            ....
        "})
        .unwrap();

        assert!(dfs(&maze).is_empty());
    }

    #[test]
    fn repeated_runs_agree() {
        let maze = GridMaze::try_from(indoc! {"
            S....
            .###.
            ....G
        "})
        .unwrap();

        assert_eq!(dfs(&maze), dfs(&maze));
    }
}
