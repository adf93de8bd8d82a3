use crate::frontier::FifoFrontier;
use crate::maze::Cell;
use crate::maze::Maze;

/// Shortest path in edge count from the start to the first objective.
///
/// Returns an empty sequence when the objective is unreachable.
#[must_use]
pub fn bfs<M: Maze>(maze: &M) -> Vec<Cell> {
    super::blind_search::<M, FifoFrontier>(maze)
}
