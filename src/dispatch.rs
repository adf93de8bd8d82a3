//! Maps a search-method name to its engine and runs it.

use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

use crate::algorithms::astar::astar;
use crate::algorithms::astar_multi::astar_multi;
use crate::algorithms::bfs::bfs;
use crate::algorithms::dfs::dfs;
use crate::heuristic::MAX_GOALS;
use crate::maze::Cell;
use crate::maze::Maze;

/// The available search engines.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Method {
    #[display("bfs")]
    Bfs,
    #[display("dfs")]
    Dfs,
    #[display("astar")]
    AStar,
    #[display("astar_multi")]
    AStarMulti,
}

#[derive(Debug, Error)]
pub enum SearchError {
    /// Distinct from an empty path: the caller asked for an engine that
    /// does not exist.
    #[error("Unknown search method '{0}'")]
    UnknownMethod(String),
    #[error("Maze has no objectives")]
    NoObjectives,
    #[error("Multi-goal search handles up to {MAX_GOALS} objectives, got {0}")]
    TooManyObjectives(usize),
}

impl FromStr for Method {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Method::Bfs),
            "dfs" => Ok(Method::Dfs),
            "astar" => Ok(Method::AStar),
            "astar_multi" => Ok(Method::AStarMulti),
            s => Err(SearchError::UnknownMethod(s.to_string())),
        }
    }
}

/// Runs the engine named by `method` against `maze`.
///
/// An empty path means the objectives are unreachable; configuration
/// problems (unknown method, malformed maze) are reported as errors
/// before any engine runs.
pub fn search<M: Maze>(maze: &M, method: &str) -> Result<Vec<Cell>, SearchError> {
    run(maze, method.parse()?)
}

/// Runs an already-selected engine against `maze`.
pub fn run<M: Maze>(maze: &M, method: Method) -> Result<Vec<Cell>, SearchError> {
    if maze.objectives().is_empty() {
        return Err(SearchError::NoObjectives);
    }
    if method == Method::AStarMulti && maze.objectives().len() > MAX_GOALS {
        return Err(SearchError::TooManyObjectives(maze.objectives().len()));
    }

    log::debug!("dispatching {method} over {} objectives", maze.objectives().len());
    Ok(match method {
        Method::Bfs => bfs(maze),
        Method::Dfs => dfs(maze),
        Method::AStar => astar(maze),
        Method::AStarMulti => astar_multi(maze),
    })
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::maze::GridMaze;
    use crate::maze::Neighbours;

    #[test]
    fn method_names_round_trip() {
        for method in [Method::Bfs, Method::Dfs, Method::AStar, Method::AStarMulti] {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn unknown_method_is_an_error() {
        let maze = GridMaze::try_from("S.G\n").unwrap();
        assert!(matches!(
            search(&maze, "bogo"),
            Err(SearchError::UnknownMethod(name)) if name == "bogo"
        ));
    }

    #[test]
    fn runs_every_engine() {
        let maze = GridMaze::try_from(indoc! {"
            S....
            .###.
            .G..G
        "})
        .unwrap();

        for method in ["bfs", "dfs", "astar", "astar_multi"] {
            let path = search(&maze, method).unwrap();
            assert!(!path.is_empty(), "{method} found no path");
            assert_eq!(path[0], maze.start());
        }

        // The optimal engines agree on length against the first objective.
        assert_eq!(
            search(&maze, "bfs").unwrap().len(),
            search(&maze, "astar").unwrap().len()
        );
    }

    #[test]
    fn rejects_a_maze_without_objectives() {
        struct NoGoals;
        impl Maze for NoGoals {
            fn start(&self) -> Cell {
                Cell::new(0, 0)
            }
            fn objectives(&self) -> &[Cell] {
                &[]
            }
            fn neighbours(&self, _cell: Cell) -> Neighbours {
                Neighbours::new()
            }
        }

        assert!(matches!(
            search(&NoGoals, "bfs"),
            Err(SearchError::NoObjectives)
        ));
    }

    #[test]
    fn rejects_too_many_objectives_for_multi_goal() {
        struct ManyGoals(Vec<Cell>);
        impl Maze for ManyGoals {
            fn start(&self) -> Cell {
                Cell::new(0, 0)
            }
            fn objectives(&self) -> &[Cell] {
                &self.0
            }
            fn neighbours(&self, _cell: Cell) -> Neighbours {
                Neighbours::new()
            }
        }

        let goals = (0..=MAX_GOALS as u32).map(|c| Cell::new(0, c)).collect();
        assert!(matches!(
            run(&ManyGoals(goals), Method::AStarMulti),
            Err(SearchError::TooManyObjectives(n)) if n == MAX_GOALS + 1
        ));
    }
}
