//! A path-finding kernel for 2-D grid mazes.
//!
//! The engines only see the [`maze::Maze`] query interface (a start cell,
//! objective cells, and passable neighbours) and return the path as an
//! ordered cell sequence. An empty sequence means the objectives are
//! unreachable; configuration problems surface as [`dispatch::SearchError`].

// Internals
// ---------
pub mod frontier;
pub mod search;

// Search space
// ------------
pub mod heuristic;
pub mod maze;

// Algorithms
// ----------
pub mod algorithms;

// Entry point
// -----------
pub mod dispatch;

pub use crate::dispatch::Method;
pub use crate::dispatch::SearchError;
pub use crate::dispatch::search;
pub use crate::maze::Cell;
pub use crate::maze::Maze;
