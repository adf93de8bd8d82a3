//! Cells and the maze query interface the engines run against.

use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

use crate::search::Cost;
use crate::search::SearchState;

const MAX_LINES_DISPLAYED: usize = 40;

/// A maze position as a (row, column) pair.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({row},{col})")]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline(always)]
    #[must_use]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The distance of following straight lines.
    ///
    /// A lower bound on the walking distance of a 4-connected unit-cost
    /// grid, and exact on an open one.
    #[inline(always)]
    #[must_use]
    pub fn manhattan_distance(&self, other: &Cell) -> Cost {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl SearchState for Cell {}

/// Up to four orthogonal neighbours, kept inline.
pub type Neighbours = SmallVec<[Cell; 4]>;

/// The query interface the search engines run against.
///
/// Implementations must yield symmetric neighbours (the grid is
/// undirected) and at least one objective. The engines never mutate the
/// maze; it only needs to stay fixed for the duration of one search.
pub trait Maze {
    /// The unique start position.
    fn start(&self) -> Cell;
    /// Goal positions. The blind searches and single-goal A* target the
    /// first entry; the multi-goal search visits all of them.
    fn objectives(&self) -> &[Cell];
    /// Passable, in-bounds cells orthogonally adjacent to `cell`.
    fn neighbours(&self, cell: Cell) -> Neighbours;
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum GridCell {
    #[display("░")]
    Open,
    #[display("█")]
    Wall,
}

#[derive(Debug, Error)]
pub enum GridMazeParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid character '{ch}' found at ({row},{col})")]
    InvalidCharacter { ch: char, row: usize, col: usize },
    #[error("Line {row} has {len} cells, expected {expected}")]
    RaggedLine {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("No start cell found")]
    MissingStart,
    #[error("Second start cell found at ({row},{col})")]
    ExtraStart { row: usize, col: usize },
    #[error("No objectives found")]
    NoObjectives,
}

/// A rectangular ASCII maze.
///
/// Parsed from text with ` `/`.` for open cells, `#`/`%` for walls,
/// `S`/`P` for the start, and `G` for objectives. Start and objective
/// cells are passable.
#[derive(Clone)]
pub struct GridMaze {
    cells: Vec<Vec<GridCell>>,
    start: Cell,
    objectives: Vec<Cell>,
}

impl GridMaze {
    /// `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        if self.cells.is_empty() {
            return (0, 0);
        }
        (self.cells.len(), self.cells[0].len())
    }

    #[inline(always)]
    fn at(&self, cell: Cell) -> GridCell {
        self.cells[cell.row as usize][cell.col as usize]
    }
}

impl Maze for GridMaze {
    fn start(&self) -> Cell {
        self.start
    }

    fn objectives(&self) -> &[Cell] {
        &self.objectives
    }

    fn neighbours(&self, cell: Cell) -> Neighbours {
        let (rows, cols) = self.dimensions();
        let (rows, cols) = (rows as u32, cols as u32);

        let mut v = Neighbours::new();
        // Up, left, down, right. Going out of bounds wraps around to
        // `u32::MAX` and fails the bound check.
        for (row, col) in [
            (cell.row.wrapping_sub(1), cell.col),
            (cell.row, cell.col.wrapping_sub(1)),
            (cell.row.wrapping_add(1), cell.col),
            (cell.row, cell.col.wrapping_add(1)),
        ] {
            if row < rows && col < cols {
                let n = Cell::new(row, col);
                if self.at(n) == GridCell::Open {
                    v.push(n);
                }
            }
        }
        v
    }
}

impl std::convert::TryFrom<&str> for GridMaze {
    type Error = GridMazeParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.is_empty() || lines[0].is_empty() {
            return Err(GridMazeParseError::EmptyInput);
        }

        let expected = lines[0].chars().count();
        let mut cells = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut objectives = vec![];

        for (row, line) in lines.iter().enumerate() {
            let mut grid_row = Vec::with_capacity(expected);
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    ' ' | '.' => GridCell::Open,
                    '#' | '%' => GridCell::Wall,
                    'S' | 'P' => {
                        if start.is_some() {
                            return Err(GridMazeParseError::ExtraStart { row, col });
                        }
                        start = Some(Cell::new(row as u32, col as u32));
                        GridCell::Open
                    }
                    'G' => {
                        objectives.push(Cell::new(row as u32, col as u32));
                        GridCell::Open
                    }
                    ch => return Err(GridMazeParseError::InvalidCharacter { ch, row, col }),
                };
                grid_row.push(cell);
            }
            if grid_row.len() != expected {
                return Err(GridMazeParseError::RaggedLine {
                    row,
                    len: grid_row.len(),
                    expected,
                });
            }
            cells.push(grid_row);
        }

        let Some(start) = start else {
            return Err(GridMazeParseError::MissingStart);
        };
        if objectives.is_empty() {
            return Err(GridMazeParseError::NoObjectives);
        }

        Ok(GridMaze {
            cells,
            start,
            objectives,
        })
    }
}

impl std::fmt::Display for GridMaze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (rows, cols) = self.dimensions();
        writeln!(
            f,
            "GridMaze({rows}x{cols}) (s:{}, g:{:?}):",
            self.start, self.objectives
        )?;
        for (row, line) in self.cells.iter().enumerate().take(MAX_LINES_DISPLAYED) {
            for (col, cell) in line.iter().enumerate().take(MAX_LINES_DISPLAYED) {
                let here = Cell::new(row as u32, col as u32);
                if here == self.start {
                    write!(f, "S")?;
                } else if self.objectives.contains(&here) {
                    write!(f, "G")?;
                } else {
                    write!(f, "{cell}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for GridMaze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "GridMaze{:?}", self.dimensions())
    }
}
