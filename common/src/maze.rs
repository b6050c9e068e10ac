pub mod maker;
pub mod parse;

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::position::Position;

pub use maker::MazeMaker;
pub use parse::{LoadError, ParseError};

/// A symbol in the maze grid.
///
/// Only `Open` and `Exit` can be moved into. `Blocked` is written by the
/// solver over cells it has backtracked out of; it is also accepted as input
/// and then behaves like a wall.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Cell {
    #[strum(serialize = "_")]
    Open,
    #[strum(serialize = "$")]
    Exit,
    #[strum(serialize = "*")]
    Wall,
    #[strum(serialize = "X")]
    Blocked,
}

impl Cell {
    pub fn is_passable(self) -> bool {
        matches!(self, Cell::Open | Cell::Exit)
    }
}

/// A cell of the solution overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Untouched; still shows the symbol loaded from the input.
    Cell(Cell),
    /// Advanced through during the forward phase (`>`).
    OnPath,
    /// Backtracked out of with no extension left (`@`).
    DeadEnd,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Cell(cell) => write!(f, "{}", cell),
            Mark::OnPath => f.write_str(">"),
            Mark::DeadEnd => f.write_str("@"),
        }
    }
}

/// A rectangular maze and its solution overlay.
///
/// Both matrices live in flat row-major buffers of `rows * columns` entries.
/// The dimensions are fixed once the maze is built.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    columns: usize,
    grid: Vec<Cell>,
    solution: Vec<Mark>,
}

impl Maze {
    pub fn new(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self, ParseError> {
        if rows == 0 || columns == 0 {
            return Err(ParseError::ZeroDimension);
        }

        let expected = rows
            .checked_mul(columns)
            .ok_or(ParseError::DimensionOverflow { rows, columns })?;
        if cells.len() < expected {
            return Err(ParseError::TooFewCells {
                expected,
                found: cells.len(),
            });
        }
        if cells.len() > expected {
            return Err(ParseError::TooManyCells {
                expected,
                found: cells.len(),
            });
        }

        let solution = cells.iter().map(|&cell| Mark::Cell(cell)).collect();

        Ok(Self {
            rows,
            columns,
            grid: cells,
            solution,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.row < self.rows && position.column < self.columns {
            Some(position.row * self.columns + position.column)
        } else {
            None
        }
    }

    pub fn at(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|i| self.grid[i])
    }

    /// Overwrites the grid symbol at `position` and returns the old one.
    /// Out-of-bounds positions are left alone and yield `None`.
    pub fn mark(&mut self, position: Position, cell: Cell) -> Option<Cell> {
        let i = self.index(position)?;
        Some(std::mem::replace(&mut self.grid[i], cell))
    }

    pub fn trail_at(&self, position: Position) -> Option<Mark> {
        self.index(position).map(|i| self.solution[i])
    }

    pub fn mark_trail(&mut self, position: Position, mark: Mark) -> Option<Mark> {
        let i = self.index(position)?;
        Some(std::mem::replace(&mut self.solution[i], mark))
    }

    pub fn is_passable(&self, position: Position) -> bool {
        self.at(position).is_some_and(Cell::is_passable)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.grid.iter().filter(|&&c| c == cell).count()
    }

    pub fn solution_rows(&self) -> Vec<String> {
        self.solution
            .chunks(self.columns)
            .map(|row| {
                row.iter()
                    .map(Mark::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }

    /// The solution overlay, one line per row, cells separated by a space.
    pub fn render(&self) -> String {
        self.solution_rows().join("\n")
    }

    /// The grid in the same format `Maze::parse` reads.
    pub fn to_input(&self) -> String {
        let mut out = format!("{} {}\n", self.rows, self.columns);
        for row in self.grid.chunks(self.columns) {
            let line = row
                .iter()
                .map(Cell::to_string)
                .collect::<Vec<String>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
