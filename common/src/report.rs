use serde::{Deserialize, Serialize};

use crate::maze::Maze;
use crate::position::Position;
use crate::solver::{SearchState, Solver};

/// Machine-readable outcome of a solve, rendered overlay included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub solved: bool,
    pub rows: usize,
    pub columns: usize,
    pub solution: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Position>,
}

impl SolveReport {
    pub fn new(maze: &Maze, solved: bool) -> Self {
        let (rows, columns) = maze.dimensions();
        SolveReport {
            solved,
            rows,
            columns,
            solution: maze.solution_rows(),
            path: Vec::new(),
        }
    }

    pub fn from_solver(solver: &Solver) -> Self {
        let solved = solver.state() == SearchState::Solved;
        SolveReport {
            path: solver.path(),
            ..SolveReport::new(solver.maze(), solved)
        }
    }
}
