pub mod constants;
pub mod maze;
pub mod position;
pub mod report;
pub mod solver;

pub use maze::{Cell, LoadError, Mark, Maze, ParseError};
pub use position::{Direction, Position};
pub use report::SolveReport;
pub use solver::{SearchState, Solver};
