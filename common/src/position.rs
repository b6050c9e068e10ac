use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { row: 0, column: 0 };

    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }

    /// The neighbour one step in `direction`, or `None` if it would leave a
    /// grid of the given `(rows, columns)`.
    pub fn step(self, direction: Direction, dimensions: (usize, usize)) -> Option<Position> {
        let (rows, columns) = dimensions;
        let next = match direction {
            Direction::South => Position::new(self.row + 1, self.column),
            Direction::East => Position::new(self.row, self.column + 1),
        };

        (next.row < rows && next.column < columns).then_some(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The only two moves the solver ever makes.
///
/// Declaration order is push order: south is pushed onto the backtrack stack
/// before east, so east ends up on top and is explored first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    South,
    East,
}

impl Direction {
    pub fn push_order() -> impl Iterator<Item = Direction> {
        Direction::iter()
    }
}
