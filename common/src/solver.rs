//! Depth-first search from the top-left corner using only south and east
//! moves.
//!
//! The search is driven by a stack of positions that doubles as the
//! frontier and the backtrack record. The position being examined is always
//! the top of the stack. Each iteration of [`Solver::step`] does exactly one
//! of the following:
//! - stops on the exit,
//! - pushes every passable south/east neighbour (south first, so east is on
//!   top and gets explored first) and moves onto the top,
//! - or, with nowhere left to go, blocks the current cell in the grid, marks
//!   it `@` in the overlay and pops back to the previous candidate.
//!
//! Pending entries are never deduplicated. A neighbour is checked when it is
//! pushed and its own neighbours are re-checked when it becomes current, by
//! which time anything already explored has been overwritten with
//! [`Cell::Blocked`].

use crate::maze::{Cell, Mark, Maze};
use crate::position::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Solved,
    Exhausted,
}

/// One solve attempt over a maze it owns.
///
/// A solver runs once: after it reaches [`SearchState::Solved`] or
/// [`SearchState::Exhausted`], further calls to `step` and `solve` change
/// nothing and report the recorded outcome.
pub struct Solver {
    maze: Maze,
    stack: Vec<Position>,
    current: Position,
    state: SearchState,
}

impl Solver {
    pub fn new(maze: Maze) -> Self {
        let (rows, columns) = maze.dimensions();
        log::debug!("solving {}x{} maze", rows, columns);

        Solver {
            maze,
            stack: vec![Position::START],
            current: Position::START,
            state: SearchState::Searching,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn current(&self) -> Position {
        self.current
    }

    /// Pending positions, bottom of the stack first.
    pub fn frontier(&self) -> &[Position] {
        &self.stack
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    fn extensible(&self, direction: Direction) -> Option<Position> {
        self.current
            .step(direction, self.maze.dimensions())
            .filter(|&next| self.maze.is_passable(next))
    }

    fn extend_path(&mut self) -> bool {
        let mut extended = false;

        for direction in Direction::push_order() {
            if let Some(next) = self.extensible(direction) {
                self.stack.push(next);
                extended = true;
            }
        }

        extended
    }

    fn backtrack(&mut self) {
        self.maze.mark(self.current, Cell::Blocked);
        self.maze.mark_trail(self.current, Mark::DeadEnd);
        self.stack.pop();

        match self.stack.last() {
            Some(&top) => self.current = top,
            None => self.state = SearchState::Exhausted,
        }
    }

    /// Runs a single iteration of the search and returns the state after it.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Searching {
            return self.state;
        }

        log::trace!("at {} with {} pending", self.current, self.stack.len());

        if self.maze.at(self.current) == Some(Cell::Exit) {
            self.state = SearchState::Solved;
        } else if self.extend_path() {
            self.maze.mark_trail(self.current, Mark::OnPath);
            if let Some(&top) = self.stack.last() {
                self.current = top;
            }
        } else {
            self.backtrack();
        }

        if self.state != SearchState::Searching {
            log::debug!("search finished at {} as {:?}", self.current, self.state);
        }

        self.state
    }

    /// Searches until the exit is found or every candidate is exhausted.
    /// Returns `true` if the exit was reached.
    pub fn solve(&mut self) -> bool {
        while self.step() == SearchState::Searching {}
        self.state == SearchState::Solved
    }

    /// The cells currently marked on-path, from the start outwards, followed
    /// by the exit once it has been reached.
    pub fn path(&self) -> Vec<Position> {
        let (rows, columns) = self.maze.dimensions();
        let mut path: Vec<Position> = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| Position::new(row, column)))
            .filter(|&position| self.maze.trail_at(position) == Some(Mark::OnPath))
            .collect();

        path.sort_by_key(|position| position.row + position.column);

        if self.state == SearchState::Solved {
            path.push(self.current);
        }

        path
    }
}
