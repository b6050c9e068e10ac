use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, Maze, ParseError};

pub const DEFAULT_DENSITY: f64 = 0.3;

/// Largest grid the maker will allocate.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Algorithm {
    /// Independent walls with the given probability. May have no solution.
    Scatter { density: f64 },
    /// Rooms on even coordinates, each opened towards the south or east, so
    /// every room has a south/east path to the exit.
    BinaryTree,
}

pub struct MazeMaker {
    rows: usize,
    columns: usize,
    rng: StdRng,
}

impl MazeMaker {
    /// Zero dimensions are raised to one so the result is always a valid maze.
    pub fn new(rows: usize, columns: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        MazeMaker {
            rows: rows.max(1),
            columns: columns.max(1),
            rng,
        }
    }

    pub fn make(&mut self, algorithm: Algorithm) -> Result<Maze, ParseError> {
        let (rows, columns) = (self.rows, self.columns);
        let size = rows
            .checked_mul(columns)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or(ParseError::DimensionOverflow { rows, columns })?;

        let cells = match algorithm {
            Algorithm::Scatter { density } => self.scatter(size, density),
            Algorithm::BinaryTree => self.binary_tree(size),
        };

        Maze::new(rows, columns, cells)
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn scatter(&mut self, size: usize, density: f64) -> Vec<Cell> {
        let density = if density.is_nan() {
            DEFAULT_DENSITY
        } else {
            density.clamp(0.0, 1.0)
        };

        let mut cells: Vec<Cell> = (0..size)
            .map(|_| {
                if self.rng.random_bool(density) {
                    Cell::Wall
                } else {
                    Cell::Open
                }
            })
            .collect();

        cells[0] = Cell::Open;
        let last = cells.len() - 1;
        cells[last] = Cell::Exit;
        cells
    }

    fn binary_tree(&mut self, size: usize) -> Vec<Cell> {
        let mut cells = vec![Cell::Wall; size];

        // Rooms sit on even coordinates; the odd ones in between are walls
        // until a room opens into them.
        let last_row = (self.rows - 1) & !1;
        let last_column = (self.columns - 1) & !1;

        for row in (0..=last_row).step_by(2) {
            for column in (0..=last_column).step_by(2) {
                let room = self.index(row, column);
                cells[room] = Cell::Open;

                let mut openings = Vec::with_capacity(2);
                if row < last_row {
                    openings.push(self.index(row + 1, column));
                }
                if column < last_column {
                    openings.push(self.index(row, column + 1));
                }

                if !openings.is_empty() {
                    let i = self.rng.random_range(0..openings.len());
                    cells[openings[i]] = Cell::Open;
                }
            }
        }

        let exit = self.index(last_row, last_column);
        cells[exit] = Cell::Exit;
        cells
    }
}
