use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use super::{Cell, Maze};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingDimension,
    InvalidDimension(String),
    ZeroDimension,
    DimensionOverflow { rows: usize, columns: usize },
    InvalidSymbol(String),
    TooFewCells { expected: usize, found: usize },
    TooManyCells { expected: usize, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingDimension => {
                write!(f, "expected row and column counts at the start of the input")
            }
            ParseError::InvalidDimension(token) => {
                write!(f, "'{}' is not a valid row or column count", token)
            }
            ParseError::ZeroDimension => write!(f, "a maze needs at least one row and column"),
            ParseError::DimensionOverflow { rows, columns } => {
                write!(f, "a {}x{} maze is too large", rows, columns)
            }
            ParseError::InvalidSymbol(token) => {
                write!(f, "'{}' is not one of the maze symbols _ $ * X", token)
            }
            ParseError::TooFewCells { expected, found } => {
                write!(f, "expected {} cells, found only {}", expected, found)
            }
            ParseError::TooManyCells { expected, found } => {
                write!(f, "expected {} cells, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: ParseError },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, .. } => write!(f, "Cannot read from {}", path.display()),
            LoadError::Parse { path, source } => {
                write!(f, "Malformed maze in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
        }
    }
}

fn parse_dimension<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<usize, ParseError> {
    let token = tokens.next().ok_or(ParseError::MissingDimension)?;
    token
        .parse()
        .map_err(|_| ParseError::InvalidDimension(token.to_string()))
}

impl Maze {
    /// Reads `rows columns` followed by `rows * columns` whitespace-separated
    /// single-character cell symbols in row-major order.
    pub fn parse(input: &str) -> Result<Maze, ParseError> {
        let mut tokens = input.split_whitespace();

        let rows = parse_dimension(&mut tokens)?;
        let columns = parse_dimension(&mut tokens)?;

        let cells = tokens
            .map(|token| {
                Cell::from_str(token).map_err(|_| ParseError::InvalidSymbol(token.to_string()))
            })
            .collect::<Result<Vec<Cell>, ParseError>>()?;

        Maze::new(rows, columns, cells)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Maze, LoadError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let maze = Maze::parse(&input).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let (rows, columns) = maze.dimensions();
        log::debug!("loaded {}x{} maze from {}", rows, columns, path.display());

        Ok(maze)
    }
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::position::Position;

    #[test]
    fn parse_reads_dimensions_then_cells_row_major() {
        let maze = Maze::parse("2 3\n_ _ *\n* _ $\n").expect("maze should parse");
        assert_eq!(maze.dimensions(), (2, 3));
        assert_eq!(maze.at(Position::new(0, 2)), Some(Cell::Wall));
        assert_eq!(maze.at(Position::new(1, 2)), Some(Cell::Exit));
    }

    #[test]
    fn parse_ignores_line_structure() {
        let flat: Maze = "2 2 _ _ _ $".parse().expect("maze should parse");
        let spread = Maze::parse("2\n2\n\t_\n_   _\n\n$").expect("maze should parse");
        assert_eq!(flat, spread);
    }

    #[test]
    fn parse_reports_missing_and_bad_dimensions() {
        assert_eq!(Maze::parse(""), Err(ParseError::MissingDimension));
        assert_eq!(Maze::parse("3"), Err(ParseError::MissingDimension));
        assert_eq!(
            Maze::parse("two 2 _ _"),
            Err(ParseError::InvalidDimension("two".to_string()))
        );
        assert_eq!(
            Maze::parse("-1 2 _ _"),
            Err(ParseError::InvalidDimension("-1".to_string()))
        );
        assert_eq!(Maze::parse("0 0"), Err(ParseError::ZeroDimension));
    }

    #[test]
    fn parse_reports_dimensions_whose_product_overflows() {
        assert_eq!(
            Maze::parse("18446744073709551615 2 _"),
            Err(ParseError::DimensionOverflow {
                rows: usize::MAX,
                columns: 2
            })
        );
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        assert_eq!(
            Maze::parse("1 2 _ #"),
            Err(ParseError::InvalidSymbol("#".to_string()))
        );
        assert_eq!(
            Maze::parse("1 2 _ $$"),
            Err(ParseError::InvalidSymbol("$$".to_string()))
        );
    }

    #[test]
    fn parse_rejects_wrong_cell_counts() {
        assert_eq!(
            Maze::parse("2 2 _ _ $"),
            Err(ParseError::TooFewCells {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Maze::parse("1 1 $ _"),
            Err(ParseError::TooManyCells {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn to_input_round_trips_through_parse() {
        let maze = Maze::parse("3 2 _ * _ _ * $").expect("maze should parse");
        assert_eq!(Maze::parse(&maze.to_input()), Ok(maze));
    }

    #[test]
    fn load_names_the_missing_file() {
        let error = Maze::load("no/such/maze.txt").expect_err("load should fail");
        assert!(matches!(error, LoadError::Io { .. }));
        assert_eq!(error.path(), Path::new("no/such/maze.txt"));
        assert_eq!(error.to_string(), "Cannot read from no/such/maze.txt");
        assert!(error.source().is_some());
    }
}
