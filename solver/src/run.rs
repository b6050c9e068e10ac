use std::{fmt, io, io::Write, path::Path};

use common::{
    LoadError, Maze, ParseError, SolveReport, Solver,
    constants::{FOUND_EXIT, NO_SOLUTION, SOLUTION_HEADER},
    maze::maker::{Algorithm, MazeMaker},
};

use crate::config::{Mode, OutputFormat};

#[derive(Debug)]
pub enum RunError {
    Load(LoadError),
    Generate(ParseError),
    Json(serde_json::Error),
    Output(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Load(e) => write!(f, "{}", e),
            RunError::Generate(e) => write!(f, "cannot generate maze: {}", e),
            RunError::Json(e) => write!(f, "failed to encode the report: {}", e),
            RunError::Output(e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Load(e) => Some(e),
            RunError::Generate(e) => Some(e),
            RunError::Json(e) => Some(e),
            RunError::Output(e) => Some(e),
        }
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        RunError::Load(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        RunError::Json(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Output(e)
    }
}

/// Executes `mode`, writing everything meant for the user to `out`.
///
/// Returns whether the maze was solved; generation always counts as success.
pub fn run(mode: &Mode, out: &mut impl Write) -> Result<bool, RunError> {
    match mode {
        Mode::Solve { input, format } => solve_file(input, *format, out),
        Mode::Generate {
            rows,
            columns,
            algorithm,
            seed,
        } => {
            generate(*rows, *columns, *algorithm, *seed, out)?;
            Ok(true)
        }
    }
}

pub fn solve_file(
    path: &Path,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool, RunError> {
    let maze = Maze::load(path)?;
    let mut solver = Solver::new(maze);
    let solved = solver.solve();
    log::info!(
        "{} {}",
        path.display(),
        if solved { "solved" } else { "has no solution" }
    );

    match format {
        OutputFormat::Text => print_solution(solver.maze(), solved, out)?,
        OutputFormat::Json => {
            let report = SolveReport::from_solver(&solver);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }

    Ok(solved)
}

/// The outcome line, the header and the overlay, as the text format prints them.
pub fn print_solution(maze: &Maze, solved: bool, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", if solved { FOUND_EXIT } else { NO_SOLUTION })?;
    writeln!(out, "{}", SOLUTION_HEADER)?;
    writeln!(out, "{}", maze)
}

pub fn generate(
    rows: usize,
    columns: usize,
    algorithm: Algorithm,
    seed: Option<u64>,
    out: &mut impl Write,
) -> Result<(), RunError> {
    let maze = MazeMaker::new(rows, columns, seed)
        .make(algorithm)
        .map_err(RunError::Generate)?;
    log::debug!("generated {}x{} maze with {:?}", rows, columns, algorithm);
    write!(out, "{}", maze.to_input())?;
    Ok(())
}
