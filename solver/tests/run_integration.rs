use std::io::Write;
use std::path::PathBuf;

use common::maze::maker::Algorithm;
use common::{Maze, ParseError, SolveReport, Solver};
use solver::config::{Mode, OutputFormat, parse_from};
use solver::run::{RunError, run};
use tempfile::NamedTempFile;

fn maze_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes()).expect("temp file should be writable");
    file
}

fn run_to_string(mode: &Mode) -> (Result<bool, RunError>, String) {
    let mut out = Vec::new();
    let result = run(mode, &mut out);
    (result, String::from_utf8(out).expect("output should be utf-8"))
}

fn solve_mode(file: &NamedTempFile, format: OutputFormat) -> Mode {
    Mode::Solve {
        input: file.path().to_path_buf(),
        format,
    }
}

#[test]
fn solved_maze_prints_the_found_line_and_overlay() {
    let file = maze_file("2 2\n_ _\n_ $\n");
    let (result, output) = run_to_string(&solve_mode(&file, OutputFormat::Text));

    assert!(result.expect("run should succeed"));
    assert_eq!(
        output,
        "Found the exit!!!\nThe solution to this maze is:\n> >\n_ $\n"
    );
}

#[test]
fn unsolvable_maze_still_prints_the_trail() {
    let file = maze_file("1 2\n_ _\n");
    let (result, output) = run_to_string(&solve_mode(&file, OutputFormat::Text));

    assert!(!result.expect("no solution is not an error"));
    assert_eq!(
        output,
        "This maze has no solution.\nThe solution to this maze is:\n@ @\n"
    );
}

#[test]
fn json_output_is_a_solve_report() {
    let file = maze_file("1 2 _ $");
    let (result, output) = run_to_string(&solve_mode(&file, OutputFormat::Json));

    assert!(result.expect("run should succeed"));
    let report: SolveReport = serde_json::from_str(&output).expect("output should be a report");
    assert!(report.solved);
    assert_eq!(report.solution, vec!["> $"]);
    assert_eq!(report.path.len(), 2);
}

#[test]
fn missing_file_is_a_load_failure_naming_the_file() {
    let mode = Mode::Solve {
        input: PathBuf::from("definitely/not/here.maze"),
        format: OutputFormat::Text,
    };
    let (result, output) = run_to_string(&mode);

    let error = result.expect_err("missing file should fail");
    assert!(matches!(error, RunError::Load(_)));
    assert_eq!(error.to_string(), "Cannot read from definitely/not/here.maze");
    assert!(output.is_empty(), "nothing should be printed before loading");
}

#[test]
fn malformed_file_is_reported_before_solving() {
    let file = maze_file("2 2 _ # _ $");
    let (result, output) = run_to_string(&solve_mode(&file, OutputFormat::Text));

    let error = result.expect_err("malformed maze should fail");
    assert!(error.to_string().contains("'#' is not one of the maze symbols"));
    assert!(output.is_empty());
}

#[test]
fn generated_mazes_load_and_solve() {
    let mode = Mode::Generate {
        rows: 9,
        columns: 13,
        algorithm: Algorithm::BinaryTree,
        seed: Some(5),
    };
    let (result, output) = run_to_string(&mode);
    assert!(result.expect("generation should succeed"));

    let maze = Maze::parse(&output).expect("generated maze should parse");
    assert_eq!(maze.dimensions(), (9, 13));
    assert!(Solver::new(maze).solve());
}

#[test]
fn generation_is_reproducible_with_a_seed() {
    let mode = Mode::Generate {
        rows: 6,
        columns: 6,
        algorithm: Algorithm::Scatter { density: 0.4 },
        seed: Some(123),
    };
    let (_, first) = run_to_string(&mode);
    let (_, second) = run_to_string(&mode);
    assert_eq!(first, second);

    let file = maze_file(&first);
    let (result, _) = run_to_string(&solve_mode(&file, OutputFormat::Text));
    assert!(result.is_ok());
}

#[test]
fn overflowing_generate_dimensions_are_an_error() {
    let mode = parse_from(["MazeSolver", "-g", "4294967296", "4294967297", "-s", "1"])
        .expect("args should parse");
    let (result, output) = run_to_string(&mode);

    let error = result.expect_err("generation should be refused");
    assert!(matches!(error, RunError::Generate(ParseError::DimensionOverflow { .. })));
    assert!(error.to_string().starts_with("cannot generate maze:"));
    assert!(output.is_empty());
}
