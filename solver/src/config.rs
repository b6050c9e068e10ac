//! Command line and environment configuration.
//! `MazeSolver FILE [--format text|json]` or
//! `MazeSolver --generate ROWS COLUMNS [--algorithm KIND] [--density P] [--seed N]`

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, error::ErrorKind, value_parser};

use common::constants::{DEFAULT_LOG_FILTER, LOG_ENV, LOG_STYLE_ENV};
use common::maze::maker::{Algorithm, DEFAULT_DENSITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Solve {
        input: PathBuf,
        format: OutputFormat,
    },
    Generate {
        rows: usize,
        columns: usize,
        algorithm: Algorithm,
        seed: Option<u64>,
    },
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;

    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("density must lie between 0 and 1, got {}", density))
    }
}

fn make_options_parser() -> Command {
    Command::new("MazeSolver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds a south/east path from the top-left corner of a text maze to its exit")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Maze file: row and column counts followed by the cells (_ $ *)")
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("generate"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("How to print the solution")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("generate")
                .short('g')
                .long("generate")
                .help("Print a random maze in input format instead of solving one")
                .num_args(2)
                .value_names(["ROWS", "COLUMNS"])
                .value_parser(value_parser!(usize))
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Generator for --generate")
                .value_parser(["scatter", "binary-tree"])
                .default_value("scatter"),
        )
        .arg(
            Arg::new("density")
                .short('d')
                .long("density")
                .value_name("P")
                .help("Wall probability; only the scatter generator takes one")
                .value_parser(parse_density),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("N")
                .help("Seed for reproducible generation")
                .value_parser(value_parser!(u64)),
        )
}

fn mode_from_matches(matches: &ArgMatches) -> Result<Mode, clap::Error> {
    if let Some(dimensions) = matches.get_many::<usize>("generate") {
        let dimensions: Vec<usize> = dimensions.copied().collect();
        let density = matches.get_one::<f64>("density").copied();
        let algorithm = match matches.get_one::<String>("algorithm").map(String::as_str) {
            Some("binary-tree") if density.is_some() => {
                return Err(make_options_parser().error(
                    ErrorKind::ArgumentConflict,
                    "--density only applies to the scatter generator",
                ));
            }
            Some("binary-tree") => Algorithm::BinaryTree,
            _ => Algorithm::Scatter {
                density: density.unwrap_or(DEFAULT_DENSITY),
            },
        };

        return Ok(Mode::Generate {
            rows: dimensions[0],
            columns: dimensions[1],
            algorithm,
            seed: matches.get_one::<u64>("seed").copied(),
        });
    }

    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    Ok(Mode::Solve {
        input: matches.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
        format,
    })
}

pub fn parse_from<I, T>(args: I) -> Result<Mode, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = make_options_parser().try_get_matches_from(args)?;
    mode_from_matches(&matches)
}

/// Parses the process arguments, printing usage and exiting on error.
pub fn parse_args() -> Mode {
    let matches = make_options_parser().get_matches();
    mode_from_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Loads `.env` if present and installs the logger, filtered by `MAZE_LOG`.
pub fn init_logging() {
    dotenvy::dotenv().ok();

    let env = env_logger::Env::new()
        .filter_or(LOG_ENV, DEFAULT_LOG_FILTER)
        .write_style(LOG_STYLE_ENV);
    env_logger::try_init_from_env(env).ok();
}
