// Outcome lines printed by the solver binary.
pub const FOUND_EXIT: &str = "Found the exit!!!";
pub const NO_SOLUTION: &str = "This maze has no solution.";
pub const SOLUTION_HEADER: &str = "The solution to this maze is:";

// Environment variables read by the solver binary.
pub const LOG_ENV: &str = "MAZE_LOG";
pub const LOG_STYLE_ENV: &str = "MAZE_LOG_STYLE";
pub const DEFAULT_LOG_FILTER: &str = "warn";
