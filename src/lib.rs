// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod level;
pub mod moves;
pub mod solution_formatter;
pub mod solver;

mod data;
mod fs;
mod map;
mod parser;
mod state;
mod vec2d;

use std::error::Error;

pub use crate::data::{Dir, Pos};
pub use crate::map::{GoalMap, MapFormatter};
pub use crate::parser::ParserErr;
pub use crate::state::State;

use crate::config::Config;
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    /// Finds a solution with the minimal number of pushes.
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;
    use std::time::Instant;

    use separator::Separatable;

    use super::*;

    #[test]
    fn test_levels() {
        // (file, pushes or None if unsolvable, moves)
        let levels = [
            ("simplest.txt", Some(1), 1),
            ("one-way.txt", Some(3), 3),
            ("two-boxes.txt", Some(4), 0),
            ("no-solution.txt", None, 0),
        ];

        for &(level_name, pushes, moves) in &levels {
            test_level(level_name, pushes, moves);
        }
    }

    // separate fn to get stack traces with correct line numbers
    fn test_level(level_name: &str, expected_pushes: Option<usize>, expected_moves: usize) {
        let level_path = format!("levels/{}", level_name);
        println!("Solving {}", level_path);
        let started = Instant::now();

        let level = level_path.load_level().unwrap();
        let solution = level.solve(&Config::default()).unwrap();

        // innacurate, only useful to quickly see which levels are difficult
        println!(
            "Solved {} in approximately {} ms",
            level_path,
            (started.elapsed().as_millis() as u64).separated_string(), // separator doesn't support u128
        );

        let mut out = String::new();
        writeln!(out, "{:?}", solution).unwrap();
        if let Some(ref moves) = solution.moves {
            write!(out, "{}", level.format_solution(moves, false)).unwrap();
        }
        println!("{}", out);

        match (solution.moves, expected_pushes) {
            (Some(moves), Some(pushes)) => {
                assert_eq!(moves.push_cnt(), pushes);
                if expected_moves > 0 {
                    assert_eq!(moves.move_cnt(), expected_moves);
                }
                let end = level.replay(&moves).unwrap();
                assert!(level.map.is_solved(&end));
            }
            (None, None) => {}
            (moves, _) => panic!("{}: unexpected result {:?}", level_path, moves),
        }
    }
}
