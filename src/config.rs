use std::path::PathBuf;

use clap::Parser;

use crate::solver::{Deduplication, SolverConfig};
use crate::traits::board::HeuristicKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "slidePuzzleSolver")]
#[command(about = "Find shortest solutions to sliding puzzles, or prove there are none")]
pub struct Config {
    /// Puzzle file: each board is its dimension followed by one line per row
    #[arg(default_value = "slidepuzzle.txt")]
    pub input: PathBuf,

    /// Lower bound used to order the search frontier
    #[arg(long, value_enum, default_value_t = HeuristicKind::Hamming)]
    pub heuristic: HeuristicKind,

    /// Never expand the same board twice within one search
    #[arg(long)]
    pub closed_set: bool,

    /// Print every board of each solution
    #[arg(long)]
    pub show: bool,

    /// Show each tile's distance from its goal cell instead of its value
    #[arg(long, requires = "show")]
    pub overlay: bool,

    /// Write a JSON report of the batch to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Worker threads used to solve puzzles of the batch side by side
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Config {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            heuristic: self.heuristic,
            deduplication: if self.closed_set {
                Deduplication::ClosedSet
            } else {
                Deduplication::Predecessor
            },
        }
    }
}
