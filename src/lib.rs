pub mod board;
pub mod config;
pub mod error;
pub mod frontier;
pub mod node;
pub mod report;
pub mod solver;
pub mod traits;
pub mod util;


pub use board::{Board, Direction};
pub use error::{PuzzleError, Result};
pub use solver::{Deduplication, SolverConfig, Solver};
pub use traits::board::{DebugPrintable, Heuristic, HeuristicKind};
