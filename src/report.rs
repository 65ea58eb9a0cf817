use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::Board;
use crate::error::Result;
use crate::solver::{Deduplication, Solver, SolverConfig};
use crate::traits::board::HeuristicKind;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub index: usize,
    pub initial: Vec<Vec<u32>>,
    pub solvable: bool,
    pub moves: i32,
    pub path: Option<String>,
    pub expanded: usize,
    pub elapsed_ms: f64,
}

impl SolveReport {
    pub fn new(index: usize, initial: &Board, solver: &Solver, elapsed: Duration) -> Self {
        Self {
            index,
            initial: initial.rows(),
            solvable: solver.is_solvable(),
            moves: solver.moves(),
            path: solver.moves_str(),
            expanded: solver.stats().expanded(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub heuristic: HeuristicKind,
    pub deduplication: Deduplication,
    pub solvable: usize,
    pub unsolvable: usize,
    pub total_moves: i64,
    pub puzzles: Vec<SolveReport>,
}

impl BatchReport {
    pub fn new(config: SolverConfig, puzzles: Vec<SolveReport>) -> Self {
        let solvable = puzzles.iter().filter(|p| p.solvable).count();
        let total_moves = puzzles
            .iter()
            .filter(|p| p.solvable)
            .map(|p| p.moves as i64)
            .sum();

        Self {
            generated_at: Utc::now(),
            heuristic: config.heuristic,
            deduplication: config.deduplication,
            solvable,
            unsolvable: puzzles.len() - solvable,
            total_moves,
            puzzles,
        }
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn summarises_batch() {
        let config = SolverConfig { heuristic: HeuristicKind::Manhattan, ..Default::default() };
        let boards = vec![
            Board::new(vec![vec![1, 2], vec![0, 3]]).unwrap(),
            Board::new(vec![vec![2, 1], vec![0, 3]]).unwrap(),
        ];

        let puzzles: Vec<SolveReport> = boards
            .iter()
            .enumerate()
            .map(|(idx, board)| {
                let solver = Solver::with_config(board.clone(), config);
                SolveReport::new(idx, board, &solver, Duration::from_millis(2))
            })
            .collect();

        let report = BatchReport::new(config, puzzles);
        assert_eq!(report.solvable, 1);
        assert_eq!(report.unsolvable, 1);
        assert_eq!(report.total_moves, 1);
        assert_eq!(report.puzzles[0].path.as_deref(), Some("R"));
        assert_eq!(report.puzzles[1].path, None);
        assert_eq!(report.puzzles[1].moves, -1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["heuristic"], "manhattan");
        assert_eq!(json["deduplication"], "predecessor");
        assert_eq!(json["puzzles"][0]["initial"], serde_json::json!([[1, 2], [0, 3]]));
    }
}
