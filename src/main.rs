use std::error::Error;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use rayon::prelude::*;

use slide_puzzle_solver::config::Config;
use slide_puzzle_solver::report::{BatchReport, SolveReport};
use slide_puzzle_solver::util::read_puzzles;
use slide_puzzle_solver::{DebugPrintable, Solver};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = Config::parse();

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
    }

    let puzzles = read_puzzles(&config.input).map_err(|e| {
        error!("could not load {}: {}", config.input.display(), e);
        e
    })?;
    info!("loaded {} puzzles from {}", puzzles.len(), config.input.display());

    let solver_config = config.solver_config();
    let progress = ProgressBar::new(puzzles.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}] {msg}")?
            .progress_chars("=>-"),
    );

    let results: Vec<(Solver, SolveReport)> = puzzles
        .par_iter()
        .enumerate()
        .map(|(idx, board)| {
            let started = Instant::now();
            let solver = Solver::with_config(board.clone(), solver_config);
            let report = SolveReport::new(idx, board, &solver, started.elapsed());
            progress.inc(1);
            (solver, report)
        })
        .collect();
    progress.finish_and_clear();

    for (solver, report) in &results {
        match solver.moves_str() {
            Some(path) => println!(
                "#{} {} in {} moves: {}",
                report.index,
                "solved".green(),
                solver.moves(),
                path
            ),
            None => println!("#{} {}", report.index, "unsolvable".red()),
        }

        if config.show {
            for board in solver.solution().unwrap_or_default() {
                board.debug_print(config.overlay);
            }
        }
    }

    let reports = results.into_iter().map(|(_, report)| report).collect();
    let batch = BatchReport::new(solver_config, reports);
    println!(
        "{} solvable, {} unsolvable, {} moves in total",
        batch.solvable, batch.unsolvable, batch.total_moves
    );

    if let Some(path) = &config.report {
        batch.write_to(path)?;
        info!("wrote report to {}", path.display());
    }

    Ok(())
}
