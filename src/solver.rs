use log::{debug, trace};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::board::{Board, Direction};
use crate::error::{PuzzleError, Result};
use crate::frontier::PriorityFrontier;
use crate::node::{NodeArena, NodeId};
use crate::traits::board::HeuristicKind;

/// How a lane avoids re-expanding boards it has already seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deduplication {
    /// Only skip the neighbor equal to the parent's own predecessor.
    #[default]
    Predecessor,
    /// Also keep every expanded board and never expand it twice.
    ClosedSet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolverConfig {
    pub heuristic: HeuristicKind,
    pub deduplication: Deduplication,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LaneStats {
    pub expanded: usize,
    pub inserted: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub primary: LaneStats,
    pub mirror: LaneStats,
}

impl SearchStats {
    pub fn expanded(&self) -> usize {
        self.primary.expanded + self.mirror.expanded
    }
}

enum Step {
    Goal(NodeId),
    Continue,
    Exhausted,
}

/// One best-first search: its own node tree, frontier and counters.
struct Lane {
    arena: NodeArena,
    frontier: PriorityFrontier,
    closed_list: Option<FxHashSet<Board>>,
    stats: LaneStats,
}

impl Lane {
    fn seed(board: Board, config: &SolverConfig) -> Self {
        let mut arena = NodeArena::new();
        let mut frontier = PriorityFrontier::new();

        let root = arena.root(board, config.heuristic);
        frontier.insert(&arena, root);

        let closed_list = match config.deduplication {
            Deduplication::Predecessor => None,
            Deduplication::ClosedSet => Some(FxHashSet::default()),
        };

        Self {
            arena,
            frontier,
            closed_list,
            stats: LaneStats { expanded: 0, inserted: 1 },
        }
    }

    fn step(&mut self, heuristic: HeuristicKind) -> Step {
        let Some(id) = self.frontier.pop_min() else {
            return Step::Exhausted;
        };

        if self.arena.get(id).board.is_goal() {
            return Step::Goal(id);
        }

        if let Some(closed_list) = self.closed_list.as_mut() {
            if !closed_list.insert(self.arena.get(id).board.clone()) {
                return Step::Continue;
            }
        }

        let successors: Vec<Board> = {
            let predecessor = self.arena.predecessor_board(id);
            let closed_list = self.closed_list.as_ref();

            self.arena
                .get(id)
                .board
                .neighbors()
                .filter(|neighbour| Some(neighbour) != predecessor)
                .filter(|neighbour| {
                    closed_list.map_or(true, |closed| !closed.contains(neighbour))
                })
                .collect()
        };

        for board in successors {
            let child = self.arena.child(id, board, heuristic);
            self.frontier.insert(&self.arena, child);
            self.stats.inserted += 1;
        }
        self.stats.expanded += 1;

        Step::Continue
    }
}

/// Result of solving one board with two lock-stepped best-first searches.
///
/// The primary lane searches from the input and the mirror lane from its
/// twin. Exactly one of the two is solvable, so whichever lane reaches the
/// goal first decides whether the input can be solved.
#[derive(Debug, Clone)]
pub struct Solver {
    solvable: bool,
    moves: i32,
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    pub fn new(initial: Board) -> Self {
        Self::with_config(initial, SolverConfig::default())
    }

    /// # Errors
    ///
    /// Returns [`PuzzleError::MissingBoard`] when no initial board is given.
    pub fn from_optional(initial: Option<Board>, config: SolverConfig) -> Result<Self> {
        let initial = initial.ok_or(PuzzleError::MissingBoard)?;
        Ok(Self::with_config(initial, config))
    }

    pub fn with_config(initial: Board, config: SolverConfig) -> Self {
        debug!(
            "solving {n}x{n} board with {} heuristic, {:?} deduplication",
            config.heuristic,
            config.deduplication,
            n = initial.dimension()
        );

        // A single cell is always the goal and has no twin.
        if initial.dimension() < 2 {
            return Self::solved(vec![initial], SearchStats::default());
        }

        let mirror_board = initial.twin();
        let mut primary = Lane::seed(initial, &config);
        let mut mirror = Lane::seed(mirror_board, &config);
        let mut mirror_exhausted = false;

        loop {
            match primary.step(config.heuristic) {
                Step::Goal(id) => {
                    let path = primary.arena.path(id);
                    debug!(
                        "primary lane solved in {} moves after {} expansions",
                        path.len() - 1,
                        primary.stats.expanded
                    );
                    let stats = SearchStats { primary: primary.stats, mirror: mirror.stats };
                    return Self::solved(path, stats);
                }
                Step::Exhausted => {
                    debug!("primary lane exhausted after {} expansions", primary.stats.expanded);
                    let stats = SearchStats { primary: primary.stats, mirror: mirror.stats };
                    return Self::unsolvable(stats);
                }
                Step::Continue => {}
            }

            if mirror_exhausted {
                continue;
            }

            match mirror.step(config.heuristic) {
                Step::Goal(_) => {
                    debug!(
                        "mirror lane reached the goal after {} expansions",
                        mirror.stats.expanded
                    );
                    let stats = SearchStats { primary: primary.stats, mirror: mirror.stats };
                    return Self::unsolvable(stats);
                }
                Step::Exhausted => {
                    trace!("mirror lane exhausted, primary lane continues alone");
                    mirror_exhausted = true;
                }
                Step::Continue => {}
            }
        }
    }

    fn solved(path: Vec<Board>, stats: SearchStats) -> Self {
        Self {
            solvable: true,
            moves: path.len() as i32 - 1,
            solution: Some(path),
            stats,
        }
    }

    fn unsolvable(stats: SearchStats) -> Self {
        Self {
            solvable: false,
            moves: -1,
            solution: None,
            stats,
        }
    }

    pub fn is_solvable(&self) -> bool {
        self.solvable
    }

    /// Minimum number of slides, or -1 when the board is unsolvable.
    pub fn moves(&self) -> i32 {
        self.moves
    }

    /// Boards of a shortest solution, input first and goal last.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn directions(&self) -> Option<Vec<Direction>> {
        self.solution()?
            .windows(2)
            .map(|pair| pair[0].direction_to(&pair[1]))
            .collect()
    }

    pub fn moves_str(&self) -> Option<String> {
        self.directions()
            .map(|directions| directions.iter().map(|d| d.to_char()).collect())
    }
}
