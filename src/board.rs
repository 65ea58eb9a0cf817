use std::fmt;
use std::str::FromStr;

use crate::error::{PuzzleError, Result};
use crate::util::parse_row;

/// The direction the blank travels during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn to_char(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// An immutable n×n sliding puzzle configuration.
///
/// Tiles are stored row-major; `0` is the blank. The goal board holds
/// `1..n²-1` in order with the blank in the bottom-right corner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Builds a board from its rows.
    ///
    /// # Errors
    ///
    /// Fails if the grid is empty, not square, or not a permutation of
    /// `0..n²-1`.
    pub fn new(grid: Vec<Vec<u32>>) -> Result<Self> {
        let n = grid.len();
        if n == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        if let Some((row, cells)) = grid.iter().enumerate().find(|(_, cells)| cells.len() != n) {
            return Err(PuzzleError::NotSquare { row, len: cells.len(), expected: n });
        }

        Self::from_flat(n, grid.into_iter().flatten().collect())
    }

    /// Builds a board of dimension `n` from row-major tiles.
    pub fn from_flat(n: usize, tiles: Vec<u32>) -> Result<Self> {
        if n == 0 || tiles.is_empty() {
            return Err(PuzzleError::EmptyGrid);
        }
        let cells = match n.checked_mul(n) {
            Some(cells) if cells == tiles.len() => cells,
            _ => {
                return Err(PuzzleError::WrongLength {
                    dimension: n,
                    len: tiles.len(),
                    expected: n.saturating_mul(n),
                })
            }
        };

        let mut seen = vec![false; cells];
        let mut blank = 0;
        for (idx, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(PuzzleError::NotAPermutation { value, limit: cells })?;
            if *slot {
                return Err(PuzzleError::Duplicate { value });
            }
            *slot = true;
            if value == 0 {
                blank = idx;
            }
        }

        Ok(Self { n, tiles, blank })
    }

    /// The solved board of dimension `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    pub fn goal(n: usize) -> Self {
        assert!(n >= 1, "goal requires a board of dimension 1 or more");
        let cells = n * n;
        let tiles = (1..cells as u32).chain(std::iter::once(0)).collect();

        Self { n, tiles, blank: cells - 1 }
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.n + col]
    }

    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.tiles.chunks(self.n).map(|row| row.to_vec()).collect()
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.n, self.blank % self.n)
    }

    fn goal_value(&self, idx: usize) -> u32 {
        if idx == self.tiles.len() - 1 {
            0
        } else {
            idx as u32 + 1
        }
    }

    /// Number of tiles, blank excluded, that are not in their goal cell.
    pub fn hamming(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(idx, &value)| value != 0 && value != self.goal_value(idx))
            .count() as u32
    }

    /// Row plus column distance of the tile at `(row, col)` from its goal
    /// cell. The blank is always at distance 0.
    pub fn distance(&self, row: usize, col: usize) -> u32 {
        match self.tile(row, col) {
            0 => 0,
            value => {
                let goal = value as usize - 1;
                (row.abs_diff(goal / self.n) + col.abs_diff(goal % self.n)) as u32
            }
        }
    }

    /// Sum of the row and column distances of every tile, blank excluded,
    /// from its goal cell.
    pub fn manhattan(&self) -> u32 {
        (0..self.tiles.len())
            .map(|idx| self.distance(idx / self.n, idx % self.n))
            .sum()
    }

    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    fn target(&self, dir: Direction) -> Option<usize> {
        let (row, col) = self.blank();

        match dir {
            Direction::Up => (row > 0).then(|| self.blank - self.n),
            Direction::Down => (row + 1 < self.n).then(|| self.blank + self.n),
            Direction::Left => (col > 0).then(|| self.blank - 1),
            Direction::Right => (col + 1 < self.n).then(|| self.blank + 1),
        }
    }

    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);

        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };

        Board { n: self.n, tiles, blank }
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |&dir| self.target(dir).is_some())
    }

    pub fn slide(&self, dir: Direction) -> Result<Board> {
        let target = self.target(dir).ok_or_else(|| {
            let (row, col) = self.blank();
            PuzzleError::IllegalMove(format!("cannot move blank {} from ({}, {})", dir, row, col))
        })?;

        Ok(self.swapped(self.blank, target))
    }

    /// Every board one slide away, in the order up, down, left, right.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.target(dir))
            .map(move |target| self.swapped(self.blank, target))
    }

    /// The board with the two tiles at row 0, columns 0 and 1 exchanged, or
    /// at row 1 when the blank is one of those two cells.
    ///
    /// Swapping two tiles flips the permutation parity, so exactly one of a
    /// board and its twin is solvable. Swapping the blank with a neighbour
    /// would only be a slide, hence the fallback row.
    ///
    /// # Panics
    ///
    /// Panics if the dimension is below 2.
    pub fn twin(&self) -> Board {
        assert!(self.n >= 2, "twin requires a board of dimension 2 or more");

        let first = if self.blank < 2 { self.n } else { 0 };
        self.swapped(first, first + 1)
    }

    /// The slide that turns `self` into `next`, if they are one slide apart.
    pub fn direction_to(&self, next: &Board) -> Option<Direction> {
        if self.n != next.n {
            return None;
        }

        Direction::ALL.into_iter().find(|&dir| {
            self.target(dir).map_or(false, |target| {
                target == next.blank && self.swapped(self.blank, target) == *next
            })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_idx, row) in self.tiles.chunks(self.n).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Parses the rendering produced by `Display`. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let mut grid: Vec<Vec<u32>> = vec![];

        for (line_idx, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = parse_row(line_idx + 1, line)?;
            grid.push(row);
        }

        Board::new(grid)
    }
}
