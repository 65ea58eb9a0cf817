use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Solver requires an initial board")]
    MissingBoard,
    #[error("Board must have at least one row")]
    EmptyGrid,
    #[error("Board must be square (row {row} has {len} cells, expected {expected})")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("Board of dimension {dimension} needs {expected} tiles, found {len}")]
    WrongLength { dimension: usize, len: usize, expected: usize },
    #[error("Tile {value} is outside of the range 0..{limit}")]
    NotAPermutation { value: u32, limit: usize },
    #[error("Tile {value} appears more than once")]
    Duplicate { value: u32 },
    #[error("Illegal move: {0}")]
    IllegalMove(String),
    #[error("Could not parse puzzle at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
