use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::error::{PuzzleError, Result};

pub(crate) fn parse_row(line: usize, row: &str) -> Result<Vec<u32>> {
    row.split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|e| PuzzleError::Parse {
                line,
                message: format!("{:?}: {}", token, e),
            })
        })
        .collect()
}

/// Parses a sequence of puzzles, each written as its dimension on one line
/// followed by one line per row. Blank lines and `#` comments are skipped.
pub fn parse_puzzles(input: &str) -> Result<Vec<Board>> {
    let mut result: Vec<Board> = vec![];
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    while let Some((header_line, header)) = lines.next() {
        let n = header.parse::<usize>().map_err(|e| PuzzleError::Parse {
            line: header_line,
            message: format!("expected a board dimension, found {:?}: {}", header, e),
        })?;

        let mut grid: Vec<Vec<u32>> = Vec::new();
        for _ in 0..n {
            let (line, row) = lines.next().ok_or_else(|| PuzzleError::Parse {
                line: header_line,
                message: format!("board ended after {} of {} rows", grid.len(), n),
            })?;
            grid.push(parse_row(line, row)?);
        }

        result.push(Board::new(grid)?);
    }

    Ok(result)
}

pub fn read_puzzles(path: impl AsRef<Path>) -> Result<Vec<Board>> {
    let input = fs::read_to_string(path)?;
    parse_puzzles(&input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_several_puzzles() {
        let input = "# two puzzles\n2\n1 2\n0 3\n\n3\n0 1 3\n4 2 5\n7 8 6\n";
        let puzzles = parse_puzzles(input).unwrap();

        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].rows(), vec![vec![1, 2], vec![0, 3]]);
        assert_eq!(puzzles[1].dimension(), 3);
        assert_eq!(puzzles[1].blank(), (0, 0));
    }

    #[test]
    fn reports_truncated_board() {
        let err = parse_puzzles("3\n1 2 3\n4 5 6\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 1, .. }), "{:?}", err);
    }

    #[test]
    fn oversized_dimension_is_a_parse_error() {
        let err = parse_puzzles("99999999999999999\n1 2\n0 3\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 1, .. }), "{:?}", err);
    }

    #[test]
    fn reports_bad_token_line() {
        let err = parse_puzzles("2\n1 2\n0 x\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 3, .. }), "{:?}", err);
    }

    #[test]
    fn rejects_invalid_grid() {
        let err = parse_puzzles("2\n1 1\n0 3\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Duplicate { value: 1 }), "{:?}", err);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_puzzles("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)));
    }
}
