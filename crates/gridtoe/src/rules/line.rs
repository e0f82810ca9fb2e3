//! Line detection: rows, columns and both diagonals.

use crate::board::Gameboard;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// A full row, column, or diagonal of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Every cell of one row.
    Row(usize),
    /// Every cell of one column.
    Column(usize),
    /// Top-left to bottom-right, where row == column.
    MainDiagonal,
    /// Top-right to bottom-left, where row + column == size - 1.
    AntiDiagonal,
}

impl Line {
    /// All `2 * size + 2` lines of a board of side `size`.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// The `(row, column)` coordinates covered by this line.
    pub fn coords(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            Line::Row(row) => (row, i),
            Line::Column(col) => (i, col),
            Line::MainDiagonal => (i, i),
            Line::AntiDiagonal => (i, size - 1 - i),
        })
    }
}

/// Returns the first line made entirely of `mark`, if any.
#[instrument(skip(board))]
pub fn completed_line(board: &Gameboard, mark: Mark) -> Option<Line> {
    let size = board.size();
    Line::all(size).find(|line| {
        line.coords(size)
            .all(|(row, col)| board.cell(row, col) == Some(Cell::Occupied(mark)))
    })
}

/// Checks if any row, column, or diagonal is made entirely of `mark`.
#[instrument(skip(board))]
pub fn has_line(board: &Gameboard, mark: Mark) -> bool {
    completed_line(board, mark).is_some()
}

/// Returns the mark owning a completed line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Gameboard) -> Option<Mark> {
    let size = board.size();
    Line::all(size).find_map(|line| {
        let mut cells = line.coords(size).map(|(row, col)| board.cell(row, col));
        let first = cells.next()??.mark()?;
        cells
            .all(|cell| cell == Some(Cell::Occupied(first)))
            .then_some(first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardSize;

    fn board(size: usize) -> Gameboard {
        Gameboard::new(BoardSize::new(size).unwrap())
    }

    #[test]
    fn test_line_count() {
        assert_eq!(Line::all(3).count(), 8);
        assert_eq!(Line::all(5).count(), 12);
    }

    #[test]
    fn test_anti_diagonal_coords() {
        let coords: Vec<_> = Line::AntiDiagonal.coords(4).collect();
        assert_eq!(coords, vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_no_line_empty_board() {
        let board = board(3);
        assert!(!has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_column_on_four_by_four() {
        let mut board = board(4);
        for label in [1, 5, 9, 13] {
            assert!(board.apply_move(label, Mark::O));
        }
        assert_eq!(completed_line(&board, Mark::O), Some(Line::Column(1)));
        assert_eq!(winner(&board), Some(Mark::O));
        assert!(!has_line(&board, Mark::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = board(3);
        for label in [2, 4, 6] {
            assert!(board.apply_move(label, Mark::X));
        }
        assert_eq!(completed_line(&board, Mark::X), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_incomplete_line() {
        let mut board = board(3);
        board.apply_move(0, Mark::X);
        board.apply_move(4, Mark::X);
        board.apply_move(8, Mark::O);
        assert!(!has_line(&board, Mark::X));
        assert_eq!(winner(&board), None);
    }
}
