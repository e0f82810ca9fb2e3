//! Fullness and tie detection.

use super::line::winner;
use crate::board::Gameboard;
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument(skip(board))]
pub fn is_full(board: &Gameboard) -> bool {
    board.cells().iter().all(|cell| !cell.is_open())
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_tie(board: &Gameboard) -> bool {
    is_full(board) && winner(board).is_none()
}
