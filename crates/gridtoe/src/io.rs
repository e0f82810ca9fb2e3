//! Collaborator traits implemented by the front end.
//!
//! The core never touches a terminal. Whoever runs a game supplies an input
//! source for human moves and an output sink for boards and results.

use crate::board::Gameboard;
use crate::error::MoveError;
use crate::types::Outcome;
use std::io;

/// Source of typed moves for human players.
pub trait MoveInput {
    /// Shows `prompt` and blocks for one line of input.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Tells the person their move was refused so they can try again.
    fn reject(&mut self, input: &str, reason: &MoveError) -> io::Result<()>;
}

/// Sink for everything a game shows to its players.
pub trait GameOutput {
    /// Opening banner, shown once per session.
    fn greet(&mut self) -> io::Result<()>;

    /// Draws the current board.
    fn render(&mut self, board: &Gameboard) -> io::Result<()>;

    /// Reports how the game ended.
    fn announce(&mut self, outcome: Outcome) -> io::Result<()>;
}
