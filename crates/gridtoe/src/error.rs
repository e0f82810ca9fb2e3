//! Error types for gridtoe.

use crate::types::{Label, Mark};
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Why a move was refused by the board.
///
/// Refusals are expected during play; callers retry rather than abort.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Text that does not spell a label.
    #[display("{input:?} is not a cell label")]
    NotALabel {
        /// The rejected text.
        input: String,
    },
    /// Label past the last cell.
    #[display("label {label} is outside 0..={max}")]
    OutOfRange {
        /// The requested label.
        label: Label,
        /// The largest label on this board.
        max: usize,
    },
    /// Cell already holds a mark.
    #[display("cell {label} is already taken by {mark}")]
    Occupied {
        /// The requested label.
        label: Label,
        /// The mark already in the cell.
        mark: Mark,
    },
}

/// Invalid character for a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MarkError {
    /// Digits would print like labels.
    #[display("mark {symbol:?} is a digit")]
    Digit {
        /// The rejected character.
        symbol: char,
    },
    /// Whitespace and control characters are invisible on the board.
    #[display("mark {symbol:?} is not printable")]
    Unprintable {
        /// The rejected character.
        symbol: char,
    },
}

/// Failure while a player was deciding a move.
#[derive(Debug, Display, Error, From)]
pub enum PlayerError {
    /// The input collaborator ran dry before a legal move arrived.
    #[display("input closed before player {mark} moved")]
    InputClosed {
        /// Player who was waiting for input.
        mark: Mark,
    },
    /// Reading input or writing output failed.
    #[display("console error: {_0}")]
    #[from]
    Io(std::io::Error),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn read_failure() -> Result<(), PlayerError> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))?;
        Ok(())
    }

    #[test]
    fn test_io_error_converts_to_player_error() {
        let err = read_failure().unwrap_err();
        assert!(matches!(err, PlayerError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "console error: pipe closed");
    }
}
