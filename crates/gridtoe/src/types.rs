//! Core domain types for N×N tic-tac-toe.

use crate::error::{ConfigError, MarkError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol placed on the board.
///
/// Marks are single printable characters. Digits are refused so a placed
/// mark never prints the same as a cell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{_0}")]
#[serde(try_from = "char", into = "char")]
pub struct Mark(char);

impl Mark {
    /// Player X (moves first).
    pub const X: Mark = Mark('X');
    /// Player O (moves second).
    pub const O: Mark = Mark('O');

    /// Creates a mark from a character.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError`] if the character is a digit, whitespace, or a
    /// control character.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, MarkError> {
        if symbol.is_ascii_digit() {
            return Err(MarkError::Digit { symbol });
        }
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(MarkError::Unprintable { symbol });
        }
        Ok(Self(symbol))
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Mark {
    type Error = MarkError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::new(symbol)
    }
}

impl From<Mark> for char {
    fn from(mark: Mark) -> Self {
        mark.0
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Still holds its label; can be played.
    Open,
    /// Holds a placed mark. Never reverts to open.
    Occupied(Mark),
}

impl Cell {
    /// Checks if the cell can still be played.
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Open => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// A cell's row-major index, used to pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display("{_0}")]
pub struct Label(usize);

impl Label {
    /// Parses the exact decimal spelling of a label.
    ///
    /// Only canonical text matches: `"7"` is label 7, while `"07"`, `"+7"`
    /// and `" 7"` are not labels at all.
    #[instrument]
    pub fn parse(text: &str) -> Option<Self> {
        let index: usize = text.parse().ok()?;
        (index.to_string() == text).then_some(Self(index))
    }

    /// Returns the row-major index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Label {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Side length of a square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{_0}")]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest playable board.
    pub const MIN: usize = 3;
    /// Size used when none is configured.
    pub const DEFAULT: usize = 3;
    /// Largest playable board: 10 000 cells.
    pub const MAX: usize = 100;

    /// Creates a validated board size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is outside
    /// [`BoardSize::MIN`]..=[`BoardSize::MAX`].
    #[track_caller]
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(ConfigError::new(format!(
                "Board size must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                size
            )));
        }
        Ok(Self(size))
    }

    /// Returns the number of cells, `size²`.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// How a player chooses moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Moves typed in by a person.
    #[default]
    #[strum(to_string = "human", serialize = "h")]
    Human,
    /// Uniformly random open cell.
    #[strum(to_string = "random", serialize = "r")]
    Random,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    #[display("Player {_0} wins!")]
    Win(Mark),
    /// The board filled with no line.
    #[display("It's a tie!")]
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse_canonical() {
        assert_eq!(Label::parse("7"), Some(Label(7)));
        assert_eq!(Label::parse("0"), Some(Label(0)));
        assert_eq!(Label::parse("15"), Some(Label(15)));
    }

    #[test]
    fn test_label_parse_rejects_noncanonical() {
        assert_eq!(Label::parse("07"), None);
        assert_eq!(Label::parse("+7"), None);
        assert_eq!(Label::parse(" 7"), None);
        assert_eq!(Label::parse("-1"), None);
        assert_eq!(Label::parse("X"), None);
        assert_eq!(Label::parse(""), None);
    }

    #[test]
    fn test_mark_rejects_digits_and_blanks() {
        assert!(matches!(Mark::new('4'), Err(MarkError::Digit { symbol: '4' })));
        assert!(matches!(Mark::new(' '), Err(MarkError::Unprintable { .. })));
        assert_eq!(Mark::new('X').unwrap(), Mark::X);
        assert_eq!(Mark::X.to_string(), "X");
    }

    #[test]
    fn test_board_size_minimum() {
        assert!(BoardSize::new(2).is_err());
        assert_eq!(BoardSize::new(3).unwrap().get(), 3);
        assert_eq!(BoardSize::default().get(), BoardSize::DEFAULT);
    }

    #[test]
    fn test_board_size_maximum() {
        assert_eq!(BoardSize::new(BoardSize::MAX).unwrap().cell_count(), 10_000);
        assert!(BoardSize::new(BoardSize::MAX + 1).is_err());
        assert!(BoardSize::new(usize::MAX).is_err());
    }

    #[test]
    fn test_strategy_parses_short_and_long_forms() {
        assert_eq!("human".parse::<Strategy>().unwrap(), Strategy::Human);
        assert_eq!("Random".parse::<Strategy>().unwrap(), Strategy::Random);
        assert_eq!("r".parse::<Strategy>().unwrap(), Strategy::Random);
        assert_eq!(Strategy::Random.to_string(), "random");
        assert!("robot".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Win(Mark::O).to_string(), "Player O wins!");
        assert_eq!(Outcome::Tie.to_string(), "It's a tie!");
    }
}
