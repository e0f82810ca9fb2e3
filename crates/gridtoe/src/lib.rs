//! Gridtoe - N×N tic-tac-toe game logic
//!
//! This library provides the board state machine and the players that act on it.
//!
//! # Architecture
//!
//! - **Gameboard**: size×size grid of cells, move application, line and tie detection
//! - **Player**: closed set of move strategies (human input, uniform random)
//! - **Session**: alternates two players over one board until the game ends
//! - **IO**: collaborator traits the front end implements for input and display
//!
//! # Example
//!
//! ```
//! use gridtoe::{BoardSize, Gameboard, Mark};
//!
//! let mut board = Gameboard::new(BoardSize::default());
//! assert!(board.apply_move(0, Mark::X));
//! assert!(board.apply_move(1, Mark::X));
//! assert!(board.apply_move(2, Mark::X));
//! assert!(board.is_winner(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod io;
mod player;
mod rules;
mod session;
mod types;

// Crate-level exports - Domain types
pub use types::{BoardSize, Cell, Label, Mark, Outcome, Strategy};

// Crate-level exports - Board and rules
pub use board::Gameboard;
pub use rules::Line;

// Crate-level exports - Errors
pub use error::{ConfigError, MarkError, MoveError, PlayerError};

// Crate-level exports - Collaborators
pub use io::{GameOutput, MoveInput};

// Crate-level exports - Players
pub use player::{HumanPlayer, Player, RandomPlayer};

// Crate-level exports - Orchestration
pub use session::Session;
