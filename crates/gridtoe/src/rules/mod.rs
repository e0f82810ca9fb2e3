//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the board only has to answer "what is in this cell".

pub mod full;
pub mod line;

pub use full::{is_full, is_tie};
pub use line::{Line, completed_line, has_line, winner};
