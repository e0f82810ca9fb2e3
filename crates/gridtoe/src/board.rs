//! The N×N gameboard state machine.

use crate::error::MoveError;
use crate::rules;
use crate::types::{BoardSize, Cell, Label, Mark, Outcome};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Square grid of cells in row-major order.
///
/// Each cell starts open and is addressed by its label, the row-major index
/// `0..size²`. [`Gameboard::apply_move`] is the only mutator, and a placed
/// mark is never removed. Boards serialize for display but are only ever
/// built through [`Gameboard::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gameboard {
    /// Side length.
    size: usize,
    /// `size * size` cells, row-major.
    cells: Vec<Cell>,
    /// Digit count of the largest label, for aligned rendering.
    label_width: usize,
}

impl Gameboard {
    /// Creates a board with every cell open.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let cell_count = size.cell_count();
        let max_index = cell_count - 1;
        let label_width = max_index.checked_ilog10().map_or(1, |d| d as usize + 1);
        debug!(%size, label_width, "Created board");
        Self {
            size: size.get(),
            cells: vec![Cell::Open; cell_count],
            label_width,
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the largest label, `size² - 1`.
    pub fn max_index(&self) -> usize {
        self.cells.len() - 1
    }

    /// Returns the display width of the largest label.
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Returns the cell with the given label, or `None` off the board.
    pub fn cell_at(&self, label: usize) -> Option<Cell> {
        self.cells.get(label).copied()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Iterates over the labels of cells that can still be played.
    pub fn open_labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_open())
            .map(|(index, _)| Label::from(index))
    }

    /// Checks if at least one cell can still be played.
    pub fn has_open_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_open())
    }

    /// Places `mark` on the open cell with `label`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] past the last cell and
    /// [`MoveError::Occupied`] if the cell already holds a mark. The board is
    /// unchanged on error.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, label: usize, mark: Mark) -> Result<(), MoveError> {
        let label = Label::from(label);
        let max = self.max_index();
        let cell = self
            .cells
            .get_mut(label.index())
            .ok_or(MoveError::OutOfRange { label, max })?;

        match *cell {
            Cell::Occupied(existing) => Err(MoveError::Occupied {
                label,
                mark: existing,
            }),
            Cell::Open => {
                *cell = Cell::Occupied(mark);
                debug!("Placed mark");
                Ok(())
            }
        }
    }

    /// Places `mark` on the open cell with `label`, reporting success.
    pub fn apply_move(&mut self, label: usize, mark: Mark) -> bool {
        self.try_move(label, mark).is_ok()
    }

    /// Places `mark` on the open cell whose label is spelled by `input`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotALabel`] if `input` is not the exact decimal
    /// text of a label, otherwise as [`Gameboard::try_move`].
    #[instrument(skip(self))]
    pub fn try_input(&mut self, input: &str, mark: Mark) -> Result<(), MoveError> {
        let label = Label::parse(input).ok_or_else(|| MoveError::NotALabel {
            input: input.to_string(),
        })?;
        self.try_move(label.index(), mark)
    }

    /// Textual form of [`Gameboard::apply_move`].
    pub fn apply_input(&mut self, input: &str, mark: Mark) -> bool {
        self.try_input(input, mark).is_ok()
    }

    /// Checks if `mark` fills a whole row, column, or diagonal.
    pub fn has_line(&self, mark: Mark) -> bool {
        rules::has_line(self, mark)
    }

    /// Returns the first line made entirely of `mark`, if any.
    pub fn completed_line(&self, mark: Mark) -> Option<rules::Line> {
        rules::completed_line(self, mark)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if `mark` has won. A full board alone is not a win.
    pub fn is_winner(&self, mark: Mark) -> bool {
        self.has_line(mark)
    }

    /// Checks if the board is full with no completed line.
    pub fn is_tie(&self) -> bool {
        rules::is_tie(self)
    }

    /// Checks if the game is over from `mark`'s point of view.
    pub fn is_done(&self, mark: Mark) -> bool {
        self.is_winner(mark) || self.is_tie()
    }

    /// Returns the mark owning a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Result for `mark`, checking the win before the tie.
    pub fn outcome_for(&self, mark: Mark) -> Option<Outcome> {
        if self.is_winner(mark) {
            Some(Outcome::Win(mark))
        } else if self.is_tie() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }

    /// Result of the game for any player, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(mark) => Some(Outcome::Win(mark)),
            None if self.is_full() => Some(Outcome::Tie),
            None => None,
        }
    }
}

impl fmt::Display for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.label_width;
        for (row, cells) in self.rows().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Cell::Open => write!(f, "{:>width$}", row * self.size + col)?,
                    Cell::Occupied(mark) => write!(f, "{:>width$}", mark.as_char())?,
                }
            }
        }
        Ok(())
    }
}
