//! Players and their move strategies.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::board::Gameboard;
use crate::error::PlayerError;
use crate::io::{GameOutput, MoveInput};
use crate::types::{Mark, Outcome, Strategy};
use tracing::{info, instrument};

/// A participant in a game, dispatched over a closed set of strategies.
#[derive(Debug, Clone)]
pub enum Player {
    /// Moves read from a [`MoveInput`].
    Human(HumanPlayer),
    /// Uniformly random open cells.
    Random(RandomPlayer),
}

impl Player {
    /// Creates a player for `strategy`.
    ///
    /// `seed` only affects random players; without one they draw from the
    /// operating system.
    #[instrument]
    pub fn new(strategy: Strategy, mark: Mark, seed: Option<u64>) -> Self {
        match strategy {
            Strategy::Human => Player::Human(HumanPlayer::new(mark)),
            Strategy::Random => Player::Random(match seed {
                Some(seed) => RandomPlayer::seeded(mark, seed),
                None => RandomPlayer::from_os_rng(mark),
            }),
        }
    }

    /// Returns this player's mark.
    pub fn mark(&self) -> Mark {
        match self {
            Player::Human(player) => *player.mark(),
            Player::Random(player) => player.mark(),
        }
    }

    /// Returns this player's strategy.
    pub fn strategy(&self) -> Strategy {
        match self {
            Player::Human(_) => Strategy::Human,
            Player::Random(_) => Strategy::Random,
        }
    }

    /// Places exactly one mark on `board`.
    ///
    /// Random players ignore `input`. A random player facing a full board
    /// returns without moving.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError`] if a human's input fails or runs out.
    pub fn decide_move(
        &mut self,
        board: &mut Gameboard,
        input: &mut dyn MoveInput,
    ) -> Result<(), PlayerError> {
        match self {
            Player::Human(player) => player.decide_move(board, input),
            Player::Random(player) => {
                player.decide_move(board);
                Ok(())
            }
        }
    }

    /// Checks if this player has a completed line.
    pub fn is_winner(&self, board: &Gameboard) -> bool {
        board.is_winner(self.mark())
    }

    /// Checks if the session must stop after this player's move.
    ///
    /// A win for this player is checked before a tie, so a move that fills
    /// the board and completes a line is announced as a win.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Io`] if the announcement cannot be written.
    pub fn move_not_available(
        &self,
        board: &Gameboard,
        output: &mut dyn GameOutput,
    ) -> Result<bool, PlayerError> {
        Ok(self.finish_turn(board, output)?.is_some())
    }

    /// Announces and returns the result if this player's move ended the game.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Io`] if the announcement cannot be written.
    #[instrument(skip(self, board, output), fields(mark = %self.mark()))]
    pub fn finish_turn(
        &self,
        board: &Gameboard,
        output: &mut dyn GameOutput,
    ) -> Result<Option<Outcome>, PlayerError> {
        let outcome = board.outcome_for(self.mark());
        if let Some(outcome) = outcome {
            info!(%outcome, "Game over");
            output.announce(outcome)?;
        }
        Ok(outcome)
    }
}
