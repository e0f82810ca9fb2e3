//! Turn-alternating orchestration of one game.

use crate::board::Gameboard;
use crate::error::{ConfigError, PlayerError};
use crate::io::{GameOutput, MoveInput};
use crate::player::Player;
use crate::types::Outcome;
use tracing::{debug, info, instrument};

/// One game between two players over a single board.
///
/// The session owns the board and lends it to each player for its turn,
/// so only one move is ever in flight.
#[derive(Debug, Clone)]
pub struct Session {
    board: Gameboard,
    player_x: Player,
    player_o: Player,
}

impl Session {
    /// Creates a session for two players with distinct marks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if both players share a mark.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn new(board: Gameboard, player_x: Player, player_o: Player) -> Result<Self, ConfigError> {
        if player_x.mark() == player_o.mark() {
            return Err(ConfigError::new(format!(
                "Both players use mark {}",
                player_x.mark()
            )));
        }
        Ok(Self {
            board,
            player_x,
            player_o,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Gameboard {
        &self.board
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> [&Player; 2] {
        [&self.player_x, &self.player_o]
    }

    /// Plays turns until a player wins or the board fills.
    ///
    /// Greets, shows the empty board, then for each turn lets the player
    /// move, shows the board and checks whether the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError`] if the console fails or a human's input runs
    /// out. The board keeps every move made before the failure.
    #[instrument(skip_all, fields(size = self.board.size()))]
    pub fn run<C>(&mut self, console: &mut C) -> Result<Outcome, PlayerError>
    where
        C: MoveInput + GameOutput,
    {
        info!(
            x = %self.player_x.strategy(),
            o = %self.player_o.strategy(),
            "Starting game"
        );
        console.greet()?;
        console.render(&self.board)?;

        let mut turn = 0usize;
        loop {
            for player in [&mut self.player_x, &mut self.player_o] {
                turn += 1;
                let mark = player.mark();
                debug!(turn, %mark, "Waiting for move");

                player.decide_move(&mut self.board, console)?;
                console.render(&self.board)?;

                if let Some(outcome) = player.finish_turn(&self.board, console)? {
                    info!(%outcome, turns = turn, "Game finished");
                    return Ok(outcome);
                }
            }
        }
    }
}
