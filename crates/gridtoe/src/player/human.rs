//! Human player that types moves.

use crate::board::Gameboard;
use crate::error::PlayerError;
use crate::io::MoveInput;
use crate::types::Mark;
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument};

/// Human player reading labels from a [`MoveInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct HumanPlayer {
    /// Mark placed by this player.
    mark: Mark,
}

impl HumanPlayer {
    /// Prompt shown before each attempt.
    pub fn prompt(&self) -> String {
        format!("Player {}, enter your move: ", self.mark)
    }

    /// Prompts until a typed label is accepted by the board.
    ///
    /// Refused input is reported through [`MoveInput::reject`] and the
    /// player is asked again, with no limit on attempts.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InputClosed`] when the input runs out and
    /// [`PlayerError::Io`] when it fails.
    #[instrument(skip(self, board, input), fields(mark = %self.mark))]
    pub fn decide_move(
        &self,
        board: &mut Gameboard,
        input: &mut dyn MoveInput,
    ) -> Result<(), PlayerError> {
        let prompt = self.prompt();
        loop {
            let Some(line) = input.read_line(&prompt)? else {
                return Err(PlayerError::InputClosed { mark: self.mark });
            };
            let line = line.trim();
            match board.try_input(line, self.mark) {
                Ok(()) => {
                    debug!(input = line, "Move accepted");
                    return Ok(());
                }
                Err(reason) => {
                    debug!(input = line, %reason, "Move refused");
                    input.reject(line, &reason)?;
                }
            }
        }
    }
}
