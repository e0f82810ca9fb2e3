//! Line-oriented console over any reader and writer.

use gridtoe::{GameOutput, Gameboard, MoveError, MoveInput, Outcome};
use std::io::{self, BufRead, Stdin, Stdout, Write};
use tracing::{debug, instrument};

/// Console reading lines from `R` and writing to `W`.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console on the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console from a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes one line of text.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()
    }

    /// Gives back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> MoveInput for Console<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // Undecodable bytes become U+FFFD and are refused like any other bad label.
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn reject(&mut self, _input: &str, reason: &MoveError) -> io::Result<()> {
        debug!(%reason, "Rejecting move");
        self.say("Invalid move. Try again.")
    }
}

impl<R: BufRead, W: Write> GameOutput for Console<R, W> {
    fn greet(&mut self) -> io::Result<()> {
        self.say("Hello from tic-tac-toe!")
    }

    fn render(&mut self, board: &Gameboard) -> io::Result<()> {
        self.say(board)
    }

    fn announce(&mut self, outcome: Outcome) -> io::Result<()> {
        self.say(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe::{BoardSize, Cell, HumanPlayer, Mark};

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn test_read_line_strips_newline_and_shows_prompt() {
        let mut console = console("4\r\n 7 \n");
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("4"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some(" 7 "));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(output(console), "> > > ");
    }

    #[test]
    fn test_invalid_utf8_line_is_refused_not_fatal() {
        let mut board = Gameboard::new(BoardSize::default());
        let mut console = Console::new(&b"\xff\n4\n"[..], Vec::new());

        HumanPlayer::new(Mark::X)
            .decide_move(&mut board, &mut console)
            .unwrap();

        assert_eq!(board.cell_at(4), Some(Cell::Occupied(Mark::X)));
        let written = output(console);
        assert_eq!(written.matches("Invalid move. Try again.").count(), 1);
        assert_eq!(written.matches("Player X, enter your move: ").count(), 2);
    }

    #[test]
    fn test_render_and_announce() {
        let mut console = console("");
        let mut board = Gameboard::new(BoardSize::default());
        board.apply_move(4, Mark::O);
        console.greet().unwrap();
        console.render(&board).unwrap();
        console.announce(Outcome::Win(Mark::O)).unwrap();
        assert_eq!(
            output(console),
            "Hello from tic-tac-toe!\n0 1 2\n3 O 5\n6 7 8\nPlayer O wins!\n"
        );
    }

    #[test]
    fn test_reject_message() {
        let mut console = console("");
        let reason = MoveError::NotALabel {
            input: "x".to_string(),
        };
        console.reject("x", &reason).unwrap();
        assert_eq!(output(console), "Invalid move. Try again.\n");
    }
}
