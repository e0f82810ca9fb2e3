//! Interactive questions asked before a game when `--ask` is given.
//!
//! Bad answers never reach the game: the question is repeated until the
//! answer parses or the input runs out.

use crate::config::GameConfig;
use crate::console::Console;
use gridtoe::{BoardSize, ConfigError, MoveInput, Strategy};
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

/// Parses a board size answer. Blank means the default.
///
/// # Errors
///
/// Returns [`ConfigError`] if the answer is not a whole number of at least 3.
#[instrument]
pub fn parse_size(answer: &str) -> Result<BoardSize, ConfigError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(BoardSize::default());
    }
    let size = answer
        .parse::<usize>()
        .map_err(|_| ConfigError::new(format!("{:?} is not a whole number", answer)))?;
    BoardSize::new(size)
}

/// Parses a strategy answer. Blank means human.
///
/// # Errors
///
/// Returns [`ConfigError`] if the answer names no strategy.
#[instrument]
pub fn parse_strategy(answer: &str) -> Result<Strategy, ConfigError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(Strategy::default());
    }
    answer
        .parse()
        .map_err(|_| ConfigError::new(format!("{:?} is not a player type", answer)))
}

/// Asks until `parse` accepts an answer. `None` if input runs out.
fn ask<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    hint: &str,
    parse: impl Fn(&str) -> Result<T, ConfigError>,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = console.read_line(prompt)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                warn!(error = %e, "Rejected setup answer");
                console.say(hint)?;
            }
        }
    }
}

/// Asks for board size and both strategies, starting from `base`.
///
/// Returns `None` if the input runs out before every question is answered.
///
/// # Errors
///
/// Returns an I/O error if the console fails.
#[instrument(skip(console))]
pub fn ask_config<R, W>(
    console: &mut Console<R, W>,
    base: GameConfig,
) -> io::Result<Option<GameConfig>>
where
    R: BufRead,
    W: Write,
{
    let size_prompt = format!("Board size (default {}): ", BoardSize::DEFAULT);
    let size_hint = format!("Please enter a whole number of at least {}.", BoardSize::MIN);
    let Some(size) = ask(console, &size_prompt, &size_hint, parse_size)? else {
        return Ok(None);
    };

    let options = Strategy::iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("/");
    let strategy_hint = format!("Please answer one of {}.", options);

    let mut strategies = [Strategy::default(); 2];
    for (slot, mark) in strategies.iter_mut().zip(["X", "O"]) {
        let prompt = format!("Player {} type ({}, default human): ", mark, options);
        let Some(strategy) = ask(console, &prompt, &strategy_hint, parse_strategy)? else {
            return Ok(None);
        };
        *slot = strategy;
    }

    let [player_x, player_o] = strategies;
    Ok(Some(base.with_size(size).with_strategies(player_x, player_o)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("").unwrap().get(), 3);
        assert_eq!(parse_size(" 5 ").unwrap().get(), 5);
        assert!(parse_size("2").is_err());
        assert!(parse_size("three").is_err());
        assert!(parse_size("-4").is_err());
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("").unwrap(), Strategy::Human);
        assert_eq!(parse_strategy("R").unwrap(), Strategy::Random);
        assert_eq!(parse_strategy("human").unwrap(), Strategy::Human);
        assert!(parse_strategy("minimax").is_err());
    }

    #[test]
    fn test_ask_config_reprompts_on_bad_answers() {
        let input = "2\nfour\n4\nalien\nrandom\n\n";
        let mut console = Console::new(input.as_bytes(), Vec::new());

        let config = ask_config(&mut console, GameConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(*config.size(), 4);
        assert_eq!(*config.player_x(), Strategy::Random);
        assert_eq!(*config.player_o(), Strategy::Human);

        let written = String::from_utf8(console.into_parts().1).unwrap();
        assert_eq!(written.matches("Please enter a whole number").count(), 2);
        assert_eq!(written.matches("Please answer one of human/random.").count(), 1);
    }

    #[test]
    fn test_ask_config_stops_at_end_of_input() {
        let mut console = Console::new("5\n".as_bytes(), Vec::new());
        assert_eq!(ask_config(&mut console, GameConfig::default()).unwrap(), None);
    }
}
