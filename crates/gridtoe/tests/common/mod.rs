//! Scripted console shared by the integration tests.

#![allow(dead_code)]

use gridtoe::{GameOutput, Gameboard, MoveError, MoveInput, Outcome};
use std::collections::VecDeque;
use std::io;

/// Console that replays canned input and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    pub inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub rejected: Vec<String>,
    pub renders: Vec<String>,
    pub announced: Vec<Outcome>,
    pub greeted: bool,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl MoveInput for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn reject(&mut self, input: &str, _reason: &MoveError) -> io::Result<()> {
        self.rejected.push(input.to_string());
        Ok(())
    }
}

impl GameOutput for ScriptedConsole {
    fn greet(&mut self) -> io::Result<()> {
        self.greeted = true;
        Ok(())
    }

    fn render(&mut self, board: &Gameboard) -> io::Result<()> {
        self.renders.push(board.to_string());
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome) -> io::Result<()> {
        self.announced.push(outcome);
        Ok(())
    }
}
