use std::io::{Stdout, Write};

use crate::error::InputError;
use crate::game::{Grid, Symbol};
use crate::prompt::{LineSource, Prompter, StdinLines};

use super::agent::Player;

const INVALID_BANNER: &str = "\n=====================================================================\n\
INVALID COLUMN NUMBER!\n\
=====================================================================";

/// A person typing 1-based column numbers at a prompt.
///
/// Bad entries (not a number, off the board, or a full column) are answered
/// with a banner and the question is asked again.
pub struct HumanPlayer<I = StdinLines, W = Stdout> {
    name: String,
    symbol: Symbol,
    prompter: Prompter<I, W>,
}

impl HumanPlayer {
    /// Human at the terminal
    pub fn stdio(name: impl Into<String>, symbol: Symbol) -> Self {
        HumanPlayer::new(name, symbol, Prompter::stdio())
    }
}

impl<I: LineSource, W: Write> HumanPlayer<I, W> {
    pub fn new(name: impl Into<String>, symbol: Symbol, prompter: Prompter<I, W>) -> Self {
        HumanPlayer {
            name: name.into(),
            symbol,
            prompter,
        }
    }

    pub fn prompter(&self) -> &Prompter<I, W> {
        &self.prompter
    }
}

/// Parse a 1-based column answer into an open 0-based column.
fn parse_column(answer: &str, grid: &Grid) -> Option<usize> {
    let number: usize = answer.parse().ok()?;
    let column = number.checked_sub(1)?;
    (!grid.is_column_full(column)).then_some(column)
}

impl<I: LineSource, W: Write> Player for HumanPlayer<I, W> {
    fn select_move(&mut self, grid: &Grid) -> Result<usize, InputError> {
        assert!(!grid.is_full(), "No legal columns available");
        let prompt = format!("{}, please enter a column number: ", self.name);
        self.prompter
            .ask_until(&prompt, INVALID_BANNER, |answer| parse_column(answer, grid))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }
}
