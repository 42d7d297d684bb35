//! Rule-cascade opponent.
//!
//! The player looks for straight runs of its own or the opponent's symbol and
//! plays the open cell next to the first run it can reach: threes before twos,
//! own runs before blocking, rows before columns. Diagonals are never probed
//! and there is no look-ahead; with no usable run it plays a random column.

use std::borrow::Cow;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::InputError;
use crate::game::{Grid, Matrix, Symbol};

use super::agent::Player;
use super::random::random_column;

/// Which straight lines a probe scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Map (line, position along line) in the probe's view back to grid
    /// (row, column). Columns are scanned as the rows of the transposed grid.
    fn to_grid(self, line: usize, along: usize) -> (usize, usize) {
        match self {
            Axis::Row => (line, along),
            Axis::Column => (along, line),
        }
    }
}

/// Whose run a rule looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Extend the player's own run
    Own,
    /// Block the opponent's run
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub target: Target,
    pub length: usize,
    pub axis: Axis,
}

const fn rule(target: Target, length: usize, axis: Axis) -> Rule {
    Rule {
        target,
        length,
        axis,
    }
}

/// Rules in priority order; the first one that yields a column decides.
pub const RULES: [Rule; 8] = [
    rule(Target::Own, 3, Axis::Row),
    rule(Target::Own, 3, Axis::Column),
    rule(Target::Opponent, 3, Axis::Row),
    rule(Target::Opponent, 3, Axis::Column),
    rule(Target::Own, 2, Axis::Row),
    rule(Target::Own, 2, Axis::Column),
    rule(Target::Opponent, 2, Axis::Row),
    rule(Target::Opponent, 2, Axis::Column),
];

/// A chosen column and the rule that produced it (`None` for the random
/// fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub rule: Option<Rule>,
}

/// Column that extends a run of `length` `symbol` cells along `axis`.
///
/// Runs come from every `length`-sized window of the grid, in window order.
/// For each run the cell before it is tried, then the cell after it; a cell
/// qualifies when a piece dropped into its column lands exactly there.
pub fn probe(grid: &Grid, axis: Axis, length: usize, symbol: Symbol) -> Option<usize> {
    let view: Cow<'_, Matrix> = match axis {
        Axis::Row => Cow::Borrowed(grid.cells()),
        Axis::Column => Cow::Owned(grid.cells().transposed()),
    };

    // (line, start) of each run, first sighting only
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for window in view.windows(length) {
        for offset in 0..length {
            if window.uniform_row(offset) == Some(symbol) {
                let run = (window.top() + offset, window.left());
                if !runs.contains(&run) {
                    runs.push(run);
                }
            }
        }
    }

    runs.into_iter().find_map(|(line, start)| {
        let before = start.checked_sub(1);
        let after = Some(start + length);
        [before, after].into_iter().flatten().find_map(|along| {
            let (row, column) = axis.to_grid(line, along);
            grid.is_playable_at(row, column).then_some(column)
        })
    })
}

/// Opponent that plays by the [`RULES`] cascade.
pub struct HeuristicPlayer {
    name: String,
    symbol: Symbol,
    rng: StdRng,
}

impl HeuristicPlayer {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        HeuristicPlayer {
            name: name.into(),
            symbol,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the fallback column choice
    pub fn with_seed(name: impl Into<String>, symbol: Symbol, seed: u64) -> Self {
        HeuristicPlayer {
            name: name.into(),
            symbol,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run the cascade without committing to anything.
    pub fn decide(&mut self, grid: &Grid) -> Decision {
        assert!(!grid.is_full(), "No legal columns available");

        for rule in RULES {
            let symbol = match rule.target {
                Target::Own => self.symbol,
                Target::Opponent => self.symbol.other(),
            };
            if let Some(column) = probe(grid, rule.axis, rule.length, symbol) {
                return Decision {
                    column,
                    rule: Some(rule),
                };
            }
        }

        Decision {
            column: random_column(&mut self.rng, grid),
            rule: None,
        }
    }
}

impl Player for HeuristicPlayer {
    fn select_move(&mut self, grid: &Grid) -> Result<usize, InputError> {
        let decision = self.decide(grid);
        match decision.rule {
            Some(rule) => debug!(
                player = %self.name,
                column = decision.column,
                ?rule,
                "heuristic rule matched"
            ),
            None => debug!(player = %self.name, column = decision.column, "random fallback"),
        }
        Ok(decision.column)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }
}
