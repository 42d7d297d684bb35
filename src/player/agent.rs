use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::game::{Grid, Symbol};

/// Anything that can take a turn: a person at a prompt or a scripted opponent.
pub trait Player {
    /// Choose a column for the next piece.
    ///
    /// The grid must have at least one open column. The returned column is
    /// always on the grid and not full; implementations treat anything else as
    /// a bug. Only a human's input stream can fail.
    fn select_move(&mut self, grid: &Grid) -> Result<usize, InputError>;

    /// Display name
    fn name(&self) -> &str;

    /// Symbol this player drops
    fn symbol(&self) -> Symbol;
}

/// Strength of a machine opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Any open column
    Random,
    /// Rule cascade over rows and columns
    Heuristic,
}

impl Difficulty {
    /// Parse the numeric level used at the setup prompt (0 or 1).
    pub fn from_level(level: &str) -> Option<Difficulty> {
        match level.trim() {
            "0" => Some(Difficulty::Random),
            "1" => Some(Difficulty::Heuristic),
            _ => None,
        }
    }
}
