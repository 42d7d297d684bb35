use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::InputError;
use crate::game::{Grid, Symbol};

use super::agent::Player;

/// A player that selects uniformly at random from the open columns.
pub struct RandomPlayer {
    name: String,
    symbol: Symbol,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        RandomPlayer {
            name: name.into(),
            symbol,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games
    pub fn with_seed(name: impl Into<String>, symbol: Symbol, seed: u64) -> Self {
        RandomPlayer {
            name: name.into(),
            symbol,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Uniformly pick one of the grid's open columns.
pub(crate) fn random_column(rng: &mut impl Rng, grid: &Grid) -> usize {
    let columns = grid.legal_columns();
    assert!(!columns.is_empty(), "No legal columns available");
    columns[rng.random_range(0..columns.len())]
}

impl Player for RandomPlayer {
    fn select_move(&mut self, grid: &Grid) -> Result<usize, InputError> {
        Ok(random_column(&mut self.rng, grid))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }
}
