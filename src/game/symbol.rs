use serde::{Deserialize, Serialize};

use super::Cell;

/// Disc color owned by one side of a match. Red is conventionally the side
/// listed first by setup, but either color may move first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Red,
    Yellow,
}

impl Symbol {
    /// Get the opposing symbol
    pub fn other(self) -> Symbol {
        match self {
            Symbol::Red => Symbol::Yellow,
            Symbol::Yellow => Symbol::Red,
        }
    }

    /// Convert symbol to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::Red => Cell::Red,
            Symbol::Yellow => Cell::Yellow,
        }
    }

    /// Get symbol name for display
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Red => "Red",
            Symbol::Yellow => "Yellow",
        }
    }

    /// Color keyword used by the board snapshot file.
    pub fn color_name(self) -> &'static str {
        match self {
            Symbol::Red => "red",
            Symbol::Yellow => "yellow",
        }
    }
}
