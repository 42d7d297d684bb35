//! Core Connect Four model: the gravity grid with its line search, disc
//! symbols, and the match controller that runs turns between two players.

mod grid;
mod matrix;
mod state;
mod symbol;

pub use grid::{
    Grid, GridError, MoveError, MAX_DIMENSION, STANDARD_COLUMNS, STANDARD_ROWS, WIN_LENGTH,
};
pub use matrix::{Cell, Direction, Line, Matrix, Window, Windows};
pub use state::{Match, MatchStatus, MatchView, Move};
pub use symbol::Symbol;
