//! Move selection: the [`Player`] trait and its human, random and rule-based
//! implementations.

mod agent;
pub mod heuristic;
mod human;
mod random;

pub use agent::{Difficulty, Player};
pub use heuristic::HeuristicPlayer;
pub use human::HumanPlayer;
pub use random::RandomPlayer;
