//! # Connect Four
//!
//! Two-player Connect Four on boards from 1x1 up to 15x15, played in the
//! terminal between people or against a random or rule-based opponent.
//!
//! ## Modules
//!
//! - [`game`]: grid with gravity, line detection, windowing, match controller
//! - [`player`]: player trait plus human, random and heuristic players
//! - [`render`]: terminal board and snapshot files
//! - [`prompt`]: question/answer loops over stdin
//! - [`setup`]: interactive match setup
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod prompt;
pub mod render;
pub mod setup;
