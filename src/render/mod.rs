//! Board output: a colored terminal view and an optional snapshot file that
//! external viewers can poll.

mod snapshot;
mod terminal;

pub use snapshot::{SnapshotFormat, SnapshotWriter};
pub use terminal::TerminalRenderer;

use crate::error::RenderError;
use crate::game::MatchView;

/// Receives the match state after setup and after every move.
pub trait Renderer {
    fn render(&mut self, view: &MatchView<'_>) -> Result<(), RenderError>;
}
