use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::game::{Cell, Grid, MatchStatus, MatchView};

use super::Renderer;

/// On-disk layout of the board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    /// One `column,row,color` line per cell, 1-based, row 1 at the bottom,
    /// colors `red`, `yellow` and `w` for empty.
    #[default]
    Legacy,
    /// A single JSON document with the cell matrix and match status.
    Json,
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotFormat::Legacy => write!(f, "legacy"),
            SnapshotFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for SnapshotFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(SnapshotFormat::Legacy),
            "json" => Ok(SnapshotFormat::Json),
            other => Err(format!("unknown snapshot format '{other}' (expected 'legacy' or 'json')")),
        }
    }
}

#[derive(Serialize)]
struct JsonSnapshot<'a> {
    columns: usize,
    rows: usize,
    cells: Vec<&'a [Cell]>,
    status: &'static str,
    winner: Option<&'a str>,
    last_column: Option<usize>,
}

/// Rewrites a file with the current board after every move.
pub struct SnapshotWriter {
    path: PathBuf,
    format: SnapshotFormat,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>, format: SnapshotFormat) -> Self {
        SnapshotWriter {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Legacy line format, bottom row first.
pub fn legacy_lines(grid: &Grid) -> String {
    let mut out = String::new();
    for height in 0..grid.rows() {
        let row = grid.rows() - 1 - height;
        for column in 0..grid.columns() {
            let color = grid
                .get(row, column)
                .symbol()
                .map_or("w", |s| s.color_name());
            out.push_str(&format!("{},{},{}\n", column + 1, height + 1, color));
        }
    }
    out
}

fn json_document(view: &MatchView<'_>) -> Result<String, serde_json::Error> {
    let status = match view.status {
        MatchStatus::InProgress => "in_progress",
        MatchStatus::Won { .. } => "won",
        MatchStatus::Drawn => "drawn",
    };
    let snapshot = JsonSnapshot {
        columns: view.grid.columns(),
        rows: view.grid.rows(),
        cells: view.grid.cells().iter_rows().collect(),
        status,
        winner: view.winner_name(),
        last_column: view.last_move.map(|m| m.column),
    };
    serde_json::to_string_pretty(&snapshot)
}

impl Renderer for SnapshotWriter {
    fn render(&mut self, view: &MatchView<'_>) -> Result<(), RenderError> {
        let contents = match self.format {
            SnapshotFormat::Legacy => legacy_lines(view.grid),
            SnapshotFormat::Json => json_document(view)?,
        };
        std::fs::write(&self.path, contents)?;
        tracing::trace!(path = %self.path.display(), "snapshot written");
        Ok(())
    }
}
