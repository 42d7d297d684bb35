use std::io::{self, Stdout, Write};

use crossterm::style::{style, Attribute, Color, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;

use crate::error::RenderError;
use crate::game::{Cell, MatchStatus, MatchView};

use super::Renderer;

const DRAW_MESSAGE: &str = "Nobody wins! How exciting... you must both be evenly matched.";

/// Prints the board after every move, with 1-based column numbers on top.
///
/// Discs are drawn on a blue board when color is on. Without color, cells
/// print as `.`, `R` and `Y`, and the winning line is bracketed.
pub struct TerminalRenderer<W = Stdout> {
    out: W,
    color: bool,
}

impl TerminalRenderer {
    pub fn stdout(color: bool) -> Self {
        TerminalRenderer::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        TerminalRenderer { out, color }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn draw_cell(&mut self, cell: Cell, winning: bool) -> io::Result<()> {
        if !self.color {
            let ch = match cell {
                Cell::Empty => '.',
                Cell::Red => 'R',
                Cell::Yellow => 'Y',
            };
            if winning {
                write!(self.out, "[{ch}]")
            } else {
                write!(self.out, " {ch} ")
            }
        } else {
            let fg = match cell {
                Cell::Empty => Color::DarkBlue,
                Cell::Red => Color::Red,
                Cell::Yellow => Color::Yellow,
            };
            let bg = if winning { Color::White } else { Color::DarkBlue };
            self.out.queue(PrintStyledContent(
                style(" O ").with(fg).on(bg).attribute(Attribute::Bold),
            ))?;
            Ok(())
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, view: &MatchView<'_>) -> Result<(), RenderError> {
        let grid = view.grid;

        writeln!(self.out)?;
        if let Some(last) = view.last_move {
            let (name, _) = view.players[last.player];
            writeln!(self.out, "{} played column {}", name, last.column + 1)?;
        }

        let header: String = (1..=grid.columns()).map(|c| format!("{c:^3}")).collect();
        writeln!(self.out, "{header}")?;
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let winning = view
                    .winning_line
                    .is_some_and(|line| line.contains(row, column));
                self.draw_cell(grid.get(row, column), winning)?;
            }
            writeln!(self.out)?;
        }

        match view.status {
            MatchStatus::Won { .. } => {
                writeln!(self.out, "{}", "=".repeat(29))?;
                if let Some(name) = view.winner_name() {
                    writeln!(self.out, "{name} wins! Good job buddy!")?;
                }
            }
            MatchStatus::Drawn => {
                writeln!(self.out, "{}", "=".repeat(29))?;
                writeln!(self.out, "{DRAW_MESSAGE}")?;
            }
            MatchStatus::InProgress => {}
        }
        self.out.flush()?;
        Ok(())
    }
}
