use tracing::{debug, info};

use crate::error::MatchError;
use crate::player::Player;
use crate::render::Renderer;

use super::{Grid, Line, Symbol, WIN_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    /// `winner` indexes the match's player pair
    Won { winner: usize },
    Drawn,
}

impl MatchStatus {
    pub fn is_terminal(self) -> bool {
        self != MatchStatus::InProgress
    }
}

/// An accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: usize,
    pub symbol: Symbol,
    pub column: usize,
    pub row: usize,
}

/// Read-only snapshot handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct MatchView<'a> {
    pub grid: &'a Grid,
    pub status: MatchStatus,
    pub players: [(&'a str, Symbol); 2],
    pub current: usize,
    pub last_move: Option<Move>,
    pub winning_line: Option<Line>,
}

impl<'a> MatchView<'a> {
    pub fn winner_name(&self) -> Option<&'a str> {
        match self.status {
            MatchStatus::Won { winner } => Some(self.players[winner].0),
            _ => None,
        }
    }
}

/// One game between two borrowed players on an owned grid.
///
/// The grid is only ever mutated here; players see it through `&Grid`.
pub struct Match<'p> {
    grid: Grid,
    players: [&'p mut dyn Player; 2],
    current: usize,
    status: MatchStatus,
    moves: Vec<Move>,
}

impl<'p> Match<'p> {
    /// Start a match. `players[0]` moves first.
    ///
    /// A grid that already holds a line or is full yields a terminal match.
    pub fn new(grid: Grid, players: [&'p mut dyn Player; 2]) -> Result<Self, MatchError> {
        let first = players[0].symbol();
        if first == players[1].symbol() {
            return Err(MatchError::DuplicateSymbol(first));
        }

        let status = if let Some(line) = grid.find_line(WIN_LENGTH) {
            let winner = if line.symbol == first { 0 } else { 1 };
            MatchStatus::Won { winner }
        } else if grid.is_full() {
            MatchStatus::Drawn
        } else {
            MatchStatus::InProgress
        };

        info!(
            first = players[0].name(),
            second = players[1].name(),
            columns = grid.columns(),
            rows = grid.rows(),
            "match started"
        );

        Ok(Match {
            grid,
            players,
            current: 0,
            status,
            moves: Vec::new(),
        })
    }

    /// Get reference to grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Check if match is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winning player, if the match was won
    pub fn winner(&self) -> Option<&dyn Player> {
        match self.status {
            MatchStatus::Won { winner } => Some(&*self.players[winner]),
            _ => None,
        }
    }

    /// Player whose turn it is (the last mover once the match is over)
    pub fn current_player(&self) -> &dyn Player {
        &*self.players[self.current]
    }

    pub fn player(&self, index: usize) -> &dyn Player {
        &*self.players[index]
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Ask the current player for a column, apply it and advance the match.
    ///
    /// Panics if the player picks an illegal column.
    pub fn step(&mut self) -> Result<MatchStatus, MatchError> {
        if self.is_terminal() {
            return Err(MatchError::GameOver);
        }

        let player = &mut *self.players[self.current];
        let symbol = player.symbol();
        let column = player.select_move(&self.grid)?;
        let row = match self.grid.drop_piece(column, symbol) {
            Ok(row) => row,
            Err(err) => panic!(
                "{} selected illegal column {}: {} (legal: {:?})",
                player.name(),
                column,
                err,
                self.grid.legal_columns()
            ),
        };
        debug!(player = player.name(), column, row, "move accepted");

        self.moves.push(Move {
            player: self.current,
            symbol,
            column,
            row,
        });

        self.status = if self.grid.has_line(WIN_LENGTH) {
            MatchStatus::Won {
                winner: self.current,
            }
        } else if self.grid.is_full() {
            MatchStatus::Drawn
        } else {
            self.current = 1 - self.current;
            MatchStatus::InProgress
        };

        match self.status {
            MatchStatus::Won { .. } => {
                info!(winner = self.current_player().name(), moves = self.moves.len(), "match won")
            }
            MatchStatus::Drawn => info!(moves = self.moves.len(), "match drawn"),
            MatchStatus::InProgress => {}
        }

        Ok(self.status)
    }

    /// Snapshot for renderers
    pub fn view(&self) -> MatchView<'_> {
        MatchView {
            grid: &self.grid,
            status: self.status,
            players: [
                (self.players[0].name(), self.players[0].symbol()),
                (self.players[1].name(), self.players[1].symbol()),
            ],
            current: self.current,
            last_move: self.last_move(),
            winning_line: match self.status {
                MatchStatus::Won { .. } => self.grid.find_line(WIN_LENGTH),
                _ => None,
            },
        }
    }

    /// Play to the end, rendering the starting position and every move.
    pub fn play(&mut self, renderers: &mut [&mut dyn Renderer]) -> Result<MatchStatus, MatchError> {
        self.render(renderers)?;
        while !self.is_terminal() {
            self.step()?;
            self.render(renderers)?;
        }
        Ok(self.status)
    }

    fn render(&self, renderers: &mut [&mut dyn Renderer]) -> Result<(), MatchError> {
        let view = self.view();
        for renderer in renderers.iter_mut() {
            renderer.render(&view)?;
        }
        Ok(())
    }
}
