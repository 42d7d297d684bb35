use std::fmt;

use super::matrix::{Line, Matrix, Windows};
use super::{Cell, Symbol};

/// Largest supported number of rows or columns
pub const MAX_DIMENSION: usize = 15;

/// Run length that wins a match
pub const WIN_LENGTH: usize = 4;

pub const STANDARD_COLUMNS: usize = 7;
pub const STANDARD_ROWS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{columns})")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("board must be 1..={max} columns by 1..={max} rows, got {columns}x{rows}", max = MAX_DIMENSION)]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell '{ch}' at row {row}, column {column}")]
    UnknownCell { ch: char, row: usize, column: usize },

    #[error("piece at row {row}, column {column} has an empty cell below it")]
    FloatingPiece { row: usize, column: usize },
}

/// Playing grid: a [`Matrix`] whose columns fill from the bottom.
///
/// Row 0 is the top. Every occupied cell is either on the bottom row or sits
/// on another occupied cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Matrix,
}

impl Grid {
    /// Create an empty grid
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        check_dimensions(columns, rows)?;
        Ok(Grid {
            cells: Matrix::new(columns, rows),
        })
    }

    /// The classic 7 columns by 6 rows board
    pub fn standard() -> Self {
        Grid {
            cells: Matrix::new(STANDARD_COLUMNS, STANDARD_ROWS),
        }
    }

    /// Build a position from text rows, top row first.
    ///
    /// `.` is empty, `R`/`X` is red and `Y`/`O` is yellow.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        check_dimensions(width, height)?;

        let mut cells = Matrix::new(width, height);
        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, ch) in text.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'R' | 'X' => Cell::Red,
                    'Y' | 'O' => Cell::Yellow,
                    _ => return Err(GridError::UnknownCell { ch, row, column }),
                };
                cells.set(row, column, cell);
            }
        }

        for column in 0..width {
            for row in 0..height - 1 {
                if !cells.get(row, column).is_empty() && cells.get(row + 1, column).is_empty() {
                    return Err(GridError::FloatingPiece { row, column });
                }
            }
        }

        Ok(Grid { cells })
    }

    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells.get(row, column)
    }

    /// Read-only view of the cell contents
    pub fn cells(&self) -> &Matrix {
        &self.cells
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.columns() {
            return true;
        }
        !self.get(0, column).is_empty()
    }

    /// Row a piece dropped into `column` would land on
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if self.is_column_full(column) {
            return None;
        }
        (0..self.rows())
            .rev()
            .find(|&row| self.get(row, column).is_empty())
    }

    /// Whether a drop into `column` lands exactly on (`row`, `column`)
    pub fn is_playable_at(&self, row: usize, column: usize) -> bool {
        self.landing_row(column) == Some(row)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, symbol: Symbol) -> Result<usize, MoveError> {
        if column >= self.columns() {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns(),
            });
        }

        let row = self
            .landing_row(column)
            .ok_or(MoveError::ColumnFull(column))?;
        self.cells.set(row, column, symbol.to_cell());
        Ok(row)
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns()).all(|column| self.is_column_full(column))
    }

    /// Columns that can still take a piece, ascending
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns())
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Number of pieces on the grid
    pub fn piece_count(&self) -> usize {
        self.cells.iter_rows().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Whether a run of `length` same-symbol cells exists in any direction
    pub fn has_line(&self, length: usize) -> bool {
        self.cells.has_line(length)
    }

    pub fn find_line(&self, length: usize) -> Option<Line> {
        self.cells.find_line(length)
    }

    /// All `size`x`size` windows of the grid, row-major
    pub fn windows(&self, size: usize) -> Windows<'_> {
        self.cells.windows(size)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter_rows() {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_dimensions(columns: usize, rows: usize) -> Result<(), GridError> {
    let range = 1..=MAX_DIMENSION;
    if range.contains(&columns) && range.contains(&rows) {
        Ok(())
    } else {
        Err(GridError::InvalidDimensions { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::standard();
        for row in 0..STANDARD_ROWS {
            for column in 0..STANDARD_COLUMNS {
                assert_eq!(grid.get(row, column), Cell::Empty);
            }
        }
        assert_eq!(grid.piece_count(), 0);
    }

    #[test]
    fn test_dimension_limits() {
        assert!(Grid::new(1, 1).is_ok());
        assert!(Grid::new(15, 15).is_ok());
        assert_eq!(
            Grid::new(0, 6),
            Err(GridError::InvalidDimensions { columns: 0, rows: 6 })
        );
        assert!(Grid::new(7, 16).is_err());
    }

    #[test]
    fn test_drop_piece() {
        let mut grid = Grid::standard();

        let row = grid.drop_piece(3, Symbol::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(grid.get(5, 3), Cell::Red);

        let row = grid.drop_piece(3, Symbol::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(grid.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_column_full() {
        let mut grid = Grid::standard();
        for _ in 0..STANDARD_ROWS {
            grid.drop_piece(0, Symbol::Red).unwrap();
        }

        assert!(grid.is_column_full(0));
        let before = grid.clone();
        assert_eq!(
            grid.drop_piece(0, Symbol::Yellow),
            Err(MoveError::ColumnFull(0))
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut grid = Grid::standard();
        assert_eq!(
            grid.drop_piece(7, Symbol::Red),
            Err(MoveError::InvalidColumn { column: 7, columns: 7 })
        );
        assert!(grid.is_column_full(7));
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::new(2, 3).unwrap();
        for column in 0..2 {
            for _ in 0..3 {
                assert!(!grid.is_full());
                grid.drop_piece(column, Symbol::Red).unwrap();
            }
        }
        assert!(grid.is_full());
        assert!(grid.legal_columns().is_empty());
    }

    #[test]
    fn test_landing_row_and_playable() {
        let grid = Grid::from_rows(&[
            "...",
            "R..",
            "RY.",
        ])
        .unwrap();
        assert_eq!(grid.landing_row(0), Some(0));
        assert_eq!(grid.landing_row(1), Some(1));
        assert_eq!(grid.landing_row(2), Some(2));
        assert!(grid.is_playable_at(1, 1));
        assert!(!grid.is_playable_at(0, 1));
        assert!(!grid.is_playable_at(2, 1));
    }

    #[test]
    fn test_from_rows_rejects_floating_piece() {
        assert_eq!(
            Grid::from_rows(&["R..", "..."]),
            Err(GridError::FloatingPiece { row: 0, column: 0 })
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(matches!(
            Grid::from_rows(&["...", ".."]),
            Err(GridError::RaggedRows { row: 1, .. })
        ));
        assert!(matches!(
            Grid::from_rows(&["..Z"]),
            Err(GridError::UnknownCell { ch: 'Z', .. })
        ));
        assert!(matches!(
            Grid::from_rows(&[]),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_display_matches_from_rows() {
        let rows = ["....", ".Y..", "RRY."];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.to_string(), "....\n.Y..\nRRY.\n");
    }

    #[test]
    fn test_horizontal_line() {
        let mut grid = Grid::standard();
        for column in 0..4 {
            grid.drop_piece(column, Symbol::Red).unwrap();
        }
        assert!(grid.has_line(WIN_LENGTH));
    }

    #[test]
    fn test_vertical_line() {
        let mut grid = Grid::standard();
        for _ in 0..4 {
            grid.drop_piece(3, Symbol::Yellow).unwrap();
        }
        assert!(grid.has_line(WIN_LENGTH));
    }

    #[test]
    fn test_diagonal_lines() {
        let up = Grid::from_rows(&[
            ".......",
            ".......",
            "...R...",
            "..RY...",
            ".RYY...",
            "RYYY...",
        ])
        .unwrap();
        assert!(up.has_line(WIN_LENGTH));

        let down = Grid::from_rows(&[
            ".......",
            ".......",
            "...R...",
            "...YR..",
            "...YYR.",
            "...YYYR",
        ])
        .unwrap();
        assert!(down.has_line(WIN_LENGTH));
    }

    #[test]
    fn test_no_line_with_three() {
        let mut grid = Grid::standard();
        for column in 0..3 {
            grid.drop_piece(column, Symbol::Red).unwrap();
        }
        assert!(!grid.has_line(WIN_LENGTH));
        assert!(grid.has_line(3));
    }

    #[test]
    fn test_mixed_run_is_not_a_line() {
        let grid = Grid::from_rows(&["RRYR"]).unwrap();
        assert!(!grid.has_line(4));
        assert!(grid.has_line(2));
    }

    #[test]
    fn test_small_grid_never_has_long_line() {
        let grid = Grid::from_rows(&["RRR", "RRR", "RRR"]).unwrap();
        assert!(!grid.has_line(4));
        assert!(grid.has_line(3));
    }
}
