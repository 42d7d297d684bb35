//! Raw cell storage shared by the playing grid and its analysis views.
//!
//! A [`Matrix`] carries no gravity rule, so transposed or mirrored copies are
//! ordinary values. Pattern probes work on fixed-size square [`Window`]s cut
//! from a matrix in row-major order.

use serde::Serialize;

use super::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Symbol occupying this cell, if any
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Symbol::Red),
            Cell::Yellow => Some(Symbol::Yellow),
        }
    }
}

/// Direction of a line, as a (row, column) step. Rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (`\`)
    Diagonal,
    /// Top-right to bottom-left (`/`)
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A run of same-symbol cells starting at (`row`, `column`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub row: usize,
    pub column: usize,
    pub direction: Direction,
    pub length: usize,
    pub symbol: Symbol,
}

impl Line {
    /// Absolute (row, column) coordinates covered by the line, start first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.direction.step();
        (0..self.length as isize).map(move |i| {
            (
                (self.row as isize + dr * i) as usize,
                (self.column as isize + dc * i) as usize,
            )
        })
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells().any(|cell| cell == (row, column))
    }
}

/// Rectangular cell container, rows top-to-bottom, columns left-to-right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Create an empty matrix
    pub fn new(columns: usize, rows: usize) -> Self {
        Matrix {
            columns,
            rows,
            cells: vec![Cell::Empty; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the cell at a specific position. Panics when out of range.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) outside {}x{} matrix",
            self.columns,
            self.rows
        );
        self.cells[row * self.columns + column]
    }

    /// Get the cell at a signed position, `None` when off the matrix.
    pub fn try_get(&self, row: isize, column: isize) -> Option<Cell> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.cells[row * self.columns + column])
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row * self.columns + column] = cell;
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    /// Iterate over rows, top row first
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.columns.max(1))
    }

    /// Swap rows and columns
    pub fn transposed(&self) -> Matrix {
        let mut out = Matrix::new(self.rows, self.columns);
        for row in 0..self.rows {
            for column in 0..self.columns {
                out.set(column, row, self.get(row, column));
            }
        }
        out
    }

    /// Flip left-to-right
    pub fn mirrored(&self) -> Matrix {
        let mut out = Matrix::new(self.columns, self.rows);
        for row in 0..self.rows {
            for column in 0..self.columns {
                out.set(row, self.columns - 1 - column, self.get(row, column));
            }
        }
        out
    }

    /// All `size`x`size` windows, row-major, stride 1.
    pub fn windows(&self, size: usize) -> Windows<'_> {
        let fits = size > 0 && size <= self.rows && size <= self.columns;
        let (across, down) = if fits {
            (self.columns - size + 1, self.rows - size + 1)
        } else {
            (0, 0)
        };
        Windows {
            matrix: self,
            size,
            across,
            total: across * down,
            next: 0,
        }
    }

    /// First run of `length` same-symbol cells, scanning start cells
    /// row-major and directions in [`Direction::ALL`] order.
    pub fn find_line(&self, length: usize) -> Option<Line> {
        if length == 0 {
            return None;
        }
        for row in 0..self.rows {
            for column in 0..self.columns {
                let Some(symbol) = self.get(row, column).symbol() else {
                    continue;
                };
                for direction in Direction::ALL {
                    if self.run_fits(row, column, direction, length, symbol) {
                        return Some(Line {
                            row,
                            column,
                            direction,
                            length,
                            symbol,
                        });
                    }
                }
            }
        }
        None
    }

    /// Whether any run of `length` same-symbol cells exists
    pub fn has_line(&self, length: usize) -> bool {
        self.find_line(length).is_some()
    }

    fn run_fits(
        &self,
        row: usize,
        column: usize,
        direction: Direction,
        length: usize,
        symbol: Symbol,
    ) -> bool {
        let (dr, dc) = direction.step();
        let target = symbol.to_cell();
        (1..length as isize).all(|i| {
            self.try_get(row as isize + dr * i, column as isize + dc * i) == Some(target)
        })
    }
}

/// Iterator over the square windows of a [`Matrix`].
pub struct Windows<'a> {
    matrix: &'a Matrix,
    size: usize,
    across: usize,
    total: usize,
    next: usize,
}

impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Window {
            matrix: self.matrix,
            top: index / self.across,
            left: index % self.across,
            size: self.size,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

/// A `size`x`size` view into a matrix, anchored at (`top`, `left`).
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    matrix: &'a Matrix,
    top: usize,
    left: usize,
    size: usize,
}

impl Window<'_> {
    pub fn top(&self) -> usize {
        self.top
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at window-local coordinates
    pub fn get(&self, row: usize, column: usize) -> Cell {
        debug_assert!(row < self.size && column < self.size);
        self.matrix.get(self.top + row, self.left + column)
    }

    /// Owner of local row `row` when every cell in it holds the same symbol.
    pub fn uniform_row(&self, row: usize) -> Option<Symbol> {
        uniform((0..self.size).map(|column| self.get(row, column)))
    }
}

fn uniform(mut cells: impl Iterator<Item = Cell>) -> Option<Symbol> {
    let symbol = cells.next()?.symbol()?;
    cells
        .all(|cell| cell == symbol.to_cell())
        .then_some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        // R . Y
        // R Y .
        let mut m = Matrix::new(3, 2);
        m.set(0, 0, Cell::Red);
        m.set(0, 2, Cell::Yellow);
        m.set(1, 0, Cell::Red);
        m.set(1, 1, Cell::Yellow);
        m
    }

    #[test]
    fn test_new_matrix_is_empty() {
        let m = Matrix::new(4, 3);
        assert_eq!(m.columns(), 4);
        assert_eq!(m.rows(), 3);
        assert!(m.iter_rows().flatten().all(|c| c.is_empty()));
        assert_eq!(m.iter_rows().count(), 3);
    }

    #[test]
    fn test_try_get_bounds() {
        let m = sample();
        assert_eq!(m.try_get(0, 0), Some(Cell::Red));
        assert_eq!(m.try_get(-1, 0), None);
        assert_eq!(m.try_get(0, 3), None);
        assert_eq!(m.try_get(2, 0), None);
    }

    #[test]
    fn test_transpose_and_mirror() {
        let m = sample();
        let t = m.transposed();
        assert_eq!((t.columns(), t.rows()), (2, 3));
        assert_eq!(t.get(2, 0), Cell::Yellow);
        assert_eq!(t.get(1, 1), Cell::Yellow);
        assert_eq!(t.transposed(), m);

        let f = m.mirrored();
        assert_eq!(f.row(0), &[Cell::Yellow, Cell::Empty, Cell::Red]);
        assert_eq!(f.mirrored(), m);
    }

    #[test]
    fn test_window_count_and_order() {
        let m = Matrix::new(7, 6);
        let windows: Vec<_> = m.windows(4).map(|w| (w.top(), w.left())).collect();
        assert_eq!(windows.len(), 4 * 3);
        assert_eq!(windows[0], (0, 0));
        assert_eq!(windows[1], (0, 1));
        assert_eq!(windows[4], (1, 0));
        assert_eq!(*windows.last().unwrap(), (2, 3));
    }

    #[test]
    fn test_windows_degenerate_sizes() {
        let m = Matrix::new(3, 5);
        assert_eq!(m.windows(4).len(), 0);
        assert_eq!(m.windows(0).len(), 0);
        assert_eq!(m.windows(3).len(), 3);
        assert_eq!(Matrix::new(1, 1).windows(1).len(), 1);
    }

    #[test]
    fn test_window_uniform_rows() {
        let mut m = sample();
        m.set(1, 2, Cell::Yellow);
        let windows: Vec<_> = m.windows(2).collect();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].uniform_row(0), None);
        assert_eq!(windows[0].uniform_row(1), None);
        assert_eq!(windows[1].uniform_row(1), Some(Symbol::Yellow));
    }

    #[test]
    fn test_window_local_coordinates() {
        let m = sample();
        let w = m.windows(2).nth(1).unwrap();
        assert_eq!((w.top(), w.left(), w.size()), (0, 1, 2));
        assert_eq!(w.get(0, 0), Cell::Empty);
        assert_eq!(w.get(0, 1), Cell::Yellow);
        assert_eq!(w.get(1, 0), Cell::Yellow);
        assert_eq!(w.get(1, 1), Cell::Empty);
    }

    #[test]
    fn test_find_line_reports_start_and_direction() {
        let mut m = Matrix::new(5, 5);
        for i in 0..4 {
            m.set(4 - i, i + 1, Cell::Yellow);
        }
        let line = m.find_line(4).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        assert_eq!((line.row, line.column), (1, 4));
        assert_eq!(line.symbol, Symbol::Yellow);
        assert!(line.contains(4, 1));
        assert!(!line.contains(0, 0));
        assert!(!m.has_line(5));
    }

    #[test]
    fn test_has_line_zero_length_is_false() {
        assert!(!sample().has_line(0));
    }

    #[test]
    fn test_has_line_on_narrow_matrix() {
        let mut m = Matrix::new(7, 1);
        for column in 2..6 {
            m.set(0, column, Cell::Red);
        }
        assert!(m.has_line(4));
        assert!(!m.has_line(5));
        assert!(m.transposed().has_line(4));
    }
}
