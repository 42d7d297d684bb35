//! Property tests for gravity, line detection and windowing over generated
//! grids and drop sequences.

use connect_four::game::{Grid, MoveError, Symbol, MAX_DIMENSION, WIN_LENGTH};
use proptest::prelude::*;

/// Play `drops` (taken modulo the width) alternating Red and Yellow, skipping
/// full columns.
fn build(columns: usize, rows: usize, drops: &[usize]) -> Grid {
    let mut grid = Grid::new(columns, rows).unwrap();
    let mut symbol = Symbol::Red;
    for &d in drops {
        if grid.drop_piece(d % columns, symbol).is_ok() {
            symbol = symbol.other();
        }
    }
    grid
}

fn supported(grid: &Grid) -> bool {
    (0..grid.rows()).all(|row| {
        (0..grid.columns()).all(|column| {
            grid.get(row, column).is_empty()
                || row + 1 == grid.rows()
                || !grid.get(row + 1, column).is_empty()
        })
    })
}

proptest! {
    #[test]
    fn drops_respect_gravity(
        columns in 1..=MAX_DIMENSION,
        rows in 1..=MAX_DIMENSION,
        drops in prop::collection::vec(0..MAX_DIMENSION, 0..120),
    ) {
        let mut grid = Grid::new(columns, rows).unwrap();
        let mut placed = 0;
        for &d in &drops {
            let column = d % columns;
            let before = grid.clone();
            let expected = grid.landing_row(column);
            match grid.drop_piece(column, Symbol::Yellow) {
                Ok(row) => {
                    prop_assert_eq!(Some(row), expected);
                    prop_assert_eq!(grid.get(row, column), Symbol::Yellow.to_cell());
                    placed += 1;
                }
                Err(err) => {
                    prop_assert_eq!(err, MoveError::ColumnFull(column));
                    prop_assert!(expected.is_none());
                    prop_assert_eq!(&grid, &before);
                }
            }
            prop_assert!(supported(&grid));
        }
        prop_assert_eq!(grid.piece_count(), placed);
        prop_assert_eq!(grid.is_full(), grid.legal_columns().is_empty());
    }

    #[test]
    fn out_of_range_drop_is_rejected(
        columns in 1..=MAX_DIMENSION,
        rows in 1..=MAX_DIMENSION,
        extra in 0..10usize,
    ) {
        let mut grid = Grid::new(columns, rows).unwrap();
        prop_assert_eq!(
            grid.drop_piece(columns + extra, Symbol::Red),
            Err(MoveError::InvalidColumn { column: columns + extra, columns })
        );
        prop_assert_eq!(grid.piece_count(), 0);
    }

    #[test]
    fn line_detection_ignores_orientation(
        columns in 1..=10usize,
        rows in 1..=10usize,
        drops in prop::collection::vec(0..10usize, 0..100),
        length in 1..=5usize,
    ) {
        let grid = build(columns, rows, &drops);
        let cells = grid.cells();
        let found = grid.has_line(length);
        prop_assert_eq!(cells.transposed().has_line(length), found);
        prop_assert_eq!(cells.mirrored().has_line(length), found);
        prop_assert_eq!(cells.transposed().mirrored().has_line(length), found);
    }

    #[test]
    fn found_line_is_genuine(
        columns in 1..=10usize,
        rows in 1..=10usize,
        drops in prop::collection::vec(0..10usize, 0..100),
    ) {
        let grid = build(columns, rows, &drops);
        if let Some(line) = grid.find_line(WIN_LENGTH) {
            let cells: Vec<_> = line.cells().collect();
            prop_assert_eq!(cells.len(), WIN_LENGTH);
            for (row, column) in cells {
                prop_assert_eq!(grid.get(row, column), line.symbol.to_cell());
            }
        }
    }

    #[test]
    fn windows_tile_the_grid(
        columns in 1..=MAX_DIMENSION,
        rows in 1..=MAX_DIMENSION,
        drops in prop::collection::vec(0..MAX_DIMENSION, 0..60),
        size in 1..=6usize,
    ) {
        let grid = build(columns, rows, &drops);
        let windows = grid.windows(size);
        let expected = if size <= columns && size <= rows {
            (columns - size + 1) * (rows - size + 1)
        } else {
            0
        };
        prop_assert_eq!(windows.len(), expected);

        let mut previous = None;
        for window in windows {
            let anchor = (window.top(), window.left());
            prop_assert!(previous.map_or(true, |p| p < anchor));
            previous = Some(anchor);
            for row in 0..size {
                for column in 0..size {
                    prop_assert_eq!(
                        window.get(row, column),
                        grid.get(window.top() + row, window.left() + column)
                    );
                }
            }
        }
    }

    #[test]
    fn queries_do_not_change_the_grid(
        columns in 1..=MAX_DIMENSION,
        rows in 1..=MAX_DIMENSION,
        drops in prop::collection::vec(0..MAX_DIMENSION, 0..80),
    ) {
        let grid = build(columns, rows, &drops);
        let before = grid.clone();
        let first = (grid.has_line(WIN_LENGTH), grid.is_full(), grid.legal_columns());
        let second = (grid.has_line(WIN_LENGTH), grid.is_full(), grid.legal_columns());
        prop_assert_eq!(first, second);
        prop_assert_eq!(grid.windows(3).count(), grid.windows(3).count());
        prop_assert_eq!(&grid, &before);
    }
}
