//! # Grid
//!
//! Parsed raster: header metadata plus rows of optional cell values, in the
//! order the rows appear in the file.

use crate::header::GridHeader;

/// A present cell with its raster position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Row index, 0 at the top of the raster.
    pub row: usize,
    /// Column index, 0 at the left of the raster.
    pub col: usize,
    /// The cell value. May be NaN for a non-numeric token.
    pub value: f64,
}

/// Header plus a 2-D array of optional values.
///
/// `None` marks a cell whose value equalled the no-data sentinel.
///
/// # Example
///
/// ```rust
/// use ascii_grid::{Grid, GridHeader};
///
/// let grid = Grid::new(
///     GridHeader::default(),
///     vec![vec![Some(1.0), None], vec![None, Some(4.0)]],
/// );
/// assert_eq!(grid.valid_cell_count(), 2);
/// assert_eq!(grid.cell(1, 1), Some(4.0));
/// assert_eq!(grid.cell(0, 1), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    header: GridHeader,
    rows: Vec<Vec<Option<f64>>>,
}

impl Grid {
    /// Creates a grid from a header and rows in file order.
    pub fn new(header: GridHeader, rows: Vec<Vec<Option<f64>>>) -> Self {
        Self { header, rows }
    }

    /// Header metadata.
    #[inline]
    pub fn header(&self) -> &GridHeader {
        &self.header
    }

    /// All rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    /// Number of data rows actually parsed.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when no data row was parsed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at `(row, col)`, `None` if missing or out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Present cells of one row, left to right.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(move |values| {
                values
                    .iter()
                    .enumerate()
                    .filter_map(move |(col, value)| value.map(|value| Cell { row, col, value }))
            })
    }

    /// Present cells in canonical order: row ascending, then column ascending.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows.len()).flat_map(move |row| self.row_cells(row))
    }

    /// Number of present cells.
    pub fn valid_cell_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|v| v.is_some()).count())
            .sum()
    }

    /// Longitude of the lower-left corner in degrees.
    #[inline]
    pub fn xllcorner(&self) -> f64 {
        self.header.xllcorner()
    }

    /// Latitude of the lower-left corner in degrees.
    #[inline]
    pub fn yllcorner(&self) -> f64 {
        self.header.yllcorner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::new(
            GridHeader::default(),
            vec![
                vec![Some(1.0), None, Some(3.0)],
                vec![None, None, None],
                vec![Some(7.0), Some(8.0), None],
            ],
        )
    }

    #[test]
    fn test_cells_canonical_order() {
        let positions: Vec<(usize, usize)> = sample().cells().map(|c| (c.row, c.col)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_valid_cell_count_matches_iterator() {
        let grid = sample();
        assert_eq!(grid.valid_cell_count(), grid.cells().count());
    }

    #[test]
    fn test_row_cells_out_of_bounds_is_empty() {
        assert_eq!(sample().row_cells(10).count(), 0);
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let grid = sample();
        assert_eq!(grid.cell(5, 0), None);
        assert_eq!(grid.cell(0, 5), None);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.cells().count(), 0);
        assert!(grid.xllcorner().is_nan());
    }
}
