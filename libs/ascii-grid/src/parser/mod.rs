//! # Grid Parser
//!
//! Single-pass, line-oriented parser for ESRI ASCII grids.
//!
//! ## Line Classification
//!
//! Each line is trimmed and split on whitespace runs:
//!
//! | Tokens | Meaning |
//! |--------|---------|
//! | 0 or 1 | ignored |
//! | 2      | header pair `<key> <number>` |
//! | > 2    | data row |
//!
//! ## No-Data Ordering
//!
//! A data value is compared against the `NODATA_value` known at the time the
//! row is read. Input must therefore declare `NODATA_value` before the data
//! section. A late declaration is reported as
//! [`GridIssue::NoDataAfterData`] but earlier rows are left as parsed.
//!
//! ## Example
//!
//! ```rust
//! use ascii_grid::GridParser;
//!
//! let parsed = GridParser::new().parse("NODATA_value -1\n1 -1 3\n");
//! assert_eq!(parsed.grid.cell(0, 1), None);
//! assert_eq!(parsed.grid.cell(0, 2), Some(3.0));
//! ```

use log::{debug, warn};

use crate::grid::Grid;
use crate::header::{GridHeader, NODATA_VALUE};
use crate::issue::GridIssue;
use crate::range::{RangeAccumulator, ValueRange};

#[cfg(test)]
mod tests;

// =============================================================================
// PARSE RESULT
// =============================================================================

/// Output of a parse: the grid, its value range and collected diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGrid {
    /// Header and rows.
    pub grid: Grid,
    /// Range over valid, non-NaN cells; `None` if there were none.
    pub range: Option<ValueRange>,
    /// Non-fatal diagnostics in the order they were found.
    pub issues: Vec<GridIssue>,
}

impl ParsedGrid {
    /// Splits into the grid and its range.
    pub fn into_parts(self) -> (Grid, Option<ValueRange>) {
        (self.grid, self.range)
    }

    /// True when parsing produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Incremental ASCII grid parser.
///
/// Feed lines with [`GridParser::push_line`] and close with
/// [`GridParser::finish`], or hand the whole text to [`GridParser::parse`].
#[derive(Debug, Default)]
pub struct GridParser {
    header: GridHeader,
    rows: Vec<Vec<Option<f64>>>,
    /// 1-based source line of each data row.
    row_lines: Vec<usize>,
    range: RangeAccumulator,
    issues: Vec<GridIssue>,
    line: usize,
}

impl GridParser {
    /// Creates an empty parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses complete raster text.
    pub fn parse(mut self, text: &str) -> ParsedGrid {
        for line in text.split('\n') {
            self.push_line(line);
        }
        self.finish()
    }

    /// Consumes one line of input.
    pub fn push_line(&mut self, line: &str) {
        self.line += 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] | [_] => {}
            [key, value] => self.push_header(key, value),
            values => self.push_row(values),
        }
    }

    fn push_header(&mut self, key: &str, value: &str) {
        let parsed = parse_number(value);
        if parsed.is_nan() && !is_nan_literal(value) {
            self.issues.push(GridIssue::NonNumericHeader {
                line: self.line,
                key: key.to_string(),
            });
        }
        if key == NODATA_VALUE && !self.rows.is_empty() {
            self.issues.push(GridIssue::NoDataAfterData {
                line: self.line,
                rows_before: self.rows.len(),
            });
        }
        self.header.insert(key, parsed);
    }

    fn push_row(&mut self, tokens: &[&str]) {
        let nodata = self.header.nodata_value();
        let mut non_numeric = 0;

        let row: Vec<Option<f64>> = tokens
            .iter()
            .map(|token| {
                let value = parse_number(token);
                if value.is_nan() && !is_nan_literal(token) {
                    non_numeric += 1;
                }
                if nodata == Some(value) {
                    return None;
                }
                self.range.fold(value);
                Some(value)
            })
            .collect();

        if non_numeric > 0 {
            self.issues.push(GridIssue::NonNumericValues {
                line: self.line,
                count: non_numeric,
            });
        }
        self.rows.push(row);
        self.row_lines.push(self.line);
    }

    /// Runs the end-of-input checks and returns the result.
    pub fn finish(mut self) -> ParsedGrid {
        for key in self.header.missing_keys() {
            self.issues.push(GridIssue::MissingHeader { key });
        }

        if let Some(expected) = self.header.ncols() {
            for (row, &line) in self.rows.iter().zip(&self.row_lines) {
                if row.len() != expected {
                    self.issues.push(GridIssue::RaggedRow {
                        line,
                        expected,
                        found: row.len(),
                    });
                }
            }
        }

        if let Some(expected) = self.header.nrows() {
            if expected != self.rows.len() {
                self.issues.push(GridIssue::RowCountMismatch {
                    expected,
                    found: self.rows.len(),
                });
            }
        }

        let range = self.range.finish();
        if range.is_none() {
            self.issues.push(GridIssue::NoValidCells);
        }

        for issue in &self.issues {
            warn!("ascii grid: {issue}");
        }

        let grid = Grid::new(self.header, self.rows);
        debug!(
            "parsed ascii grid: {} rows, {} valid cells, range {:?}",
            grid.row_count(),
            grid.valid_cell_count(),
            range
        );

        ParsedGrid {
            grid,
            range,
            issues: self.issues,
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Parses a token as `f64`, yielding NaN on failure.
fn parse_number(token: &str) -> f64 {
    token.parse().unwrap_or(f64::NAN)
}

/// True for tokens that spell NaN on purpose.
fn is_nan_literal(token: &str) -> bool {
    token.eq_ignore_ascii_case("nan")
}
