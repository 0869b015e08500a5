//! # Grid Issues
//!
//! Non-fatal diagnostics collected while parsing. The parser never aborts;
//! these describe where the input departs from a well-formed ESRI grid.
//!
//! ## Example
//!
//! ```rust
//! use ascii_grid::GridIssue;
//!
//! let issue = GridIssue::MissingHeader { key: "cellsize" };
//! assert_eq!(issue.to_string(), "missing header key 'cellsize'");
//! ```

use thiserror::Error;

/// A non-fatal observation about raster input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridIssue {
    /// A required header key never appeared.
    #[error("missing header key '{key}'")]
    MissingHeader {
        /// The absent key.
        key: &'static str,
    },

    /// A header value did not parse as a number and was stored as NaN.
    #[error("line {line}: header '{key}' is not numeric")]
    NonNumericHeader {
        /// 1-based line number.
        line: usize,
        /// The header key.
        key: String,
    },

    /// `NODATA_value` was declared after data rows; earlier rows could not
    /// mark missing cells.
    #[error("line {line}: NODATA_value declared after {rows_before} data row(s)")]
    NoDataAfterData {
        /// 1-based line number of the declaration.
        line: usize,
        /// Data rows already parsed at that point.
        rows_before: usize,
    },

    /// Tokens of a data row that did not parse as numbers.
    #[error("line {line}: {count} non-numeric value(s) kept as NaN")]
    NonNumericValues {
        /// 1-based line number.
        line: usize,
        /// Number of offending tokens.
        count: usize,
    },

    /// A data row whose width differs from `ncols`.
    #[error("line {line}: expected {expected} values, found {found}")]
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Declared `ncols`.
        expected: usize,
        /// Tokens on the line.
        found: usize,
    },

    /// The number of data rows differs from `nrows`.
    #[error("expected {expected} data rows, found {found}")]
    RowCountMismatch {
        /// Declared `nrows`.
        expected: usize,
        /// Data rows parsed.
        found: usize,
    },

    /// No cell held a usable value.
    #[error("grid has no valid cells")]
    NoValidCells,
}

impl GridIssue {
    /// The 1-based source line this issue points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::NonNumericHeader { line, .. }
            | Self::NoDataAfterData { line, .. }
            | Self::NonNumericValues { line, .. }
            | Self::RaggedRow { line, .. } => Some(*line),
            Self::MissingHeader { .. } | Self::RowCountMismatch { .. } | Self::NoValidCells => None,
        }
    }
}
