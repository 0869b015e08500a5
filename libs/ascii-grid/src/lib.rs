//! # ASCII Grid
//!
//! Permissive parser for ESRI ASCII grid rasters ("`.asc`" files).
//!
//! ## Architecture
//!
//! ```text
//! Raster Text → GridParser → Grid (header + rows) + ValueRange + GridIssues
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ascii_grid::parse;
//!
//! let text = "ncols 4\nnrows 1\nxllcorner -180\nyllcorner -90\n\
//!             cellsize 1\nNODATA_value -9999\n10 20 -9999 30\n";
//! let parsed = parse(text);
//! let range = parsed.range.expect("valid cells present");
//! assert_eq!((range.min, range.max), (10.0, 30.0));
//! assert_eq!(parsed.grid.valid_cell_count(), 3);
//! assert!(parsed.issues.is_empty());
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the globe pipeline:
//!
//! ```text
//! ascii-grid → globe-mesh → wasm
//! ```
//!
//! Parsing never fails. Malformed input degrades to NaN values or missing
//! header fields and is reported through [`GridIssue`] diagnostics.

pub mod grid;
pub mod header;
pub mod issue;
pub mod parser;
pub mod range;

pub use grid::{Cell, Grid};
pub use header::GridHeader;
pub use issue::GridIssue;
pub use parser::{GridParser, ParsedGrid};
pub use range::{RangeAccumulator, ValueRange};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parses raster text into a grid, its value range and any diagnostics.
///
/// This is the main entry point of the crate.
///
/// ## Example
///
/// ```rust
/// let parsed = ascii_grid::parse("ncols 3\nnrows 1\nNODATA_value -1\n1 2 3\n");
/// assert_eq!(parsed.grid.row_count(), 1);
/// ```
pub fn parse(text: &str) -> ParsedGrid {
    GridParser::new().parse(text)
}
