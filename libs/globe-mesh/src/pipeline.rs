//! # Globe Pipeline
//!
//! End-to-end entry points: raster text in, merged buffer (or flat image)
//! plus pass-through metadata out.
//!
//! ```text
//! text → parse → (Grid, ValueRange) → per row: transform + instantiate → merge
//! ```
//!
//! Parsing finishes before any cell is transformed, so every cell sees the
//! final value range. The per-cell phase runs one rayon task per row when
//! [`GlobeConfig::parallel`] is set; rows are collected in order, so the
//! output is identical to the sequential path.

use ascii_grid::{Grid, GridIssue, ParsedGrid, ValueRange};
use config::constants::{GlobeConfig, BOX_VERTEX_COUNT, MAX_VERTICES};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::flat::{render_flat, FlatImage};
use crate::instance::instantiate;
use crate::merge::MergedBuffer;
use crate::template::UnitBox;
use crate::transform::CellTransformer;

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Grid metadata the renderer receives next to the buffers.
///
/// Header fields that were absent read as NaN (`ncols`/`nrows` as `None`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    /// Smallest valid value, `None` when there were no valid cells.
    pub min: Option<f64>,
    /// Largest valid value, `None` when there were no valid cells.
    pub max: Option<f64>,
    /// Declared column count.
    pub ncols: Option<usize>,
    /// Declared row count.
    pub nrows: Option<usize>,
    /// Longitude of the lower-left corner.
    pub xllcorner: f64,
    /// Latitude of the lower-left corner.
    pub yllcorner: f64,
    /// Cell size in degrees.
    pub cellsize: f64,
    /// Number of present cells (NaN-valued cells included).
    pub valid_cells: usize,
}

impl GridSummary {
    /// Collects the summary of a parsed grid.
    pub fn new(grid: &Grid, range: Option<&ValueRange>) -> Self {
        let header = grid.header();
        Self {
            min: range.map(|r| r.min),
            max: range.map(|r| r.max),
            ncols: header.ncols(),
            nrows: header.nrows(),
            xllcorner: header.xllcorner(),
            yllcorner: header.yllcorner(),
            cellsize: header.cellsize(),
            valid_cells: grid.valid_cell_count(),
        }
    }
}

/// Output of [`build_globe`].
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeMesh {
    /// Merged positions and colors.
    pub buffer: MergedBuffer,
    /// Pass-through metadata.
    pub summary: GridSummary,
    /// Parse diagnostics, in file order.
    pub issues: Vec<GridIssue>,
}

/// Output of [`build_flat`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRaster {
    /// The rendered pixels.
    pub image: FlatImage,
    /// Pass-through metadata.
    pub summary: GridSummary,
    /// Parse diagnostics, in file order.
    pub issues: Vec<GridIssue>,
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Parses raster text and builds the merged globe buffer.
///
/// # Errors
///
/// Returns [`MeshError::Config`] when `config` fails validation and
/// [`MeshError::TooManyVertices`] when the grid has too many valid cells.
/// Malformed raster text is not an error.
///
/// # Example
///
/// ```rust
/// use config::constants::GlobeConfig;
/// use globe_mesh::build_globe;
///
/// let text = "ncols 4\nnrows 1\nxllcorner -180\nyllcorner -90\n\
///             cellsize 1\nNODATA_value -9999\n10 20 -9999 30\n";
/// let mesh = build_globe(text, &GlobeConfig::default())?;
/// assert_eq!(mesh.buffer.vertex_count(), 3 * 36);
/// assert_eq!(mesh.summary.min, Some(10.0));
/// assert_eq!(mesh.summary.max, Some(30.0));
/// # Ok::<(), globe_mesh::MeshError>(())
/// ```
pub fn build_globe(text: &str, config: &GlobeConfig) -> Result<GlobeMesh, MeshError> {
    build_globe_from(ascii_grid::parse(text), config)
}

/// Builds the merged globe buffer from an already parsed grid.
pub fn build_globe_from(parsed: ParsedGrid, config: &GlobeConfig) -> Result<GlobeMesh, MeshError> {
    config.validate()?;

    let ParsedGrid {
        grid,
        range,
        issues,
    } = parsed;
    let summary = GridSummary::new(&grid, range.as_ref());

    let vertices = summary.valid_cells.saturating_mul(BOX_VERTEX_COUNT);
    if vertices > MAX_VERTICES {
        return Err(MeshError::too_many_vertices(vertices, MAX_VERTICES));
    }

    let buffer = match range {
        Some(range) => merge_grid(&grid, &range, config),
        None => {
            log::debug!("no valid cells, emitting empty buffer");
            MergedBuffer::default()
        }
    };

    log::debug!(
        "globe buffer: {} cells, {} vertices, {} issues",
        summary.valid_cells,
        buffer.vertex_count(),
        issues.len()
    );

    Ok(GlobeMesh {
        buffer,
        summary,
        issues,
    })
}

/// Parses raster text and renders the flat 2-D image.
///
/// # Errors
///
/// Returns [`MeshError::Config`] when `config` fails validation and
/// [`MeshError::ImageTooLarge`] when the declared canvas is too large.
/// Malformed raster text is not an error.
///
/// # Example
///
/// ```rust
/// use config::constants::GlobeConfig;
/// use globe_mesh::build_flat;
///
/// let raster = build_flat("ncols 3\nnrows 1\nNODATA_value -1\n1 2 3\n", &GlobeConfig::default())?;
/// assert_eq!((raster.image.width(), raster.image.height()), (3, 1));
/// # Ok::<(), globe_mesh::MeshError>(())
/// ```
pub fn build_flat(text: &str, config: &GlobeConfig) -> Result<FlatRaster, MeshError> {
    config.validate()?;

    let ParsedGrid {
        grid,
        range,
        issues,
    } = ascii_grid::parse(text);
    let summary = GridSummary::new(&grid, range.as_ref());
    let image = render_flat(&grid, range.as_ref())?;

    log::debug!(
        "flat raster: {}x{} pixels, {} cells",
        image.width(),
        image.height(),
        summary.valid_cells
    );

    Ok(FlatRaster {
        image,
        summary,
        issues,
    })
}

// =============================================================================
// PER-CELL PHASE
// =============================================================================

fn merge_grid(grid: &Grid, range: &ValueRange, config: &GlobeConfig) -> MergedBuffer {
    let transformer = CellTransformer::new(config);
    let template = UnitBox::shared();

    let build_row = |(row, values): (usize, &Vec<Option<f64>>)| -> MergedBuffer {
        let mut buffer = MergedBuffer::with_capacity(values.len() * BOX_VERTEX_COUNT);
        for cell in grid.row_cells(row) {
            let (transform, color) =
                transformer.transform(cell.row, cell.col, cell.value, grid, range);
            buffer.push_block(&instantiate(template, &transform, color));
        }
        buffer
    };

    let rows: Vec<MergedBuffer> = if config.parallel {
        grid.rows().par_iter().enumerate().map(build_row).collect()
    } else {
        grid.rows().iter().enumerate().map(build_row).collect()
    };

    let total: usize = rows.iter().map(MergedBuffer::vertex_count).sum();
    let mut buffer = MergedBuffer::with_capacity(total);
    for row in rows {
        buffer.append(row);
    }
    buffer
}
