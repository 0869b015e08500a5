//! # Flat Raster Mode
//!
//! Draws the grid as a 2-D image, one pixel per cell, instead of boxes on a
//! globe. Useful as a quick preview of the raster and its value range.

use ascii_grid::{Grid, ValueRange};
use config::constants::{FLAT_BACKGROUND, MAX_FLAT_PIXELS};
use serde::Serialize;

use crate::color::flat_color;
use crate::error::MeshError;

/// RGBA8 image with one pixel per grid cell.
///
/// Pixel `(x, y)` is cell `(row = y, col = x)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl FlatImage {
    /// Creates an image filled with the background color.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ImageTooLarge`] when `width × height` overflows
    /// or exceeds [`MAX_FLAT_PIXELS`]. Nothing is allocated in that case.
    pub fn new(width: usize, height: usize) -> Result<Self, MeshError> {
        let count = width
            .checked_mul(height)
            .filter(|&count| count <= MAX_FLAT_PIXELS)
            .ok_or_else(|| MeshError::image_too_large(width, height, MAX_FLAT_PIXELS))?;
        Ok(Self {
            width,
            height,
            pixels: FLAT_BACKGROUND.repeat(count),
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major RGBA bytes, length `4 * width * height`.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Gives up ownership of the pixel bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA of the pixel at `(x, y)`, `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[start..start + 4]);
        Some(rgba)
    }

    /// Paints one pixel. Returns false, leaving the image untouched, when
    /// `(x, y)` lies outside the canvas.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let start = (y * self.width + x) * 4;
        self.pixels[start..start + 4].copy_from_slice(&rgba);
        true
    }
}

/// Renders a parsed grid into a flat image.
///
/// The canvas is `ncols × nrows` from the header. A header that lacks either
/// falls back to the widest row and the number of rows parsed. Cells beyond
/// the canvas are clipped.
///
/// # Errors
///
/// Returns [`MeshError::ImageTooLarge`] when the canvas exceeds
/// [`MAX_FLAT_PIXELS`].
///
/// # Example
///
/// ```rust
/// use ascii_grid::parse;
/// use globe_mesh::flat::render_flat;
///
/// let parsed = parse("ncols 3\nnrows 1\nNODATA_value -1\n-1 5 10\n");
/// let image = render_flat(&parsed.grid, parsed.range.as_ref())?;
/// assert_eq!(image.pixel(0, 0), Some([0x44, 0x44, 0x44, 0xff]));
/// assert_eq!(image.pixel(1, 0), Some([0, 0, 0, 0xff]));
/// # Ok::<(), globe_mesh::MeshError>(())
/// ```
pub fn render_flat(grid: &Grid, range: Option<&ValueRange>) -> Result<FlatImage, MeshError> {
    let width = grid
        .header()
        .ncols()
        .unwrap_or_else(|| grid.rows().iter().map(Vec::len).max().unwrap_or(0));
    let height = grid.header().nrows().unwrap_or_else(|| grid.row_count());
    let mut image = FlatImage::new(width, height)?;

    let Some(range) = range else {
        return Ok(image);
    };

    let mut clipped = 0usize;
    for cell in grid.cells() {
        let rgba = flat_color(range.amount(cell.value)).to_rgba();
        if !image.set_pixel(cell.col, cell.row, rgba) {
            clipped += 1;
        }
    }
    if clipped > 0 {
        log::debug!("flat raster clipped {clipped} cells outside {width}x{height}");
    }
    Ok(image)
}
