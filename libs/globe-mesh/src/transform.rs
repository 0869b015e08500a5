//! # Cell Transforms
//!
//! Places one grid cell on the globe: orientation from its row and column,
//! anchor on the sphere surface, and an outward height proportional to its
//! normalized value.
//!
//! ## Composition
//!
//! ```text
//! world = Ry(lon) · Rx(lat) · T(0, 0, radius) · S(tangent, tangent, height)
//! ```
//!
//! The latitude rotation is applied in the frame already rotated by
//! longitude. The unit box template carries the half-extent shift, so its
//! back face (local z = 0) lands on the sphere and the box grows outward.

use ascii_grid::{Grid, ValueRange};
use config::constants::{lerp, GlobeConfig};
use glam::{DMat4, DVec3};

use crate::color::{ColorRamp, Rgb8};

// =============================================================================
// CELL TRANSFORM
// =============================================================================

/// World transform of one cell's box plus the values it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTransform {
    matrix: DMat4,
    amount: f64,
    height: f64,
}

impl CellTransform {
    /// The 4×4 affine matrix.
    #[inline]
    pub fn matrix(&self) -> &DMat4 {
        &self.matrix
    }

    /// Normalized value in `[0, 1]`.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Outward scale of the box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// World position of the box's anchor (template origin).
    pub fn anchor(&self) -> DVec3 {
        self.matrix.transform_point3(DVec3::ZERO)
    }

    /// Unit vector pointing from the sphere center through the anchor.
    pub fn outward(&self) -> DVec3 {
        self.matrix.transform_vector3(DVec3::Z).normalize_or_zero()
    }

    /// Transforms a template-space point.
    #[inline]
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.matrix.transform_point3(point)
    }
}

// =============================================================================
// CELL TRANSFORMER
// =============================================================================

/// Maps present cells to their transform and color.
///
/// # Example
///
/// ```rust
/// use ascii_grid::parse;
/// use config::constants::GlobeConfig;
/// use globe_mesh::transform::CellTransformer;
///
/// let parsed = parse("xllcorner 0\nyllcorner 0\nNODATA_value -1\n1 2 3\n");
/// let range = parsed.range.unwrap();
/// let transformer = CellTransformer::new(&GlobeConfig::default());
///
/// let (transform, _color) = transformer.transform(0, 2, 3.0, &parsed.grid, &range);
/// assert_eq!(transform.amount(), 1.0);
/// assert!((transform.anchor().length() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTransformer {
    radius: f64,
    tangent_scale: f64,
    min_height: f64,
    max_height: f64,
    longitude_offset: f64,
    latitude_offset: f64,
    ramp: ColorRamp,
}

impl CellTransformer {
    /// Builds a transformer from the pipeline configuration.
    pub fn new(config: &GlobeConfig) -> Self {
        Self {
            radius: config.radius,
            tangent_scale: config.tangent_scale,
            min_height: config.min_height,
            max_height: config.max_height,
            longitude_offset: config.longitude_offset,
            latitude_offset: config.latitude_offset,
            ramp: ColorRamp::from_config(config),
        }
    }

    /// Longitude rotation in radians for a column.
    #[inline]
    pub fn longitude(&self, col: usize, xllcorner: f64) -> f64 {
        (col as f64 + xllcorner).to_radians() + self.longitude_offset
    }

    /// Latitude rotation in radians for a row.
    #[inline]
    pub fn latitude(&self, row: usize, yllcorner: f64) -> f64 {
        (row as f64 + yllcorner).to_radians() + self.latitude_offset
    }

    /// Outward box height for a normalized amount.
    #[inline]
    pub fn height(&self, amount: f64) -> f64 {
        lerp(self.min_height, self.max_height, amount)
    }

    /// Composes the world matrix for a cell position and amount.
    pub fn matrix(&self, lon: f64, lat: f64, height: f64) -> DMat4 {
        DMat4::from_rotation_y(lon)
            * DMat4::from_rotation_x(lat)
            * DMat4::from_translation(DVec3::new(0.0, 0.0, self.radius))
            * DMat4::from_scale(DVec3::new(self.tangent_scale, self.tangent_scale, height))
    }

    /// Transform and color for the present cell at `(row, col)`.
    pub fn transform(
        &self,
        row: usize,
        col: usize,
        value: f64,
        grid: &Grid,
        range: &ValueRange,
    ) -> (CellTransform, Rgb8) {
        let amount = range.amount(value);
        let height = self.height(amount);
        let lon = self.longitude(col, grid.xllcorner());
        let lat = self.latitude(row, grid.yllcorner());

        let transform = CellTransform {
            matrix: self.matrix(lon, lat, height),
            amount,
            height,
        };
        (transform, self.ramp.color(amount))
    }

    /// The color ramp in use.
    #[inline]
    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }
}
