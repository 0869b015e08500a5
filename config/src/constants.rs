//! # Configuration Constants
//!
//! Centralized constants for the globe grid pipeline. Sphere placement, box
//! sizing, color mapping and buffer limits are defined here.
//!
//! ## Categories
//!
//! - **Placement**: Sphere radius and the angle offsets aligning raster axes
//!   with the globe texture
//! - **Box Sizing**: Tangent thickness and the outward height range
//! - **Color**: HSL endpoints for the value ramp and the flat raster mode
//! - **Limits**: Buffer size bounds for the rendering collaborator

use std::f64::consts::PI;

use thiserror::Error;

// =============================================================================
// PLACEMENT CONSTANTS
// =============================================================================

/// Radius of the globe in normalized model units.
///
/// Boxes are anchored on a sphere of this radius. The textured globe mesh
/// drawn by the host uses the same value.
///
/// # Example
///
/// ```rust
/// use config::constants::SPHERE_RADIUS;
///
/// assert_eq!(SPHERE_RADIUS, 1.0);
/// ```
pub const SPHERE_RADIUS: f64 = 1.0;

/// Longitude offset in radians added after converting the column index.
///
/// Puts longitude 0 on the seam of an equirectangular world texture.
pub const LONGITUDE_OFFSET: f64 = PI * 0.5;

/// Latitude offset in radians added after converting the row index.
///
/// Rows run from the top of the raster downwards, so the offset tilts the
/// first row up to the raster's northern edge.
pub const LATITUDE_OFFSET: f64 = PI * -0.135;

// =============================================================================
// BOX SIZING CONSTANTS
// =============================================================================

/// Scale applied to the two axes tangent to the sphere surface.
///
/// # Example
///
/// ```rust
/// use config::constants::BOX_TANGENT_SCALE;
///
/// // One-degree cells on a unit sphere are ~0.017 wide, boxes are thinner.
/// assert!(BOX_TANGENT_SCALE < 1.0_f64.to_radians());
/// ```
pub const BOX_TANGENT_SCALE: f64 = 0.005;

/// Outward height of a box whose value equals the range minimum.
pub const MIN_BOX_HEIGHT: f64 = 0.01;

/// Outward height of a box whose value equals the range maximum.
pub const MAX_BOX_HEIGHT: f64 = 0.5;

/// Number of vertices in one non-indexed box (6 faces × 2 triangles × 3).
///
/// # Example
///
/// ```rust
/// use config::constants::BOX_VERTEX_COUNT;
///
/// assert_eq!(BOX_VERTEX_COUNT, 6 * 2 * 3);
/// ```
pub const BOX_VERTEX_COUNT: usize = 36;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Hue (in turns) used for the lowest value of the range (blue).
pub const HUE_AT_MIN: f64 = 0.7;

/// Hue (in turns) used for the highest value of the range (green).
pub const HUE_AT_MAX: f64 = 0.3;

/// Saturation used for every cell color.
pub const COLOR_SATURATION: f64 = 1.0;

/// Lightness of the lowest value when all boxes share one merged buffer.
pub const MERGED_LIGHTNESS_FLOOR: f64 = 0.4;

/// Lightness of the lowest value when each box carries its own material.
///
/// Kept for hosts that want the darker look of per-cell materials.
pub const PER_CELL_LIGHTNESS_FLOOR: f64 = 0.1;

/// Lightness of the highest value of the range.
pub const LIGHTNESS_CEILING: f64 = 1.0;

/// Hue (in turns) of every pixel in the flat raster mode (red).
pub const FLAT_HUE: f64 = 1.0;

/// Background of the flat raster mode, RGBA (`#444444`).
///
/// # Example
///
/// ```rust
/// use config::constants::FLAT_BACKGROUND;
///
/// assert_eq!(FLAT_BACKGROUND, [0x44, 0x44, 0x44, 0xff]);
/// ```
pub const FLAT_BACKGROUND: [u8; 4] = [0x44, 0x44, 0x44, 0xff];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a merged buffer.
///
/// A full one-degree world grid (360 × 180 cells) needs about 2.3 million
/// vertices, well under this bound.
///
/// # Example
///
/// ```rust
/// use config::constants::{BOX_VERTEX_COUNT, MAX_VERTICES};
///
/// assert!(360 * 180 * BOX_VERTEX_COUNT < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 50_000_000;

/// Maximum number of pixels in a flat raster image (4096 × 4096).
///
/// Bounds the canvas declared by `ncols`/`nrows` before anything is
/// allocated.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FLAT_PIXELS;
///
/// // A tenth-of-a-degree world grid fits.
/// assert!(3600 * 1800 <= MAX_FLAT_PIXELS);
/// ```
pub const MAX_FLAT_PIXELS: usize = 4096 * 4096;

// =============================================================================
// PIPELINE CONFIGURATION
// =============================================================================

/// Tunable parameters of the cell transform and color ramp.
///
/// # Examples
/// ```
/// use config::constants::{GlobeConfig, PER_CELL_LIGHTNESS_FLOOR};
///
/// let config = GlobeConfig::default().with_lightness_floor(PER_CELL_LIGHTNESS_FLOOR);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.lightness_floor, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeConfig {
    /// Sphere radius the boxes are anchored on.
    pub radius: f64,
    /// Scale of the two tangent axes.
    pub tangent_scale: f64,
    /// Outward height at amount 0.
    pub min_height: f64,
    /// Outward height at amount 1.
    pub max_height: f64,
    /// Longitude offset in radians.
    pub longitude_offset: f64,
    /// Latitude offset in radians.
    pub latitude_offset: f64,
    /// Hue at amount 0, in turns.
    pub hue_at_min: f64,
    /// Hue at amount 1, in turns.
    pub hue_at_max: f64,
    /// Lightness at amount 0.
    pub lightness_floor: f64,
    /// Run the per-cell phase on the rayon pool.
    pub parallel: bool,
}

impl GlobeConfig {
    /// Builds a configuration with explicit box sizing, validating it.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobeConfig;
    /// let cfg = GlobeConfig::new(2.0, 0.01, 0.02, 1.0).expect("valid config");
    /// assert_eq!(cfg.radius, 2.0);
    /// ```
    pub fn new(
        radius: f64,
        tangent_scale: f64,
        min_height: f64,
        max_height: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            radius,
            tangent_scale,
            min_height,
            max_height,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different lightness floor.
    pub fn with_lightness_floor(mut self, lightness_floor: f64) -> Self {
        self.lightness_floor = lightness_floor;
        self
    }

    /// Returns a copy that runs the per-cell phase sequentially or in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks every field, returning the first offending value.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, GlobeConfig};
    /// let cfg = GlobeConfig::default().with_lightness_floor(1.5);
    /// assert_eq!(cfg.validate(), Err(ConfigError::InvalidLightness(1.5)));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !(self.tangent_scale > 0.0 && self.tangent_scale.is_finite()) {
            return Err(ConfigError::InvalidTangentScale(self.tangent_scale));
        }
        if !(self.min_height > 0.0 && self.min_height <= self.max_height)
            || !self.max_height.is_finite()
        {
            return Err(ConfigError::InvalidHeightRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        for hue in [self.hue_at_min, self.hue_at_max] {
            if !(0.0..=1.0).contains(&hue) {
                return Err(ConfigError::InvalidHue(hue));
            }
        }
        if !(0.0..=LIGHTNESS_CEILING).contains(&self.lightness_floor) {
            return Err(ConfigError::InvalidLightness(self.lightness_floor));
        }
        Ok(())
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: SPHERE_RADIUS,
            tangent_scale: BOX_TANGENT_SCALE,
            min_height: MIN_BOX_HEIGHT,
            max_height: MAX_BOX_HEIGHT,
            longitude_offset: LONGITUDE_OFFSET,
            latitude_offset: LATITUDE_OFFSET,
            hue_at_min: HUE_AT_MIN,
            hue_at_max: HUE_AT_MAX,
            lightness_floor: MERGED_LIGHTNESS_FLOOR,
            parallel: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the sphere radius is zero, negative or not finite.
    #[error("radius must be positive: {0}")]
    InvalidRadius(f64),
    /// Raised when the tangent scale is zero, negative or not finite.
    #[error("tangent_scale must be positive: {0}")]
    InvalidTangentScale(f64),
    /// Raised when the height range is empty, inverted or not positive.
    #[error("height range must satisfy 0 < min <= max: [{min}, {max}]")]
    InvalidHeightRange { min: f64, max: f64 },
    /// Raised when a hue endpoint falls outside `[0, 1]`.
    #[error("hue must be within [0, 1]: {0}")]
    InvalidHue(f64),
    /// Raised when the lightness floor falls outside `[0, 1]`.
    #[error("lightness_floor must be within [0, 1]: {0}")]
    InvalidLightness(f64),
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Linear interpolation between `a` and `b`.
///
/// # Example
///
/// ```rust
/// use config::constants::lerp;
///
/// assert_eq!(lerp(0.01, 0.5, 0.0), 0.01);
/// assert_eq!(lerp(0.7, 0.3, 1.0), 0.3);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}
