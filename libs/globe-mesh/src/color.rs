//! # Cell Colors
//!
//! HSL color ramp over the normalized cell value, converted to 8-bit RGB for
//! the color attribute of the merged buffer.
//!
//! Hue runs from blue (low values) to green (high values) while lightness
//! rises from a configurable floor to white.

use config::constants::{lerp, GlobeConfig, COLOR_SATURATION, FLAT_HUE, LIGHTNESS_CEILING};
use serde::{Deserialize, Serialize};

// =============================================================================
// RGB
// =============================================================================

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in attribute order.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels plus an opaque alpha.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

// =============================================================================
// HSL
// =============================================================================

/// A color in HSL space, every component in `[0, 1]` (hue in turns).
///
/// # Example
///
/// ```rust
/// use globe_mesh::color::{Hsl, Rgb8};
///
/// assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_rgb8(), Rgb8::new(255, 0, 0));
/// assert_eq!(Hsl::new(0.7, 1.0, 1.0).to_rgb8(), Rgb8::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in turns; wrapped into `[0, 1)`.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Creates an HSL color.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to linear RGB components in `[0, 1]`.
    ///
    /// Hue wraps around, saturation and lightness are clamped.
    pub fn to_rgb(self) -> [f64; 3] {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return [l, l, l];
        }

        let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        [
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        ]
    }

    /// Converts to 8-bit RGB, scaling each channel by 255 and truncating.
    pub fn to_rgb8(self) -> Rgb8 {
        let [r, g, b] = self.to_rgb();
        Rgb8::new(to_byte(r), to_byte(g), to_byte(b))
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    // Float-to-int `as` saturates, so 1.0 lands on 255 and NaN on 0.
    (channel * 255.0) as u8
}

// =============================================================================
// RAMPS
// =============================================================================

/// Value-to-color mapping for the globe boxes.
///
/// # Example
///
/// ```rust
/// use config::constants::GlobeConfig;
/// use globe_mesh::color::ColorRamp;
///
/// let ramp = ColorRamp::from_config(&GlobeConfig::default());
/// assert!(ramp.hue(0.0) > ramp.hue(1.0));
/// assert_eq!(ramp.lightness(1.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    hue_at_min: f64,
    hue_at_max: f64,
    lightness_floor: f64,
}

impl ColorRamp {
    /// Builds the ramp from the pipeline configuration.
    pub fn from_config(config: &GlobeConfig) -> Self {
        Self {
            hue_at_min: config.hue_at_min,
            hue_at_max: config.hue_at_max,
            lightness_floor: config.lightness_floor,
        }
    }

    /// Hue for a normalized amount.
    #[inline]
    pub fn hue(&self, amount: f64) -> f64 {
        lerp(self.hue_at_min, self.hue_at_max, amount)
    }

    /// Lightness for a normalized amount.
    #[inline]
    pub fn lightness(&self, amount: f64) -> f64 {
        lerp(self.lightness_floor, LIGHTNESS_CEILING, amount)
    }

    /// HSL color for a normalized amount.
    pub fn hsl(&self, amount: f64) -> Hsl {
        Hsl::new(self.hue(amount), COLOR_SATURATION, self.lightness(amount))
    }

    /// 8-bit color for a normalized amount.
    pub fn color(&self, amount: f64) -> Rgb8 {
        self.hsl(amount).to_rgb8()
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::from_config(&GlobeConfig::default())
    }
}

/// Color of one pixel in the flat raster mode: red whose lightness is the
/// amount, truncated to whole percent.
///
/// # Example
///
/// ```rust
/// use globe_mesh::color::flat_color;
///
/// assert_eq!(flat_color(0.259), flat_color(0.25));
/// ```
pub fn flat_color(amount: f64) -> Rgb8 {
    let lightness = (amount * 100.0).trunc() / 100.0;
    Hsl::new(FLAT_HUE, COLOR_SATURATION, lightness).to_rgb8()
}
