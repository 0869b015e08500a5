//! # Mesh Errors
//!
//! Error types for globe mesh generation.
//!
//! Malformed raster input is never an error here; it is reported through
//! [`ascii_grid::GridIssue`] diagnostics carried in the result.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building a globe mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Pipeline configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Merged buffer would exceed the vertex limit
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertices the grid would produce.
        count: usize,
        /// Configured limit.
        max: usize,
    },

    /// Flat raster canvas would exceed the pixel limit
    #[error("Image too large: {width}x{height} (max: {max} pixels)")]
    ImageTooLarge {
        /// Canvas width in pixels.
        width: usize,
        /// Canvas height in pixels.
        height: usize,
        /// Configured limit.
        max: usize,
    },
}

impl MeshError {
    /// Creates a vertex limit error.
    pub fn too_many_vertices(count: usize, max: usize) -> Self {
        Self::TooManyVertices { count, max }
    }

    /// Creates a canvas size error.
    pub fn image_too_large(width: usize, height: usize, max: usize) -> Self {
        Self::ImageTooLarge { width, height, max }
    }
}
