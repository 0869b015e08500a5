//! # Buffer Merging
//!
//! Concatenates per-cell vertex blocks into one flat position buffer and one
//! flat color buffer, ready for a single non-indexed draw call.
//!
//! No welding is performed: touching boxes keep their own vertices, so the
//! merged buffer draws exactly what drawing each box separately would.

use config::constants::BOX_VERTEX_COUNT;
use glam::DVec3;

use crate::instance::VertexBlock;

/// Flat vertex and color attributes for the whole grid.
///
/// Positions are exported as f32 (`[x, y, z, ...]`), colors as normalized
/// 8-bit RGB (`[r, g, b, ...]`).
///
/// # Example
///
/// ```rust
/// use globe_mesh::MergedBuffer;
///
/// let buffer = MergedBuffer::default();
/// assert!(buffer.is_empty());
/// assert_eq!(buffer.vertex_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedBuffer {
    positions: Vec<f32>,
    colors: Vec<u8>,
    vertex_count: usize,
}

impl MergedBuffer {
    /// Creates an empty buffer sized for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            colors: Vec::with_capacity(vertices * 3),
            vertex_count: 0,
        }
    }

    /// Appends one block's positions and colors.
    pub fn push_block(&mut self, block: &VertexBlock) {
        for p in block.positions() {
            self.positions.push(p.x as f32);
            self.positions.push(p.y as f32);
            self.positions.push(p.z as f32);
        }
        for color in block.colors() {
            self.colors.extend_from_slice(&color.to_array());
        }
        self.vertex_count += block.vertex_count();
    }

    /// Moves every vertex of `other` to the end of this buffer.
    pub fn append(&mut self, mut other: MergedBuffer) {
        self.positions.append(&mut other.positions);
        self.colors.append(&mut other.colors);
        self.vertex_count += other.vertex_count;
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count / 3
    }

    /// True when the buffer holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Flattened positions, length `3 * vertex_count`.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flattened colors, length `3 * vertex_count`.
    #[inline]
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// Gives up ownership of the two attribute buffers.
    pub fn into_parts(self) -> (Vec<f32>, Vec<u8>) {
        (self.positions, self.colors)
    }

    /// Axis-aligned bounds as (min, max). Zero for an empty buffer.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self
            .positions
            .chunks_exact(3)
            .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64));

        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }
}

/// Concatenates blocks in the order given.
///
/// Callers pass blocks in canonical order (row ascending, column ascending,
/// absent cells skipped).
///
/// # Example
///
/// ```rust
/// use globe_mesh::merge;
///
/// let buffer = merge(std::iter::empty());
/// assert_eq!(buffer.vertex_count(), 0);
/// assert!(buffer.positions().is_empty());
/// ```
pub fn merge<I>(blocks: I) -> MergedBuffer
where
    I: IntoIterator<Item = VertexBlock>,
{
    let blocks = blocks.into_iter();
    let mut buffer = MergedBuffer::with_capacity(blocks.size_hint().0 * BOX_VERTEX_COUNT);
    for block in blocks {
        buffer.push_block(&block);
    }
    buffer
}
