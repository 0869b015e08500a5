//! # Geometry Instances
//!
//! Stamps the unit box template with one cell's transform and color.

use config::constants::BOX_VERTEX_COUNT;
use glam::DVec3;

use crate::color::Rgb8;
use crate::template::UnitBox;
use crate::transform::CellTransform;

/// One cell's box: 36 world-space positions sharing a single flat color.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBlock {
    positions: [DVec3; BOX_VERTEX_COUNT],
    color: Rgb8,
}

impl VertexBlock {
    /// World-space positions in template order.
    #[inline]
    pub fn positions(&self) -> &[DVec3; BOX_VERTEX_COUNT] {
        &self.positions
    }

    /// The color every vertex of this block carries.
    #[inline]
    pub fn color(&self) -> Rgb8 {
        self.color
    }

    /// Per-vertex colors, one entry per position.
    pub fn colors(&self) -> impl Iterator<Item = Rgb8> + '_ {
        std::iter::repeat(self.color).take(self.positions.len())
    }

    /// Number of vertices in the block.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Applies `transform` to every template position and paints the result.
///
/// # Example
///
/// ```rust
/// use ascii_grid::parse;
/// use config::constants::GlobeConfig;
/// use globe_mesh::{instantiate, CellTransformer, UnitBox};
///
/// let parsed = parse("xllcorner 0\nyllcorner 0\n1 2 3\n");
/// let range = parsed.range.unwrap();
/// let (transform, color) =
///     CellTransformer::new(&GlobeConfig::default()).transform(0, 1, 2.0, &parsed.grid, &range);
///
/// let block = instantiate(UnitBox::shared(), &transform, color);
/// assert_eq!(block.vertex_count(), 36);
/// assert!(block.colors().all(|c| c == color));
/// ```
pub fn instantiate(template: &UnitBox, transform: &CellTransform, color: Rgb8) -> VertexBlock {
    let matrix = transform.matrix();
    let local = template.positions();
    VertexBlock {
        positions: std::array::from_fn(|i| matrix.transform_point3(local[i])),
        color,
    }
}
