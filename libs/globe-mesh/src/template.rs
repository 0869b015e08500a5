//! # Unit Box Template
//!
//! The shared, read-only box every cell instance is stamped from.

use std::sync::OnceLock;

use config::constants::BOX_VERTEX_COUNT;
use glam::DVec3;

/// Non-indexed unit cube: 12 triangles, 36 positions, outward CCW winding.
///
/// The cube spans `[-0.5, 0.5]` in x and y and `[0, 1]` in z. Its back face
/// sits on the local origin so that scaling along z grows the box away from
/// whatever surface the origin is placed on.
///
/// # Example
///
/// ```rust
/// use globe_mesh::template::UnitBox;
///
/// let unit = UnitBox::shared();
/// assert_eq!(unit.positions().len(), 36);
/// let (min, max) = unit.bounding_box();
/// assert_eq!(min.z, 0.0);
/// assert_eq!(max.z, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UnitBox {
    positions: [DVec3; BOX_VERTEX_COUNT],
}

impl UnitBox {
    /// Builds the template.
    pub fn new() -> Self {
        let min = DVec3::splat(-0.5);
        let max = DVec3::splat(0.5);

        // Vertex ordering:
        // 0: bottom-front-left   4: top-front-left
        // 1: bottom-front-right  5: top-front-right
        // 2: bottom-back-right   6: top-back-right
        // 3: bottom-back-left    7: top-back-left
        let corners = [
            DVec3::new(min.x, min.y, min.z),
            DVec3::new(max.x, min.y, min.z),
            DVec3::new(max.x, max.y, min.z),
            DVec3::new(min.x, max.y, min.z),
            DVec3::new(min.x, min.y, max.z),
            DVec3::new(max.x, min.y, max.z),
            DVec3::new(max.x, max.y, max.z),
            DVec3::new(min.x, max.y, max.z),
        ];

        const TRIANGLES: [[usize; 3]; 12] = [
            // Bottom face (z = min.z)
            [0, 2, 1],
            [0, 3, 2],
            // Top face (z = max.z)
            [4, 5, 6],
            [4, 6, 7],
            // Front face (y = min.y)
            [0, 1, 5],
            [0, 5, 4],
            // Back face (y = max.y)
            [2, 3, 7],
            [2, 7, 6],
            // Left face (x = min.x)
            [3, 0, 4],
            [3, 4, 7],
            // Right face (x = max.x)
            [1, 2, 6],
            [1, 6, 5],
        ];

        // Half-extent shift: back face onto z = 0.
        let anchor = DVec3::new(0.0, 0.0, 0.5);
        let positions = std::array::from_fn(|i| corners[TRIANGLES[i / 3][i % 3]] + anchor);

        Self { positions }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static UnitBox {
        static SHARED: OnceLock<UnitBox> = OnceLock::new();
        SHARED.get_or_init(UnitBox::new)
    }

    /// Positions in triangle order.
    #[inline]
    pub fn positions(&self) -> &[DVec3; BOX_VERTEX_COUNT] {
        &self.positions
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Axis-aligned bounds as (min, max).
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        self.positions.iter().fold(
            (DVec3::splat(f64::INFINITY), DVec3::splat(f64::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }
}

impl Default for UnitBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_12_triangles() {
        let unit = UnitBox::new();
        assert_eq!(unit.positions().len(), 36);
        assert_eq!(unit.triangle_count(), 12);
    }

    #[test]
    fn test_template_bounds() {
        let (min, max) = UnitBox::new().bounding_box();
        assert_eq!(min, DVec3::new(-0.5, -0.5, 0.0));
        assert_eq!(max, DVec3::new(0.5, 0.5, 1.0));
    }

    #[test]
    fn test_back_face_on_origin_plane() {
        let on_plane = UnitBox::new()
            .positions()
            .iter()
            .filter(|p| p.z == 0.0)
            .count();
        // Both bottom triangles, plus three bottom-edge entries per side face.
        assert_eq!(on_plane, 6 + 4 * 3);
    }

    #[test]
    fn test_triangles_face_outward() {
        let unit = UnitBox::new();
        let center = DVec3::new(0.0, 0.0, 0.5);
        for tri in unit.positions().chunks_exact(3) {
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            assert!(normal.dot(centroid - center) > 0.0, "inward triangle {tri:?}");
            assert!(normal.length() > 0.0);
        }
    }

    #[test]
    fn test_shared_is_stable() {
        assert!(std::ptr::eq(UnitBox::shared(), UnitBox::shared()));
        assert_eq!(UnitBox::shared(), &UnitBox::new());
    }
}
