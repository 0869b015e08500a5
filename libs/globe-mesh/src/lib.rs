//! # Globe Mesh
//!
//! Browser-safe batched geometry for ASCII grid rasters drawn on a globe.
//! Every valid cell becomes a thin box standing on a unit sphere, and all
//! boxes are merged into one non-indexed buffer for a single draw call.
//!
//! ## Architecture
//!
//! ```text
//! ascii-grid (Grid + ValueRange) → globe-mesh (MergedBuffer) → wasm
//! ```
//!
//! ## Stages
//!
//! - **Transform**: grid position and value to a `DMat4` and an RGB color
//! - **Template**: one shared 36-vertex unit box
//! - **Instance**: template stamped with a cell's transform and color
//! - **Merge**: blocks concatenated in row-major order into flat buffers
//! - **Flat**: optional 2-D raster preview, one pixel per cell
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::GlobeConfig;
//! use globe_mesh::build_globe;
//!
//! let mesh = build_globe("ncols 3\nnrows 1\nNODATA_value -1\n1 -1 3\n", &GlobeConfig::default())?;
//! assert_eq!(mesh.buffer.vertex_count(), 2 * 36);
//! assert_eq!(mesh.buffer.colors().len(), mesh.buffer.positions().len());
//! # Ok::<(), globe_mesh::MeshError>(())
//! ```

pub mod color;
pub mod error;
pub mod flat;
pub mod instance;
pub mod merge;
pub mod pipeline;
pub mod template;
pub mod transform;

pub use color::{ColorRamp, Hsl, Rgb8};
pub use error::MeshError;
pub use flat::{render_flat, FlatImage};
pub use instance::{instantiate, VertexBlock};
pub use merge::{merge, MergedBuffer};
pub use pipeline::{build_flat, build_globe, build_globe_from, FlatRaster, GlobeMesh, GridSummary};
pub use template::UnitBox;
pub use transform::{CellTransform, CellTransformer};
