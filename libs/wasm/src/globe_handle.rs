//! # Render Handles
//!
//! WASM-friendly wrappers for the pipeline outputs, transferred to JavaScript
//! as typed arrays.

use globe_mesh::{FlatRaster, GlobeMesh, GridSummary};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::diagnostics::DiagnosticList;

/// A handle to the merged globe buffers.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const handle = render_globe(await (await fetch("pop.asc")).text());
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute("position", new THREE.BufferAttribute(handle.positions(), 3));
/// geometry.setAttribute("color", new THREE.BufferAttribute(handle.colors(), 3, true));
/// const mesh = new THREE.Mesh(geometry, new THREE.MeshBasicMaterial({ vertexColors: true }));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct GlobeHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Normalized vertex colors as [r, g, b, r, g, b, ...]
    colors: Vec<u8>,
    vertex_count: usize,
    summary: GridSummary,
    diagnostics: DiagnosticList,
}

#[wasm_bindgen]
impl GlobeHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.vertex_count).unwrap_or(u32::MAX)
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.positions[..])
    }

    /// Returns the vertex colors as a Uint8Array, to be read as normalized.
    ///
    /// Format: [r, g, b, r, g, b, ...]
    /// Length: vertex_count * 3
    pub fn colors(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.colors[..])
    }

    /// Smallest valid value, undefined for an empty grid.
    #[wasm_bindgen(getter)]
    pub fn min(&self) -> Option<f64> {
        self.summary.min
    }

    /// Largest valid value, undefined for an empty grid.
    #[wasm_bindgen(getter)]
    pub fn max(&self) -> Option<f64> {
        self.summary.max
    }

    /// Declared column count.
    #[wasm_bindgen(getter)]
    pub fn ncols(&self) -> Option<u32> {
        self.summary.ncols.and_then(|n| u32::try_from(n).ok())
    }

    /// Declared row count.
    #[wasm_bindgen(getter)]
    pub fn nrows(&self) -> Option<u32> {
        self.summary.nrows.and_then(|n| u32::try_from(n).ok())
    }

    /// Longitude of the lower-left corner.
    #[wasm_bindgen(getter)]
    pub fn xllcorner(&self) -> f64 {
        self.summary.xllcorner
    }

    /// Latitude of the lower-left corner.
    #[wasm_bindgen(getter)]
    pub fn yllcorner(&self) -> f64 {
        self.summary.yllcorner
    }

    /// Returns the parse diagnostics.
    pub fn diagnostics(&self) -> DiagnosticList {
        self.diagnostics.clone()
    }

    /// Returns true if no cell was drawn.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Summary, vertex count and diagnostics as a JSON string.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    pub fn metadata_json(&self) -> Result<String, JsValue> {
        self.metadata_string()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

#[derive(Serialize)]
struct Metadata<'a> {
    #[serde(flatten)]
    summary: &'a GridSummary,
    vertex_count: usize,
    diagnostics: &'a DiagnosticList,
}

impl GlobeHandle {
    /// Wraps a pipeline result.
    pub fn from_mesh(mesh: GlobeMesh) -> Self {
        let vertex_count = mesh.buffer.vertex_count();
        let diagnostics = DiagnosticList::from_issues(&mesh.issues);
        let (positions, colors) = mesh.buffer.into_parts();
        Self {
            positions,
            colors,
            vertex_count,
            summary: mesh.summary,
            diagnostics,
        }
    }

    /// Positions without a JS copy.
    pub fn position_data(&self) -> &[f32] {
        &self.positions
    }

    /// Colors without a JS copy.
    pub fn color_data(&self) -> &[u8] {
        &self.colors
    }

    /// Native vertex count.
    pub fn vertices(&self) -> usize {
        self.vertex_count
    }

    /// Pass-through grid metadata.
    pub fn summary(&self) -> &GridSummary {
        &self.summary
    }

    /// Diagnostics without cloning the list.
    pub fn diagnostic_list(&self) -> &DiagnosticList {
        &self.diagnostics
    }

    /// The JSON behind [`GlobeHandle::metadata_json`].
    pub fn metadata_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Metadata {
            summary: &self.summary,
            vertex_count: self.vertex_count,
            diagnostics: &self.diagnostics,
        })
    }
}

/// A handle to the flat raster image.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const flat = render_flat(text);
/// canvas.width = flat.width;
/// canvas.height = flat.height;
/// const image = new ImageData(new Uint8ClampedArray(flat.pixels().buffer), flat.width);
/// canvas.getContext("2d").putImageData(image, 0, 0);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct FlatHandle {
    width: usize,
    height: usize,
    /// RGBA bytes, row-major.
    pixels: Vec<u8>,
    diagnostics: DiagnosticList,
}

#[wasm_bindgen]
impl FlatHandle {
    /// Canvas width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        u32::try_from(self.width).unwrap_or(u32::MAX)
    }

    /// Canvas height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        u32::try_from(self.height).unwrap_or(u32::MAX)
    }

    /// Returns the RGBA pixels as a Uint8Array.
    ///
    /// Length: width * height * 4
    pub fn pixels(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.pixels[..])
    }

    /// Returns the parse diagnostics.
    pub fn diagnostics(&self) -> DiagnosticList {
        self.diagnostics.clone()
    }
}

impl FlatHandle {
    /// Wraps a pipeline result.
    pub fn from_raster(raster: FlatRaster) -> Self {
        let diagnostics = DiagnosticList::from_issues(&raster.issues);
        let width = raster.image.width();
        let height = raster.image.height();
        Self {
            width,
            height,
            pixels: raster.image.into_pixels(),
            diagnostics,
        }
    }

    /// Pixels without a JS copy.
    pub fn pixel_data(&self) -> &[u8] {
        &self.pixels
    }

    /// Diagnostics without cloning the list.
    pub fn diagnostic_list(&self) -> &DiagnosticList {
        &self.diagnostics
    }
}
