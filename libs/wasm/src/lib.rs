//! WASM-facing entry points for the globe grid pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust types and never touch a JS host.
//!
//! ```
//! let text = "ncols 3\nnrows 1\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -1\n1 -1 3\n";
//! let handle = globe_wasm::render_globe_internal(text, None).unwrap();
//! assert_eq!(handle.vertices(), 2 * 36);
//! ```

use config::constants::GlobeConfig;
use globe_mesh::{build_flat, build_globe};
use wasm_bindgen::prelude::*;

mod diagnostics;
mod globe_handle;
mod scheduler;

pub use diagnostics::{Diagnostic, DiagnosticList, Severity};
pub use globe_handle::{FlatHandle, GlobeHandle};
pub use scheduler::{RenderScheduler, RenderState};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "globe-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Pipeline configuration used by every entry point.
///
/// The per-cell phase only runs on the rayon pool off the browser, where
/// threads exist.
pub fn globe_config() -> GlobeConfig {
    GlobeConfig::default().with_parallel(cfg!(not(target_arch = "wasm32")))
}

/// Parses ASCII grid text and builds the merged globe buffers.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the pipeline refuses the grid.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const handle = render_globe(text);
/// // console.log(handle.vertex_count, handle.min, handle.max);
/// ```
#[wasm_bindgen]
pub fn render_globe(text: &str) -> Result<GlobeHandle, JsValue> {
    render_globe_internal(text, None).map_err(to_js_error)
}

/// Like [`render_globe`] with a custom lightness for the lowest value.
///
/// `0.1` gives the darker look of per-cell materials, `0.4` is the default.
///
/// # Errors
/// Returns a JavaScript error when `lightness_floor` is outside `[0, 1]`.
#[wasm_bindgen]
pub fn render_globe_with_lightness(
    text: &str,
    lightness_floor: f64,
) -> Result<GlobeHandle, JsValue> {
    render_globe_internal(text, Some(lightness_floor)).map_err(to_js_error)
}

/// Parses ASCII grid text and renders the flat 2-D raster.
///
/// # Errors
/// Returns a JavaScript error value when the pipeline refuses the grid.
#[wasm_bindgen]
pub fn render_flat(text: &str) -> Result<FlatHandle, JsValue> {
    render_flat_internal(text).map_err(to_js_error)
}

/// Internal implementation of [`render_globe`] and
/// [`render_globe_with_lightness`].
///
/// Returns an error-severity diagnostic on failure.
pub fn render_globe_internal(
    text: &str,
    lightness_floor: Option<f64>,
) -> Result<GlobeHandle, Diagnostic> {
    let mut config = globe_config();
    if let Some(floor) = lightness_floor {
        config = config.with_lightness_floor(floor);
    }

    let mesh = build_globe(text, &config)?;
    log::debug!(
        "render_globe: {} vertices, {} diagnostics",
        mesh.buffer.vertex_count(),
        mesh.issues.len()
    );
    Ok(GlobeHandle::from_mesh(mesh))
}

/// Internal implementation of [`render_flat`].
pub fn render_flat_internal(text: &str) -> Result<FlatHandle, Diagnostic> {
    let raster = build_flat(text, &globe_config())?;
    Ok(FlatHandle::from_raster(raster))
}

fn to_js_error(diagnostic: Diagnostic) -> JsValue {
    JsValue::from_str(&diagnostic.to_string())
}

#[cfg(test)]
mod tests;
