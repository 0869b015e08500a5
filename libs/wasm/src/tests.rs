//! Tests for the WASM-facing pipeline helpers.

use super::*;

const WORLD: &str = "ncols 4\nnrows 2\nxllcorner -180\nyllcorner -90\n\
                     cellsize 1\nNODATA_value -9999\n\
                     10 20 -9999 30\n-9999 5 15 25\n";

/// Confirms the internal globe helper returns consistent buffers.
#[test_log::test]
fn render_globe_buffers_are_consistent() {
    let handle = render_globe_internal(WORLD, None).expect("grid renders");

    assert_eq!(handle.vertices(), 6 * 36);
    assert_eq!(handle.position_data().len(), handle.vertices() * 3);
    assert_eq!(handle.color_data().len(), handle.vertices() * 3);
    assert!(handle.position_data().iter().all(|v| v.is_finite()));
    assert!(!handle.is_empty());
}

/// Metadata passes through unchanged.
#[test]
fn render_globe_exposes_metadata() {
    let handle = render_globe_internal(WORLD, None).expect("grid renders");

    assert_eq!(handle.min(), Some(5.0));
    assert_eq!(handle.max(), Some(30.0));
    assert_eq!(handle.ncols(), Some(4));
    assert_eq!(handle.nrows(), Some(2));
    assert_eq!(handle.xllcorner(), -180.0);
    assert_eq!(handle.yllcorner(), -90.0);
    assert_eq!(handle.summary().valid_cells, 6);
    assert!(handle.diagnostic_list().is_empty());
}

/// The JSON summary carries the header fields and vertex count.
#[test]
fn metadata_json_is_parseable() {
    let handle = render_globe_internal(WORLD, None).expect("grid renders");
    let json = handle.metadata_string().expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["min"], 5.0);
    assert_eq!(value["max"], 30.0);
    assert_eq!(value["ncols"], 4);
    assert_eq!(value["vertex_count"], 6 * 36);
    assert!(value["diagnostics"]["diagnostics"].as_array().is_some());
}

/// Header-only input renders nothing without failing.
#[test]
fn empty_grid_renders_empty_handle() {
    let handle =
        render_globe_internal("ncols 2\nnrows 0\nNODATA_value -1\n", None).expect("not an error");

    assert!(handle.is_empty());
    assert_eq!(handle.min(), None);
    let diagnostics = handle.diagnostic_list().as_slice();
    assert!(diagnostics.iter().any(|d| d.severity() == Severity::Info));
}

/// Malformed rows become warnings with line numbers.
#[test]
fn ragged_row_surfaces_warning() {
    let text = "ncols 4\nnrows 1\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -1\n1 2 3\n";
    let handle = render_globe_internal(text, None).expect("renders anyway");

    let diagnostics = handle.diagnostic_list().as_slice();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity(), Severity::Warning);
    assert_eq!(diagnostics[0].source_line(), Some(7));
    assert_eq!(handle.vertices(), 3 * 36);
}

/// Custom lightness changes colors, never positions.
#[test]
fn lightness_floor_only_changes_colors() {
    let merged = render_globe_internal(WORLD, None).expect("grid renders");
    let darker = render_globe_internal(WORLD, Some(0.1)).expect("grid renders");

    assert_eq!(merged.position_data(), darker.position_data());
    assert_ne!(merged.color_data(), darker.color_data());
}

/// Out-of-range lightness is refused with an error diagnostic.
#[test]
fn invalid_lightness_is_rejected() {
    let err = render_globe_internal(WORLD, Some(1.5)).unwrap_err();

    assert_eq!(err.severity(), Severity::Error);
    assert!(err.message_str().contains("lightness_floor"));
}

/// The flat raster has one RGBA pixel per cell.
#[test]
fn render_flat_matches_header() {
    let handle = render_flat_internal(WORLD).expect("grid renders");

    assert_eq!((handle.width(), handle.height()), (4, 2));
    assert_eq!(handle.pixel_data().len(), 4 * 2 * 4);
    // Row 0, column 2 is no-data.
    assert_eq!(&handle.pixel_data()[8..12], &[0x44, 0x44, 0x44, 0xff]);
}

/// A huge declared canvas is refused instead of aborting the module.
#[test]
fn render_flat_rejects_oversized_canvas() {
    let err = render_flat_internal("ncols 1e12\nnrows 1e12\nNODATA_value -1\n1 2 3\n")
        .unwrap_err();

    assert_eq!(err.severity(), Severity::Error);
    assert!(err.message_str().starts_with("Image too large"));
}

/// Native builds run the per-cell phase on the rayon pool.
#[test]
fn native_config_is_parallel() {
    assert!(globe_config().parallel);
}
