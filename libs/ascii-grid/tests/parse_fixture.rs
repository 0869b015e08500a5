//! Integration tests parsing a small population raster from disk.

use ascii_grid::{parse, GridIssue};

const SAMPLE: &str = include_str!("data/sample.asc");

#[test]
fn sample_parses_cleanly() {
    let parsed = parse(SAMPLE);
    assert!(parsed.is_clean(), "unexpected issues: {:?}", parsed.issues);
    assert_eq!(parsed.grid.row_count(), 4);
    assert!(parsed.grid.rows().iter().all(|row| row.len() == 6));
}

#[test]
fn sample_range_and_counts() {
    let (grid, range) = parse(SAMPLE).into_parts();
    let range = range.expect("sample has valid cells");
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 1250.0);
    assert_eq!(grid.valid_cell_count(), 13);
}

#[test]
fn sample_metadata_passes_through() {
    let parsed = parse(SAMPLE);
    let header = parsed.grid.header();
    assert_eq!(header.ncols(), Some(6));
    assert_eq!(header.nrows(), Some(4));
    assert_eq!(parsed.grid.xllcorner(), -180.0);
    assert_eq!(parsed.grid.yllcorner(), -90.0);
}

#[test]
fn truncated_sample_reports_row_count() {
    let truncated: String = SAMPLE.lines().take(8).map(|l| format!("{l}\n")).collect();
    let parsed = parse(&truncated);
    assert_eq!(parsed.grid.row_count(), 2);
    assert_eq!(
        parsed.issues,
        vec![GridIssue::RowCountMismatch {
            expected: 4,
            found: 2
        }]
    );
}

#[test]
fn crlf_line_endings_parse_identically() {
    let crlf = SAMPLE.replace('\n', "\r\n");
    let unix = parse(SAMPLE);
    let windows = parse(&crlf);
    assert_eq!(unix.grid, windows.grid);
    assert_eq!(unix.range, windows.range);
}
