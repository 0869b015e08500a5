//! Tests for the grid parser.

use super::*;

const HEADER: &str = "ncols 4\n\
                      nrows 1\n\
                      xllcorner -180\n\
                      yllcorner -90\n\
                      cellsize 1\n\
                      NODATA_value -9999\n";

fn parse(text: &str) -> ParsedGrid {
    GridParser::new().parse(text)
}

/// Valid cells set the range and the sentinel marks one cell missing.
#[test_log::test]
fn range_skips_nodata_cells() {
    let parsed = parse(&format!("{HEADER}10 20 -9999 30\n"));
    let range = parsed.range.expect("range");
    assert_eq!(range.min, 10.0);
    assert_eq!(range.max, 30.0);
    assert_eq!(parsed.grid.rows()[0], vec![Some(10.0), Some(20.0), None, Some(30.0)]);
    assert_eq!(
        parsed.grid.rows()[0].iter().filter(|v| v.is_none()).count(),
        1
    );
    assert!(parsed.is_clean(), "unexpected issues: {:?}", parsed.issues);
}

/// Header values are stored verbatim under their key.
#[test]
fn header_pairs_are_recorded() {
    let parsed = parse(HEADER);
    let header = parsed.grid.header();
    assert_eq!(header.ncols(), Some(4));
    assert_eq!(header.nrows(), Some(1));
    assert_eq!(header.xllcorner(), -180.0);
    assert_eq!(header.yllcorner(), -90.0);
    assert_eq!(header.cellsize(), 1.0);
    assert_eq!(header.nodata_value(), Some(-9999.0));
}

/// A header-only input yields an empty grid and no range.
#[test]
fn header_only_input_has_no_range() {
    let parsed = parse(HEADER);
    assert!(parsed.grid.is_empty());
    assert_eq!(parsed.range, None);
    assert!(parsed.issues.contains(&GridIssue::NoValidCells));
    assert!(parsed.issues.contains(&GridIssue::RowCountMismatch {
        expected: 1,
        found: 0
    }));
}

/// Blank lines and single-token lines never become rows or headers.
#[test]
fn short_lines_are_ignored() {
    let parsed = parse(&format!("\n   \n{HEADER}\ntrailing\n1 2 3 4\n\n"));
    assert_eq!(parsed.grid.row_count(), 1);
    assert!(!parsed.grid.header().contains("trailing"));
}

/// Leading and trailing whitespace and tabs are tolerated.
#[test]
fn whitespace_runs_split_tokens() {
    let parsed = parse(&format!("{HEADER}  1\t\t2   3 4  \r\n"));
    assert_eq!(
        parsed.grid.rows()[0],
        vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]
    );
}

/// Non-numeric data stays present as NaN and is left out of the range.
#[test]
fn non_numeric_values_become_nan() {
    let parsed = parse(&format!("{HEADER}5 abc 7 9\n"));
    let row = &parsed.grid.rows()[0];
    assert!(row[1].expect("present").is_nan());
    assert_eq!(parsed.grid.valid_cell_count(), 4);

    let range = parsed.range.expect("range");
    assert_eq!((range.min, range.max), (5.0, 9.0));
    assert!(parsed
        .issues
        .contains(&GridIssue::NonNumericValues { line: 7, count: 1 }));
}

/// A malformed header value is stored as NaN and reported.
#[test]
fn non_numeric_header_becomes_nan() {
    let parsed = parse("cellsize wide\n");
    assert!(parsed.grid.header().cellsize().is_nan());
    assert!(parsed.issues.contains(&GridIssue::NonNumericHeader {
        line: 1,
        key: "cellsize".to_string()
    }));
}

/// The sentinel only applies to rows read after it is declared.
#[test]
fn late_nodata_does_not_rewrite_earlier_rows() {
    let parsed = parse("ncols 3\n-1 2 3\nNODATA_value -1\n-1 5 6\n");
    assert_eq!(parsed.grid.cell(0, 0), Some(-1.0));
    assert_eq!(parsed.grid.cell(1, 0), None);

    let range = parsed.range.expect("range");
    assert_eq!(range.min, -1.0);
    assert!(parsed.issues.contains(&GridIssue::NoDataAfterData {
        line: 3,
        rows_before: 1
    }));
}

/// Without a sentinel every numeric cell is present.
#[test]
fn missing_nodata_keeps_every_cell() {
    let parsed = parse("1 -9999 3\n");
    assert_eq!(parsed.grid.valid_cell_count(), 3);
    assert!(parsed.issues.contains(&GridIssue::MissingHeader {
        key: "NODATA_value"
    }));
}

/// Rows whose width disagrees with ncols are kept but reported.
#[test]
fn ragged_rows_are_reported() {
    let parsed = parse(&format!("{HEADER}1 2 3\n"));
    assert_eq!(parsed.grid.rows()[0].len(), 3);
    assert!(parsed.issues.contains(&GridIssue::RaggedRow {
        line: 7,
        expected: 4,
        found: 3
    }));
}

/// All-sentinel data gives no range.
#[test]
fn all_nodata_has_no_range() {
    let parsed = parse(&format!("{HEADER}-9999 -9999 -9999 -9999\n"));
    assert_eq!(parsed.range, None);
    assert_eq!(parsed.grid.valid_cell_count(), 0);
    assert_eq!(parsed.grid.row_count(), 1);
}

/// Negative and fractional values parse, rows stay in file order.
#[test]
fn rows_keep_file_order() {
    let parsed = parse("ncols 3\nNODATA_value -9999\n-1.5 0 2.25\n3 4 5\n");
    assert_eq!(parsed.grid.cell(0, 0), Some(-1.5));
    assert_eq!(parsed.grid.cell(1, 2), Some(5.0));
    let range = parsed.range.expect("range");
    assert_eq!((range.min, range.max), (-1.5, 5.0));
}

/// Line-by-line feeding matches whole-text parsing.
#[test]
fn push_line_matches_parse() {
    let text = format!("{HEADER}1 2 3 4\n");
    let mut parser = GridParser::new();
    for line in text.lines() {
        parser.push_line(line);
    }
    let streamed = parser.finish();
    let whole = parse(&text);
    assert_eq!(streamed.grid, whole.grid);
    assert_eq!(streamed.range, whole.range);
}
