//! # Grid Header
//!
//! Key/value metadata preceding the data section of an ASCII grid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column count key.
pub const NCOLS: &str = "ncols";
/// Row count key.
pub const NROWS: &str = "nrows";
/// Longitude of the lower-left corner.
pub const XLLCORNER: &str = "xllcorner";
/// Latitude of the lower-left corner.
pub const YLLCORNER: &str = "yllcorner";
/// Cell size in degrees.
pub const CELLSIZE: &str = "cellsize";
/// Sentinel marking a missing cell.
pub const NODATA_VALUE: &str = "NODATA_value";

/// Keys every downstream stage reads.
pub const REQUIRED_KEYS: [&str; 6] = [NCOLS, NROWS, XLLCORNER, YLLCORNER, CELLSIZE, NODATA_VALUE];

/// Header fields keyed verbatim as they appear in the file.
///
/// Values that failed to parse are stored as NaN. Absent float fields read as
/// NaN, matching arithmetic on a missing field in the host.
///
/// # Example
///
/// ```rust
/// use ascii_grid::GridHeader;
///
/// let mut header = GridHeader::default();
/// header.insert("ncols", 360.0);
/// header.insert("xllcorner", -180.0);
/// assert_eq!(header.ncols(), Some(360));
/// assert_eq!(header.xllcorner(), -180.0);
/// assert!(header.yllcorner().is_nan());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridHeader {
    values: BTreeMap<String, f64>,
}

impl GridHeader {
    /// Stores a header value, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Returns the raw value stored for `key`.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Returns true if `key` was present in the input.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over all header pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Required keys missing from this header.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }

    /// Declared column count, if present and representable.
    pub fn ncols(&self) -> Option<usize> {
        self.get(NCOLS).and_then(as_count)
    }

    /// Declared row count, if present and representable.
    pub fn nrows(&self) -> Option<usize> {
        self.get(NROWS).and_then(as_count)
    }

    /// Longitude of the lower-left corner in degrees.
    pub fn xllcorner(&self) -> f64 {
        self.get(XLLCORNER).unwrap_or(f64::NAN)
    }

    /// Latitude of the lower-left corner in degrees.
    pub fn yllcorner(&self) -> f64 {
        self.get(YLLCORNER).unwrap_or(f64::NAN)
    }

    /// Cell size in degrees.
    pub fn cellsize(&self) -> f64 {
        self.get(CELLSIZE).unwrap_or(f64::NAN)
    }

    /// The no-data sentinel, if declared.
    pub fn nodata_value(&self) -> Option<f64> {
        self.get(NODATA_VALUE)
    }
}

fn as_count(value: f64) -> Option<usize> {
    (value.is_finite() && value >= 0.0).then(|| value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_on_empty_header() {
        let header = GridHeader::default();
        assert_eq!(header.missing_keys(), REQUIRED_KEYS.to_vec());
    }

    #[test]
    fn test_missing_keys_after_inserts() {
        let mut header = GridHeader::default();
        for key in [NCOLS, NROWS, XLLCORNER, YLLCORNER, CELLSIZE] {
            header.insert(key, 1.0);
        }
        assert_eq!(header.missing_keys(), vec![NODATA_VALUE]);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut header = GridHeader::default();
        header.insert("NCOLS", 10.0);
        assert_eq!(header.ncols(), None);
        assert_eq!(header.get("NCOLS"), Some(10.0));
    }

    #[test]
    fn test_counts_reject_nan_and_negative() {
        let mut header = GridHeader::default();
        header.insert(NCOLS, f64::NAN);
        header.insert(NROWS, -3.0);
        assert_eq!(header.ncols(), None);
        assert_eq!(header.nrows(), None);
    }

    #[test]
    fn test_last_insert_wins() {
        let mut header = GridHeader::default();
        header.insert(NODATA_VALUE, -1.0);
        header.insert(NODATA_VALUE, -9999.0);
        assert_eq!(header.nodata_value(), Some(-9999.0));
    }
}
