// crates/somgeo-core/src/locator.rs

//! # Region Locator
//!
//! Coarse coordinate → region attribution using an ordered table of
//! axis-aligned bounding boxes. This is a stand-in for real polygon
//! containment: boxes may overlap, and the first matching row wins.
use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use crate::error::{GeoError, Result};
#[cfg(feature = "json")]
use crate::location_code::PREFIX_SEPARATOR;
#[cfg(feature = "json")]
use std::path::Path;

/// One row of the table. Bounds are inclusive on all four sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionBox {
    /// Short region code without the `SOM-` prefix, e.g. `BNR`.
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl RegionBox {
    pub fn new(code: &str, lat: (f64, f64), lon: (f64, f64)) -> Self {
        RegionBox {
            code: code.to_string(),
            name: None,
            lat_min: lat.0,
            lat_max: lat.1,
            lon_min: lon.0,
            lon_max: lon.1,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lon_min <= lon && lon <= self.lon_max
    }
}

/// Ordered bounding-box table. Iteration order is row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
    rows: Vec<RegionBox>,
}

impl Default for RegionTable {
    /// The built-in table: Banadir, then `HRS`, then `SHB`.
    fn default() -> Self {
        RegionTable::new(vec![
            RegionBox::new("BNR", (1.8, 2.2), (45.0, 45.6)).named("Banadir"),
            RegionBox::new("HRS", (9.0, 10.0), (43.0, 45.0)).named("Hiiraan"),
            RegionBox::new("SHB", (2.0, 3.0), (42.0, 43.0)).named("Shabelle"),
        ])
    }
}

impl RegionTable {
    pub fn new(rows: Vec<RegionBox>) -> Self {
        RegionTable { rows }
    }

    pub fn rows(&self) -> &[RegionBox] {
        &self.rows
    }

    /// Append a row; it is consulted after every existing row.
    pub fn push(&mut self, row: RegionBox) {
        self.rows.push(row);
    }

    /// Load a table from a JSON array of [`RegionBox`] objects.
    ///
    /// Rows with an empty code or a code containing `:` are rejected with
    /// [`GeoError::InvalidData`], since they cannot appear in a location code.
    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table: RegionTable = serde_json::from_reader(std::io::BufReader::new(file))?;
        if let Some((i, row)) = table
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.code.trim().is_empty() || row.code.contains(PREFIX_SEPARATOR))
        {
            return Err(GeoError::InvalidData(format!(
                "{}: row {} has unusable region code '{}'",
                path.display(),
                i + 1,
                row.code
            )));
        }
        Ok(table)
    }
}

/// Maps coordinates to a region code through an injected [`RegionTable`].
#[derive(Debug, Clone, Default)]
pub struct RegionLocator {
    table: RegionTable,
}

impl RegionLocator {
    pub fn new(table: RegionTable) -> Self {
        RegionLocator { table }
    }

    /// Code of the first row whose box contains the point, if any.
    pub fn locate(&self, lat: f64, lon: f64) -> Option<&str> {
        self.table
            .rows
            .iter()
            .find(|row| row.contains(lat, lon))
            .map(|row| row.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mogadishu_is_banadir() {
        let locator = RegionLocator::default();
        assert_eq!(locator.locate(2.0469, 45.3182), Some("BNR"));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let locator = RegionLocator::default();
        assert_eq!(locator.locate(1.8, 45.0), Some("BNR"));
        assert_eq!(locator.locate(2.2, 45.6), Some("BNR"));
        assert_eq!(locator.locate(10.0, 43.0), Some("HRS"));
    }

    #[test]
    fn outside_every_box_is_none() {
        let locator = RegionLocator::default();
        assert_eq!(locator.locate(0.0, 0.0), None);
        assert_eq!(locator.locate(5.0, 47.0), None);
    }

    #[test]
    fn overlap_resolved_by_row_order() {
        let table = RegionTable::new(vec![
            RegionBox::new("AAA", (0.0, 2.0), (0.0, 2.0)),
            RegionBox::new("BBB", (1.0, 3.0), (1.0, 3.0)),
        ]);
        let locator = RegionLocator::new(table);
        assert_eq!(locator.locate(1.5, 1.5), Some("AAA"));
        assert_eq!(locator.locate(2.5, 2.5), Some("BBB"));
    }

    #[test]
    fn same_input_same_answer() {
        let locator = RegionLocator::default();
        for (lat, lon) in [(2.0, 42.5), (9.5, 44.0), (-3.0, 10.0)] {
            assert_eq!(locator.locate(lat, lon), locator.locate(lat, lon));
        }
    }

    #[test]
    fn extending_the_table_adds_coverage() {
        let mut table = RegionTable::default();
        table.push(RegionBox::new("BRI", (9.0, 12.0), (48.0, 51.5)).named("Bari"));
        let locator = RegionLocator::new(table);
        assert_eq!(locator.locate(11.28, 49.18), Some("BRI"));
        assert_eq!(locator.locate(2.0469, 45.3182), Some("BNR"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn table_is_a_plain_json_array() {
        let table: RegionTable = serde_json::from_str(
            r#"[{"code": "GED", "lat_min": 1.0, "lat_max": 4.3,
                 "lon_min": 40.9, "lon_max": 42.9}]"#,
        )
        .unwrap();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(RegionLocator::new(table).locate(3.5, 42.0), Some("GED"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_table_rejects_separator_in_code() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(
            &good,
            r#"[{"code": "BNR", "lat_min": 1.8, "lat_max": 2.2,
                 "lon_min": 45.0, "lon_max": 45.6}]"#,
        )
        .unwrap();
        assert_eq!(RegionTable::from_json_path(&good).unwrap().rows().len(), 1);

        let bad = dir.path().join("bad.json");
        std::fs::write(
            &bad,
            r#"[{"code": "B:X", "lat_min": 1.8, "lat_max": 2.2,
                 "lon_min": 45.0, "lon_max": 45.6}]"#,
        )
        .unwrap();
        assert!(matches!(
            RegionTable::from_json_path(&bad),
            Err(GeoError::InvalidData(_))
        ));
    }
}
