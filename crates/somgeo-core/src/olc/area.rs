// crates/somgeo-core/src/olc/area.rs
use super::{LATITUDE_MAX, LONGITUDE_MAX};
use serde::{Deserialize, Serialize};

/// The rectangle a code stands for.
///
/// Cells tile the globe with `lo` inclusive and `hi` exclusive, except at the
/// north pole where the topmost cell owns latitude 90. The center is clamped so
/// a cell touching the pole or the antimeridian never reports an out-of-range
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeArea {
    pub latitude_lo: f64,
    pub longitude_lo: f64,
    pub latitude_hi: f64,
    pub longitude_hi: f64,
    pub latitude_center: f64,
    pub longitude_center: f64,
    pub code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        CodeArea {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            latitude_center: (latitude_lo + (latitude_hi - latitude_lo) / 2.0).min(LATITUDE_MAX),
            longitude_center: (longitude_lo + (longitude_hi - longitude_lo) / 2.0)
                .min(LONGITUDE_MAX),
            code_length,
        }
    }

    /// `true` if the point falls inside the closed cell rectangle.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.latitude_lo..=self.latitude_hi).contains(&latitude)
            && (self.longitude_lo..=self.longitude_hi).contains(&longitude)
    }
}
