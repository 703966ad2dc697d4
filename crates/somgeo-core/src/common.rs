// crates/somgeo-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::GeoDb::stats`]; counts reflect the materialized
/// in-memory database after load-time cleanup (e.g. nameless regions dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub regions: usize,
    pub districts: usize,
    pub roads: usize,
    pub airports: usize,
    pub ports: usize,
    pub checkpoints: usize,
}

/// Representative point of a district, `{ "lat": .., "lon": .. }` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub lat: f64,
    pub lon: f64,
}

/// One page of a listing: `data` holds the rows after `skip`/`limit`,
/// `count` the total number of rows that matched before paging.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> Page<T> {
    /// Slice an already filtered sequence.
    pub fn paginate<I>(rows: I, skip: usize, limit: usize) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut count = 0;
        let mut data = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            count += 1;
            if i >= skip && data.len() < limit {
                data.push(row);
            }
        }
        Page { data, count }
    }
}
