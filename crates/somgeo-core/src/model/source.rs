// crates/somgeo-core/src/model/source.rs
use super::domain::{District, GeoDb, Region};
use crate::text::contains_folded;
use crate::traits::{GeoBackend, PlaceSource};

impl<B: GeoBackend> PlaceSource<B> for GeoDb<B> {
    fn districts_matching(&self, q: &str, limit: usize) -> Vec<&District<B>> {
        self.districts
            .iter()
            .filter(|d| district_matches(d, q))
            .take(limit)
            .collect()
    }

    fn regions_matching(&self, q: &str, limit: usize) -> Vec<&Region<B>> {
        self.regions
            .iter()
            .filter(|r| contains_folded(r.name.as_ref(), q))
            .take(limit)
            .collect()
    }
}

/// Name, region name, then aliases; `q` must already be folded.
pub(crate) fn district_matches<B: GeoBackend>(d: &District<B>, q: &str) -> bool {
    contains_folded(d.name.as_ref(), q)
        || contains_folded(d.region_name.as_ref(), q)
        || d.aliases.iter().any(|a| contains_folded(a, q))
}
