// crates/somgeo-core/src/search.rs

//! # Place Search Engine
//!
//! Free-text lookup over districts and regions. Matching is a case-insensitive
//! substring test (see [`fold_key`]) against a district's name, its region's
//! name and every alias. Results are districts first, then regions, each in
//! dataset order, deduplicated by their computed id.
use crate::common::Centroid;
use crate::error::{GeoError, Result};
use crate::model::{District, Region};
use crate::text::{contains_folded, fold_key};
use crate::traits::{GeoBackend, PlaceSource};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    District,
    Region,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlaceKind::District => "district",
            PlaceKind::Region => "region",
        })
    }
}

/// One search hit. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSearchResult {
    pub id: String,
    pub name: String,
    /// Region name; for a region hit this is its own name.
    pub region: String,
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Centroid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl PlaceSearchResult {
    pub fn from_district<B: GeoBackend>(d: &District<B>) -> Self {
        PlaceSearchResult {
            id: d.search_id(),
            name: d.name().to_string(),
            region: d.region_name().to_string(),
            kind: PlaceKind::District,
            aliases: (!d.aliases.is_empty()).then(|| d.aliases.clone()),
            centroid: d.centroid(),
            population: d.population,
        }
    }

    pub fn from_region<B: GeoBackend>(r: &Region<B>) -> Self {
        PlaceSearchResult {
            id: r.code().to_string(),
            name: r.name().to_string(),
            region: r.name().to_string(),
            kind: PlaceKind::Region,
            aliases: None,
            centroid: None,
            population: r.population,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// District candidates fetched per requested result (`limit * factor`).
    ///
    /// Candidates dropped as duplicates still count against this window, so a
    /// run of duplicate ids can push a later, distinct district out of the
    /// results. Regions then fill the remaining slots.
    pub overfetch_factor: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { overfetch_factor: 2 }
    }
}

/// Stateless search over any [`PlaceSource`].
#[derive(Debug, Clone, Default)]
pub struct PlaceSearch {
    config: SearchConfig,
}

impl PlaceSearch {
    pub fn new(config: SearchConfig) -> Self {
        PlaceSearch { config }
    }

    /// Run a query. `limit` must be at least 1.
    ///
    /// An empty query matches every place.
    pub fn search<B, S>(
        &self,
        source: &S,
        query: &str,
        limit: usize,
    ) -> Result<Vec<PlaceSearchResult>>
    where
        B: GeoBackend,
        S: PlaceSource<B> + ?Sized,
    {
        if limit == 0 {
            return Err(GeoError::InvalidArgument(
                "search limit must be at least 1".to_string(),
            ));
        }
        let q = fold_key(query);
        let mut results = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        let fetch = limit.saturating_mul(self.config.overfetch_factor.max(1));
        for district in source.districts_matching(&q, fetch) {
            // The source may only filter on name/region; re-check with aliases.
            let matches = contains_folded(district.name(), &q)
                || contains_folded(district.region_name(), &q)
                || district.aliases.iter().any(|a| contains_folded(a, &q));
            if !matches {
                continue;
            }
            let id = district.search_id();
            if seen.contains(&id) {
                continue;
            }
            seen.insert(id);
            results.push(PlaceSearchResult::from_district(district));
            if results.len() >= limit {
                return Ok(results);
            }
        }

        for region in source.regions_matching(&q, limit - results.len()) {
            if seen.insert(region.code().to_string()) {
                results.push(PlaceSearchResult::from_region(region));
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DefaultBackend, GeoDb};

    fn region(id: u32, name: &str, code: &str) -> Region<DefaultBackend> {
        Region {
            id,
            name: name.into(),
            code: code.into(),
            population: None,
            area_km2: None,
        }
    }

    fn district(
        id: u32,
        name: &str,
        region: &str,
        code: Option<&str>,
        aliases: &[&str],
    ) -> District<DefaultBackend> {
        District {
            id,
            region_id: None,
            name: name.into(),
            code: code.map(Into::into),
            region_name: region.into(),
            population: Some(1000 * id as u64),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            centroid_lat: Some(2.0),
            centroid_lon: Some(45.0),
        }
    }

    fn db() -> GeoDb<DefaultBackend> {
        let mut db = GeoDb::empty();
        db.regions = vec![
            region(1, "Banadir", "SOM-BNR"),
            region(2, "Hiiraan", "SOM-HIR"),
            region(3, "Lower Shabelle", "SOM-SHL"),
            region(4, "Middle Shabelle", "SOM-SHM"),
        ];
        db.districts = vec![
            district(1, "Mogadishu", "Banadir", Some("SOM-BNR-MOG"), &["Xamar", "Muqdisho"]),
            district(2, "Beledweyne", "Hiiraan", Some("SOM-HIR-BEL"), &["Beletweyne"]),
            district(3, "Marka", "Lower Shabelle", None, &["Merca"]),
            district(4, "Jowhar", "Middle Shabelle", None, &[]),
            district(5, "Marka", "Lower Shabelle", None, &[]),
        ];
        db
    }

    #[test]
    fn alias_only_match() {
        let hits = PlaceSearch::default().search(&db(), "xamar", 5).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "SOM-BNR-MOG");
        assert_eq!(hits[0].name, "Mogadishu");
        assert_eq!(hits[0].region, "Banadir");
        assert_eq!(hits[0].kind, PlaceKind::District);
    }

    #[test]
    fn alias_spelling_variant() {
        let hits = PlaceSearch::default().search(&db(), "beletweyne", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Beledweyne");
    }

    #[test]
    fn dedups_by_computed_id() {
        let hits = PlaceSearch::default().search(&db(), "marka", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "SOM-LOW-MAR");
        assert_eq!(hits[0].population, Some(3000));
    }

    #[test]
    fn districts_then_regions() {
        let hits = PlaceSearch::default().search(&db(), "shabelle", 10).unwrap();
        let kinds: Vec<_> = hits.iter().map(|h| (h.kind, h.id.as_str())).collect();
        assert_eq!(
            kinds,
            vec![
                (PlaceKind::District, "SOM-LOW-MAR"),
                (PlaceKind::District, "SOM-MID-JOW"),
                (PlaceKind::Region, "SOM-SHL"),
                (PlaceKind::Region, "SOM-SHM"),
            ]
        );
        assert_eq!(hits[2].centroid, None);
        assert_eq!(hits[2].region, "Lower Shabelle");
    }

    #[test]
    fn limit_is_respected() {
        let search = PlaceSearch::default();
        for limit in 1..=6 {
            let hits = search.search(&db(), "", limit).unwrap();
            assert!(hits.len() <= limit);
        }
        let first = search.search(&db(), "a", 1).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, "SOM-BNR-MOG");
    }

    #[test]
    fn empty_query_matches_everything() {
        let hits = PlaceSearch::default().search(&db(), "", 100).unwrap();
        // five districts minus one duplicate, plus four regions
        assert_eq!(hits.len(), 8);
    }

    #[test]
    fn case_insensitive() {
        let hits = PlaceSearch::default().search(&db(), "JOWHAR", 3).unwrap();
        assert_eq!(hits[0].name, "Jowhar");
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(matches!(
            PlaceSearch::default().search(&db(), "x", 0),
            Err(GeoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(PlaceSearch::default()
            .search(&db(), "kismaayo", 10)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn region_code_colliding_with_district_id_is_skipped() {
        let mut db = db();
        db.districts
            .push(district(6, "Hiiraan Town", "Hiiraan", Some("SOM-HIR"), &[]));
        let hits = PlaceSearch::default().search(&db, "hiiraan", 10).unwrap();
        let ids: Vec<_> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["SOM-HIR-BEL", "SOM-HIR"]);
        assert_eq!(hits[1].kind, PlaceKind::District);
    }

    #[test]
    fn serializes_kind_as_type() {
        let hits = PlaceSearch::default().search(&db(), "xamar", 1).unwrap();
        let json = serde_json::to_value(&hits[0]).unwrap();
        assert_eq!(json["type"], "district");
        assert_eq!(json["aliases"][0], "Xamar");
        assert_eq!(json["centroid"]["lon"], 45.0);
    }

    #[test]
    fn huge_limit_returns_everything() {
        let hits = PlaceSearch::default().search(&db(), "ban", usize::MAX).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "SOM-BNR-MOG");
        assert_eq!(hits[1].id, "SOM-BNR");
    }

    fn crowded_db() -> GeoDb<DefaultBackend> {
        let mut db = GeoDb::empty();
        db.regions = vec![region(1, "Lower Shabelle", "SOM-SHL")];
        db.districts = vec![
            district(1, "Marka", "Lower Shabelle", None, &[]),
            district(2, "Marka", "Lower Shabelle", None, &[]),
            district(3, "Marka", "Lower Shabelle", None, &[]),
            district(4, "Kurtunwaarey", "Lower Shabelle", None, &[]),
        ];
        db
    }

    #[test]
    fn duplicates_use_up_the_candidate_window() {
        let narrow = PlaceSearch::new(SearchConfig { overfetch_factor: 1 });
        let ids: Vec<_> = narrow
            .search(&crowded_db(), "lower", 2)
            .unwrap()
            .into_iter()
            .map(|h| h.id)
            .collect();
        // Kurtunwaarey sits beyond the two fetched candidates.
        assert_eq!(ids, vec!["SOM-LOW-MAR", "SOM-SHL"]);

        let wide = PlaceSearch::new(SearchConfig { overfetch_factor: 2 });
        let ids: Vec<_> = wide
            .search(&crowded_db(), "lower", 2)
            .unwrap()
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec!["SOM-LOW-MAR", "SOM-LOW-KUR"]);
    }

    #[test]
    fn zero_factor_still_fetches_limit() {
        let search = PlaceSearch::new(SearchConfig { overfetch_factor: 0 });
        let hits = search.search(&db(), "jowhar", 1).unwrap();
        assert_eq!(hits[0].name, "Jowhar");
    }
}
