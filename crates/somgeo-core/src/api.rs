// crates/somgeo-core/src/api.rs

//! Response views and the request-level facade.
//!
//! These are the shapes a thin HTTP layer serializes field for field:
//!
//! | call | shape |
//! |---|---|
//! | [`GeoApi::generate_location_code`] | [`LocationCodeResponse`] |
//! | [`GeoApi::resolve_location_code`] | [`LocationCodeResponse`] |
//! | [`GeoApi::search_places`] | [`PlacesSearchResponse`] |
use crate::error::Result;
use crate::location_code::{LocationCodeComposer, ParsedLocationCode};
use crate::model::GeoDb;
use crate::search::{PlaceSearch, SearchConfig};
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

pub use crate::search::{PlaceKind, PlaceSearchResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCodeResponse {
    pub code: String,
    pub latitude_center: f64,
    pub longitude_center: f64,
    pub region_code: Option<String>,
}

impl LocationCodeResponse {
    fn from_parsed(code: String, parsed: ParsedLocationCode) -> Self {
        LocationCodeResponse {
            code,
            latitude_center: parsed.area.latitude_center,
            longitude_center: parsed.area.longitude_center,
            region_code: parsed.region_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesSearchResponse {
    pub data: Vec<PlaceSearchResult>,
    pub count: usize,
}

/// Owns the dataset snapshot plus the configured composer and search engine.
///
/// All methods take `&self`; share it behind an `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct GeoApi<B: GeoBackend> {
    db: GeoDb<B>,
    composer: LocationCodeComposer,
    search: PlaceSearch,
}

impl<B: GeoBackend> GeoApi<B> {
    pub fn new(db: GeoDb<B>) -> Self {
        GeoApi {
            db,
            composer: LocationCodeComposer::default(),
            search: PlaceSearch::default(),
        }
    }

    pub fn with_composer(mut self, composer: LocationCodeComposer) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.search = PlaceSearch::new(config);
        self
    }

    pub fn db(&self) -> &GeoDb<B> {
        &self.db
    }

    pub fn composer(&self) -> &LocationCodeComposer {
        &self.composer
    }

    /// `GET /locationcode/generate?lat&lon`
    ///
    /// The center is read back from the composed code, so it is the center of
    /// the cell, not the input point.
    pub fn generate_location_code(&self, lat: f64, lon: f64) -> Result<LocationCodeResponse> {
        self.generate_location_code_in(lat, lon, None)
    }

    /// Like [`generate_location_code`](Self::generate_location_code), but a
    /// supplied `region` is embedded verbatim instead of being inferred.
    pub fn generate_location_code_in(
        &self,
        lat: f64,
        lon: f64,
        region: Option<&str>,
    ) -> Result<LocationCodeResponse> {
        let code = self.composer.compose(lat, lon, region)?;
        let parsed = self.composer.parse(&code)?;
        Ok(LocationCodeResponse::from_parsed(code, parsed))
    }

    /// `GET /locationcode/resolve?code`; echoes the code as given.
    pub fn resolve_location_code(&self, code: &str) -> Result<LocationCodeResponse> {
        let parsed = self.composer.parse(code)?;
        Ok(LocationCodeResponse::from_parsed(code.to_string(), parsed))
    }

    /// `GET /places/search?name&limit`
    pub fn search_places(&self, name: &str, limit: usize) -> Result<PlacesSearchResponse> {
        let data = self.search.search(&self.db, name, limit)?;
        Ok(PlacesSearchResponse {
            count: data.len(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use crate::model::{DefaultBackend, District, Region};

    fn api() -> GeoApi<DefaultBackend> {
        let mut db = GeoDb::empty();
        db.regions.push(Region {
            id: 1,
            name: "Banadir".into(),
            code: "SOM-BNR".into(),
            population: Some(2_500_000),
            area_km2: None,
        });
        db.districts.push(District {
            id: 1,
            region_id: Some(1),
            name: "Mogadishu".into(),
            code: Some("SOM-BNR-MOG".into()),
            region_name: "Banadir".into(),
            population: None,
            aliases: vec!["Xamar".into()],
            centroid_lat: None,
            centroid_lon: None,
        });
        GeoApi::new(db)
    }

    #[test]
    fn generate_includes_inferred_region() {
        let resp = api().generate_location_code(2.0469, 45.3182).unwrap();
        assert_eq!(resp.code, "SOM-BNR:6HJ728W9+Q7");
        assert_eq!(resp.region_code.as_deref(), Some("SOM-BNR"));
        assert!((resp.latitude_center - 2.0469).abs() < 0.000125);
        assert!((resp.longitude_center - 45.3182).abs() < 0.000125);
    }

    #[test]
    fn generate_outside_table_has_null_region() {
        let resp = api().generate_location_code(-1.0, 10.0).unwrap();
        assert_eq!(resp.region_code, None);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["region_code"].is_null());
    }

    #[test]
    fn generate_rejects_bad_coordinates() {
        let err = api().generate_location_code(91.0, 0.0).unwrap_err();
        assert!(matches!(err, GeoError::InvalidArgument(_)));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn generate_with_supplied_region() {
        let resp = api()
            .generate_location_code_in(2.0469, 45.3182, Some("SOM-HIR"))
            .unwrap();
        assert!(resp.code.starts_with("SOM-HIR:"));
        assert_eq!(resp.region_code.as_deref(), Some("SOM-HIR"));
        assert_eq!(resp, api().resolve_location_code(&resp.code).unwrap());

        let err = api().generate_location_code_in(2.0, 45.0, Some("A:B")).unwrap_err();
        assert!(matches!(err, GeoError::InvalidArgument(_)));
    }

    #[test]
    fn resolve_echoes_code() {
        let resp = api().resolve_location_code("SOM-BNR:6HJ728W9+Q7").unwrap();
        assert_eq!(resp.code, "SOM-BNR:6HJ728W9+Q7");
        assert_eq!(resp.region_code.as_deref(), Some("SOM-BNR"));

        let err = api().resolve_location_code("SOM-BNR:zz").unwrap_err();
        assert!(matches!(err, GeoError::InvalidCode(_)));
    }

    #[test]
    fn search_response_counts_data() {
        let resp = api().search_places("ban", 10).unwrap();
        assert_eq!(resp.count, 2);
        assert_eq!(resp.data[0].kind, PlaceKind::District);
        assert_eq!(resp.data[1].kind, PlaceKind::Region);
        assert_eq!(resp.data[1].population, Some(2_500_000));
    }

    #[test]
    fn search_config_controls_candidate_window() {
        let mut api = api();
        let mogadishu = api.db.districts[0].clone();
        api.db.districts.push(mogadishu);
        api.db.districts.push(District {
            id: 3,
            region_id: Some(1),
            name: "Hodan".into(),
            code: Some("SOM-BNR-HOD".into()),
            region_name: "Banadir".into(),
            population: None,
            aliases: Vec::new(),
            centroid_lat: None,
            centroid_lon: None,
        });

        let ids = |api: &GeoApi<DefaultBackend>| -> Vec<String> {
            let resp = api.search_places("banadir", 2).unwrap();
            resp.data.into_iter().map(|h| h.id).collect()
        };
        assert_eq!(ids(&api), vec!["SOM-BNR-MOG", "SOM-BNR-HOD"]);

        let narrow = api.with_search_config(SearchConfig { overfetch_factor: 1 });
        assert_eq!(ids(&narrow), vec!["SOM-BNR-MOG", "SOM-BNR"]);
    }
}
