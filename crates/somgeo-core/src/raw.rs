// crates/somgeo-core/src/raw.rs
//! Raw input records as they appear in a source JSON dataset.
//!
//! Different upstream exports (GADM, HDX, hand-curated files) spell the same
//! field differently. Every accepted spelling is listed explicitly as a serde
//! alias here; nothing inspects keys at runtime. An object carrying two
//! spellings of the same field is rejected as a duplicate.
//!
//! NOTE: these types mirror external datasets and are not part of the
//! stable public API.
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DatasetRaw {
    #[serde(default)]
    pub regions: Vec<RegionRaw>,
    #[serde(default)]
    pub districts: Vec<DistrictRaw>,
    #[serde(default)]
    pub roads: Vec<RoadRaw>,
    #[serde(default)]
    pub airports: Vec<AirportRaw>,
    #[serde(default)]
    pub ports: Vec<PortRaw>,
    #[serde(default)]
    pub checkpoints: Vec<CheckpointRaw>,
}

#[derive(Debug, Deserialize)]
pub struct RegionRaw {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(
        default,
        alias = "NAME_1",
        alias = "VARNAME_1",
        alias = "admin1Name",
        alias = "ADMIN1"
    )]
    pub name: Option<String>,
    #[serde(default, alias = "CODE", alias = "admin1Pcode", alias = "pcode", alias = "PCODE")]
    pub code: Option<String>,
    #[serde(default, alias = "Population", alias = "POPULATION", alias = "pop")]
    pub population: Option<u64>,
    #[serde(default, alias = "area", alias = "AREA", alias = "areaKm2")]
    pub area_km2: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CentroidRaw {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "lng", alias = "longitude")]
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct DistrictRaw {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default, alias = "NAME_2", alias = "admin2Name", alias = "ADMIN2")]
    pub name: Option<String>,
    #[serde(default, alias = "admin2Pcode", alias = "pcode")]
    pub code: Option<String>,
    #[serde(default, alias = "region", alias = "NAME_1", alias = "admin1Name")]
    pub region_name: Option<String>,
    #[serde(default, alias = "Population", alias = "pop")]
    pub population: Option<u64>,
    /// `null` and a missing key both mean "no aliases".
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
    #[serde(default)]
    pub centroid: Option<CentroidRaw>,
}

#[derive(Debug, Deserialize)]
pub struct RoadRaw {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(rename = "type", alias = "highway")]
    pub kind: String,
    #[serde(default)]
    pub length_km: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub surface: Option<String>,
    /// `[[lon, lat], ...]`
    #[serde(default)]
    pub geometry: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Deserialize)]
pub struct AirportRaw {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default, alias = "iata")]
    pub iata_code: Option<String>,
    #[serde(default, alias = "icao")]
    pub icao_code: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Deserialize)]
pub struct PortRaw {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckpointRaw {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub region: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "active".to_string()
}
