// crates/somgeo-core/src/model/domain.rs
use crate::common::{Centroid, DbStats};
use crate::text::upper_prefix;
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The read-only dataset snapshot.
///
/// Every collection keeps the order of the source file; that order is the
/// "retrieval order" search and listings report results in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeoDb<B: GeoBackend> {
    pub regions: Vec<Region<B>>,
    pub districts: Vec<District<B>>,
    pub roads: Vec<Road<B>>,
    pub airports: Vec<Airport<B>>,
    pub ports: Vec<Port<B>>,
    pub checkpoints: Vec<Checkpoint<B>>,
}

/// A first-level administrative region, e.g. Banadir (`SOM-BNR`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    /// Stable external identifier, `SOM-XXX`.
    pub code: B::Str,
    pub population: Option<u64>,
    pub area_km2: Option<B::Float>,
}

/// A district. Linked to its region by `region_name`, not by id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct District<B: GeoBackend> {
    pub id: u32,
    /// Resolved at load time from `region_name`; `None` if no region has that name.
    pub region_id: Option<u32>,
    pub name: B::Str,
    /// `SOM-XXX-YYY` when the source provides one.
    pub code: Option<B::Str>,
    pub region_name: B::Str,
    pub population: Option<u64>,
    pub aliases: Vec<String>,
    pub centroid_lat: Option<B::Float>,
    pub centroid_lon: Option<B::Float>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Road<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    /// primary, secondary, ...
    #[serde(rename = "type")]
    pub kind: B::Str,
    pub length_km: Option<B::Float>,
    pub condition: Option<B::Str>,
    pub surface: Option<B::Str>,
    /// `[lon, lat]` pairs.
    pub geometry: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Airport<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    pub iata_code: Option<B::Str>,
    pub icao_code: Option<B::Str>,
    /// `international` or `domestic`, stored lower-case.
    #[serde(rename = "type")]
    pub kind: B::Str,
    pub latitude: B::Float,
    pub longitude: B::Float,
    pub region: B::Str,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Port<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    #[serde(rename = "type")]
    pub kind: B::Str,
    pub latitude: B::Float,
    pub longitude: B::Float,
    pub region: B::Str,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    #[serde(rename = "type")]
    pub kind: B::Str,
    pub latitude: B::Float,
    pub longitude: B::Float,
    pub region: B::Str,
    pub status: B::Str,
}

impl<B: GeoBackend> GeoDb<B> {
    /// An empty database; mostly useful for tests and incremental building.
    pub fn empty() -> Self {
        GeoDb {
            regions: Vec::new(),
            districts: Vec::new(),
            roads: Vec::new(),
            airports: Vec::new(),
            ports: Vec::new(),
            checkpoints: Vec::new(),
        }
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            regions: self.regions.len(),
            districts: self.districts.len(),
            roads: self.roads.len(),
            airports: self.airports.len(),
            ports: self.ports.len(),
            checkpoints: self.checkpoints.len(),
        }
    }

    pub fn regions(&self) -> &[Region<B>] {
        &self.regions
    }

    pub fn districts(&self) -> &[District<B>] {
        &self.districts
    }

    /// Find a region by its `SOM-XXX` code, case-insensitive.
    pub fn find_region_by_code(&self, code: &str) -> Option<&Region<B>> {
        let code = code.trim();
        self.regions
            .iter()
            .find(|r| r.code.as_ref().eq_ignore_ascii_case(code))
    }

    /// Find a region by display name (case-insensitive, exact).
    pub fn find_region_by_name(&self, name: &str) -> Option<&Region<B>> {
        self.regions.iter().find(|r| r.is_named(name))
    }

    /// Districts whose `region_name` equals the region's `name`.
    pub fn districts_in_region<'a>(
        &'a self,
        region: &'a Region<B>,
    ) -> impl Iterator<Item = &'a District<B>> + 'a {
        self.districts
            .iter()
            .filter(move |d| d.region_name.as_ref() == region.name.as_ref())
    }
}

impl<B: GeoBackend> Region<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    pub fn area_km2(&self) -> Option<f64> {
        self.area_km2.map(B::float_to_f64)
    }
}

impl<B: GeoBackend> NameMatch for Region<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}

impl<B: GeoBackend> District<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn region_name(&self) -> &str {
        self.region_name.as_ref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_ref().map(|s| s.as_ref()).filter(|s| !s.is_empty())
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn centroid(&self) -> Option<Centroid> {
        match (self.centroid_lat, self.centroid_lon) {
            (Some(lat), Some(lon)) => Some(Centroid {
                lat: B::float_to_f64(lat),
                lon: B::float_to_f64(lon),
            }),
            _ => None,
        }
    }

    /// The identity used to deduplicate search results.
    ///
    /// The district's own code when present, otherwise
    /// `SOM-<first 3 of region_name>-<first 3 of name>`, upper-cased.
    pub fn search_id(&self) -> String {
        match self.code() {
            Some(code) => code.to_string(),
            None => format!(
                "SOM-{}-{}",
                upper_prefix(self.region_name(), 3),
                upper_prefix(self.name(), 3)
            ),
        }
    }
}

impl<B: GeoBackend> NameMatch for District<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}

impl<B: GeoBackend> Airport<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn kind(&self) -> &str {
        self.kind.as_ref()
    }
}

impl<B: GeoBackend> fmt::Display for Region<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {} ({})", self.id, self.name(), self.code())
    }
}

impl<B: GeoBackend> fmt::Display for District<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {}, {}", self.id, self.name(), self.region_name())?;
        if !self.aliases.is_empty() {
            write!(f, " [{}]", self.aliases.join(", "))?;
        }
        Ok(())
    }
}

impl<B: GeoBackend> fmt::Display for Road<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {} ({})", self.id, self.name.as_ref(), self.kind.as_ref())?;
        if let Some(km) = self.length_km {
            write!(f, " {:.0} km", B::float_to_f64(km))?;
        }
        Ok(())
    }
}

impl<B: GeoBackend> fmt::Display for Airport<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {} ({})", self.id, self.name(), self.kind())?;
        if let Some(iata) = &self.iata_code {
            write!(f, " {}", iata.as_ref())?;
        }
        Ok(())
    }
}

impl<B: GeoBackend> fmt::Display for Port<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {}, {}", self.id, self.name.as_ref(), self.region.as_ref())
    }
}

impl<B: GeoBackend> fmt::Display for Checkpoint<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}  {}, {} ({})",
            self.id,
            self.name.as_ref(),
            self.region.as_ref(),
            self.status.as_ref()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultBackend;

    fn district(name: &str, region: &str, code: Option<&str>) -> District<DefaultBackend> {
        District {
            id: 1,
            region_id: None,
            name: name.to_string(),
            code: code.map(str::to_string),
            region_name: region.to_string(),
            population: None,
            aliases: Vec::new(),
            centroid_lat: Some(2.04),
            centroid_lon: None,
        }
    }

    #[test]
    fn search_id_prefers_code() {
        let d = district("Mogadishu", "Banadir", Some("SOM-BNR-MOG"));
        assert_eq!(d.search_id(), "SOM-BNR-MOG");
    }

    #[test]
    fn search_id_falls_back_to_name_prefixes() {
        let d = district("Beledweyne", "Hiiraan", None);
        assert_eq!(d.search_id(), "SOM-HII-BEL");

        let empty_code = district("Xudur", "Bakool", Some(""));
        assert_eq!(empty_code.search_id(), "SOM-BAK-XUD");
    }

    #[test]
    fn centroid_needs_both_coordinates() {
        let d = district("Jowhar", "Middle Shabelle", None);
        assert!(d.centroid().is_none());
    }

    #[test]
    fn display_lists_aliases() {
        let mut d = district("Mogadishu", "Banadir", None);
        d.aliases = vec!["Xamar".into(), "Muqdisho".into()];
        assert_eq!(d.to_string(), "  1  Mogadishu, Banadir [Xamar, Muqdisho]");
    }

    #[test]
    fn region_lookup_by_name_and_code() {
        let mut db: GeoDb<DefaultBackend> = GeoDb::empty();
        db.regions.push(Region {
            id: 4,
            name: "Woqooyi Galbeed".into(),
            code: "SOM-WOG".into(),
            population: None,
            area_km2: None,
        });
        assert_eq!(db.find_region_by_name("woqooyi galbeed").map(|r| r.id), Some(4));
        assert!(db.find_region_by_name("Woqooyi").is_none());
        assert_eq!(db.find_region_by_code(" som-wog ").map(|r| r.id), Some(4));
    }
}
