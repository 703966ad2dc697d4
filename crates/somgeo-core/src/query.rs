// crates/somgeo-core/src/query.rs

//! Paginated listings and id lookups over the dataset snapshot.
//!
//! Lookups that miss return [`GeoError::NotFound`] naming up to ten ids that
//! do exist, so a caller can correct a typo without a second request.
use crate::common::Page;
use crate::error::{GeoError, Result};
use crate::model::{Airport, Checkpoint, District, GeoDb, Port, Region, Road};
use crate::traits::GeoBackend;

pub const DEFAULT_PAGE_LIMIT: usize = 100;
const AVAILABLE_IDS_SHOWN: usize = 10;
const AIRPORT_TYPES: [&str; 2] = ["international", "domestic"];
const ROAD_TYPES: [&str; 2] = ["primary", "secondary"];

/// Lower-cases a type filter and checks it against `allowed`. The error
/// echoes the value as the caller sent it.
fn type_filter(kind: Option<&str>, allowed: [&str; 2]) -> Result<Option<String>> {
    let Some(raw) = kind else {
        return Ok(None);
    };
    let k = raw.to_lowercase();
    if !allowed.contains(&k.as_str()) {
        return Err(GeoError::InvalidArgument(format!(
            "Invalid type '{raw}'. Must be '{}' or '{}'",
            allowed[0], allowed[1]
        )));
    }
    Ok(Some(k))
}

fn not_found<'a, T: 'a>(
    label: &str,
    id: u32,
    rows: impl IntoIterator<Item = &'a T>,
    id_of: impl Fn(&T) -> u32,
) -> GeoError {
    let available: Vec<String> = rows
        .into_iter()
        .take(AVAILABLE_IDS_SHOWN)
        .map(|r| id_of(r).to_string())
        .collect();
    let lower = label.to_lowercase();
    GeoError::NotFound(format!(
        "{label} '{id}' not found. Available {lower} IDs: {}",
        available.join(", ")
    ))
}

impl<B: GeoBackend> GeoDb<B> {
    pub fn list_regions(&self, skip: usize, limit: usize) -> Page<&Region<B>> {
        Page::paginate(self.regions.iter(), skip, limit)
    }

    pub fn get_region(&self, id: u32) -> Result<&Region<B>> {
        self.regions
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found("Region", id, &self.regions, |r| r.id))
    }

    /// Districts, optionally restricted to an exact `region_name`.
    pub fn list_districts(
        &self,
        region: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Page<&District<B>> {
        let rows = self
            .districts
            .iter()
            .filter(|d| region.map_or(true, |r| d.region_name.as_ref() == r));
        Page::paginate(rows, skip, limit)
    }

    pub fn get_district(&self, id: u32) -> Result<&District<B>> {
        self.districts
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| not_found("District", id, &self.districts, |d| d.id))
    }

    /// Roads, optionally filtered by `primary`/`secondary` and by a
    /// substring of the road name (`district`, e.g. `Mogadishu`).
    pub fn list_roads(
        &self,
        kind: Option<&str>,
        district: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Page<&Road<B>>> {
        let kind = type_filter(kind, ROAD_TYPES)?;
        let district = district.filter(|d| !d.is_empty());
        let rows = self
            .roads
            .iter()
            .filter(|r| kind.as_deref().map_or(true, |k| r.kind.as_ref() == k))
            .filter(|r| district.map_or(true, |d| r.name.as_ref().contains(d)));
        Ok(Page::paginate(rows, skip, limit))
    }

    pub fn get_road(&self, id: u32) -> Result<&Road<B>> {
        self.roads
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found("Road", id, &self.roads, |r| r.id))
    }

    /// Airports, optionally filtered by `international` or `domestic`.
    pub fn list_airports(
        &self,
        kind: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Page<&Airport<B>>> {
        let kind = type_filter(kind, AIRPORT_TYPES)?;
        let rows = self
            .airports
            .iter()
            .filter(|a| kind.as_deref().map_or(true, |k| a.kind() == k));
        Ok(Page::paginate(rows, skip, limit))
    }

    pub fn get_airport(&self, id: u32) -> Result<&Airport<B>> {
        self.airports
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("Airport", id, &self.airports, |a| a.id))
    }

    pub fn list_ports(&self, skip: usize, limit: usize) -> Page<&Port<B>> {
        Page::paginate(self.ports.iter(), skip, limit)
    }

    pub fn get_port(&self, id: u32) -> Result<&Port<B>> {
        self.ports
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Port", id, &self.ports, |p| p.id))
    }

    pub fn list_checkpoints(&self, skip: usize, limit: usize) -> Page<&Checkpoint<B>> {
        Page::paginate(self.checkpoints.iter(), skip, limit)
    }

    pub fn get_checkpoint(&self, id: u32) -> Result<&Checkpoint<B>> {
        self.checkpoints
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("Checkpoint", id, &self.checkpoints, |c| c.id))
    }
}
