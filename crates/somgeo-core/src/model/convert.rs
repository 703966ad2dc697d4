// crates/somgeo-core/src/model/convert.rs
use crate::model::domain::{Airport, Checkpoint, District, GeoDb, Port, Region, Road};
use crate::raw::DatasetRaw;
use crate::text::upper_prefix;
use crate::traits::GeoBackend;
use std::collections::HashMap;

/// **Standard Converter:** Raw -> GeoDb.
///
/// - Regions without a name are dropped; a missing code becomes
///   `SOM-<first three letters of the name>`.
/// - Districts without a name are dropped; `region_id` is resolved through an
///   exact `region_name` match.
/// - Ids missing from the source default to the 1-based position.
/// - Airport types are stored lower-case so filtering stays exact.
pub fn from_raw<B: GeoBackend>(raw: DatasetRaw) -> GeoDb<B> {
    let mut db: GeoDb<B> = GeoDb::empty();

    for (pos, r) in raw.regions.into_iter().enumerate() {
        let name = match r.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => {
                tracing::warn!(position = pos + 1, "skipping region with no name");
                continue;
            }
        };
        let code = r
            .code
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| format!("SOM-{}", upper_prefix(&name, 3)));

        db.regions.push(Region {
            id: r.id.unwrap_or(pos as u32 + 1),
            name: B::str_from(&name),
            code: B::str_from(&code),
            population: r.population,
            area_km2: r.area_km2.map(B::float_from),
        });
    }

    let region_ids: HashMap<&str, u32> = db
        .regions
        .iter()
        .map(|r| (r.name.as_ref(), r.id))
        .collect();
    let mut districts = Vec::with_capacity(raw.districts.len());

    for (pos, d) in raw.districts.into_iter().enumerate() {
        let name = match d.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => {
                tracing::warn!(position = pos + 1, "skipping district with no name");
                continue;
            }
        };
        let region_name = d.region_name.unwrap_or_default();

        districts.push(District {
            id: d.id.unwrap_or(pos as u32 + 1),
            region_id: region_ids.get(region_name.as_str()).copied(),
            name: B::str_from(&name),
            code: d.code.as_deref().map(B::str_from),
            region_name: B::str_from(&region_name),
            population: d.population,
            aliases: d.aliases.unwrap_or_default(),
            centroid_lat: d.centroid.map(|c| B::float_from(c.lat)),
            centroid_lon: d.centroid.map(|c| B::float_from(c.lon)),
        });
    }
    db.districts = districts;

    db.roads = raw
        .roads
        .into_iter()
        .enumerate()
        .map(|(pos, r)| Road {
            id: r.id.unwrap_or(pos as u32 + 1),
            name: B::str_from(&r.name),
            kind: B::str_from(&r.kind.to_lowercase()),
            length_km: r.length_km.map(B::float_from),
            condition: r.condition.as_deref().map(B::str_from),
            surface: r.surface.as_deref().map(B::str_from),
            geometry: r.geometry.unwrap_or_default(),
        })
        .collect();

    db.airports = raw
        .airports
        .into_iter()
        .enumerate()
        .map(|(pos, a)| Airport {
            id: a.id.unwrap_or(pos as u32 + 1),
            name: B::str_from(&a.name),
            iata_code: a.iata_code.as_deref().map(B::str_from),
            icao_code: a.icao_code.as_deref().map(B::str_from),
            kind: B::str_from(&a.kind.to_lowercase()),
            latitude: B::float_from(a.latitude),
            longitude: B::float_from(a.longitude),
            region: B::str_from(&a.region),
        })
        .collect();

    db.ports = raw
        .ports
        .into_iter()
        .enumerate()
        .map(|(pos, p)| Port {
            id: p.id.unwrap_or(pos as u32 + 1),
            name: B::str_from(&p.name),
            kind: B::str_from(&p.kind),
            latitude: B::float_from(p.latitude),
            longitude: B::float_from(p.longitude),
            region: B::str_from(&p.region),
        })
        .collect();

    db.checkpoints = raw
        .checkpoints
        .into_iter()
        .enumerate()
        .map(|(pos, c)| Checkpoint {
            id: c.id.unwrap_or(pos as u32 + 1),
            name: B::str_from(&c.name),
            kind: B::str_from(&c.kind),
            latitude: B::float_from(c.latitude),
            longitude: B::float_from(c.longitude),
            region: B::str_from(&c.region),
            status: B::str_from(&c.status),
        })
        .collect();

    db
}
