// crates/somgeo-core/src/lib.rs

//! Somalia place data and location codes.
//!
//! - [`GeoDb`] holds regions, districts, roads, airports, ports and
//!   checkpoints loaded from JSON (optionally gzipped) or a binary snapshot.
//! - [`olc`] is a self-contained Open Location Code codec.
//! - [`LocationCodeComposer`] builds `SOM-<REGION>:<OLC>` codes, inferring
//!   the region from a [`RegionTable`] when none is given.
//! - [`PlaceSearch`] runs the district-then-region name search.
//! - [`GeoApi`] wires everything together and returns serializable views.
//!
//! ```no_run
//! use somgeo_core::{DefaultGeoDb, GeoApi};
//!
//! let db = DefaultGeoDb::load()?;
//! let api = GeoApi::new(db);
//! let hits = api.search_places("xamar", 5)?;
//! println!("{}", hits.data[0].id);
//! # Ok::<(), somgeo_core::GeoError>(())
//! ```

pub mod api;
pub mod common;
pub mod error;
pub mod loader;
pub mod location_code;
pub mod locator;
pub mod model;
pub mod olc;
pub mod query;
pub mod search;
pub mod text;
pub mod traits;
// Shared raw input shapes used by the loader
#[doc(hidden)]
pub mod raw;

pub use crate::error::{GeoError, Result};
pub use model::{
    Airport, Checkpoint, DefaultBackend, DefaultGeoDb, District, GeoDb, Port, Region, Road,
    StandardBackend,
};

pub use crate::api::{GeoApi, LocationCodeResponse, PlacesSearchResponse};
pub use crate::common::{Centroid, DbStats, Page};
pub use crate::location_code::{parse_location_code, LocationCodeComposer, ParsedLocationCode};
pub use crate::locator::{RegionBox, RegionLocator, RegionTable};
pub use crate::olc::CodeArea;
pub use crate::search::{PlaceKind, PlaceSearch, PlaceSearchResult, SearchConfig};
pub use crate::traits::{GeoBackend, NameMatch, PlaceSource};
