//! Umbrella crate for the somgeo workspace.
//!
//! Re-exports [`somgeo_core`] so the demos can `use somgeo_rs::prelude::*`.

pub use somgeo_core::*;

pub mod prelude {
    pub use somgeo_core::{
        olc, DefaultGeoDb, GeoApi, GeoDb, GeoError, LocationCodeComposer, NameMatch, PlaceKind,
        RegionBox, RegionLocator, RegionTable, Result, StandardBackend,
    };
}
