// crates/somgeo-core/src/model/mod.rs
pub mod convert;
pub mod domain;
mod source;

pub use domain::{Airport, Checkpoint, District, GeoDb, Port, Region, Road};

use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "somgeo.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "somgeo.comp.bin";

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    #[inline]
    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// Convenient alias for the default backend.
pub type DefaultGeoDb = GeoDb<DefaultBackend>;
/// Convenient alias used in demos.
pub type StandardBackend = DefaultBackend;
