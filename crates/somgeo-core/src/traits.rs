// crates/somgeo-core/src/traits.rs
use crate::model::{District, Region};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the database.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally without changing the public API of accessors
/// that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so databases can be cached
/// via bincode.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get case-insensitive helpers built on
/// [`fold_key`].
///
/// # Examples
/// ```rust
/// use somgeo_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Kismaayo").is_named("KISMAAYO"));
/// assert!(Place("Baydhabo").name_contains("dhab"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive equality on the folded name.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Case-insensitive substring match on the folded name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// Read-only dataset accessor consumed by the place search engine.
///
/// `q` is always an already folded query (see [`fold_key`]). Implementations
/// return candidates in their natural retrieval order and stop after `limit`
/// rows. A storage-backed implementation would push the predicate down as a
/// `LIKE`/`ILIKE` filter; the in-memory [`crate::GeoDb`] scans its vectors.
pub trait PlaceSource<B: GeoBackend> {
    /// Districts whose name, region name or any alias contains `q`.
    fn districts_matching(&self, q: &str, limit: usize) -> Vec<&District<B>>;

    /// Regions whose name contains `q`.
    fn regions_matching(&self, q: &str, limit: usize) -> Vec<&Region<B>>;
}
