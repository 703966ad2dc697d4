// crates/somgeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary vs JSON).
//!
//! - `*.bin` paths are read as a bincode snapshot.
//! - Anything else is a JSON source (`*.gz` is gunzipped). With the
//!   `builder` feature a sibling binary cache is preferred when it is newer
//!   than the source, and rewritten when it is not.
use crate::error::{GeoError, Result};
use crate::model::{DefaultBackend, GeoDb};
use bincode::Options;
use once_cell::sync::OnceCell;
#[cfg(feature = "json")]
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;

#[cfg(feature = "builder")]
mod builder;

static GEO_DB_CACHE: OnceCell<GeoDb<DefaultBackend>> = OnceCell::new();

/// Upper bound for a binary snapshot; guards against corrupt length prefixes.
const BINARY_SIZE_LIMIT: u64 = 256 * 1024 * 1024;

pub(crate) fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(BINARY_SIZE_LIMIT)
        .allow_trailing_bytes()
}

impl GeoDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "somalia.json"
    }

    /// Load the bundled dataset once per process and hand out clones.
    pub fn load() -> Result<Self> {
        GEO_DB_CACHE
            .get_or_try_init(|| {
                let path = Self::default_data_dir().join(Self::default_dataset_filename());
                Self::load_from_path(path)
            })
            .cloned()
    }

    /// **Standard Loader:** picks the parser from the file extension.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::has_extension(path, "bin") {
            return Self::load_binary_file(path);
        }

        #[cfg(feature = "builder")]
        {
            Self::load_via_builder(path)
        }

        #[cfg(all(feature = "json", not(feature = "builder")))]
        {
            let reader = common_io::open_stream(path)?;
            Self::from_json_reader(reader)
        }

        #[cfg(not(feature = "json"))]
        {
            Err(GeoError::InvalidData(format!(
                "{} is not a binary snapshot and 'json' is disabled",
                path.display()
            )))
        }
    }

    /// Read a bincode snapshot written by [`GeoDb::save_as`].
    pub fn load_binary_file(path: &Path) -> Result<Self> {
        let reader = common_io::open_cache_stream(path)?;
        let db: Self = bincode_options()
            .deserialize_from(reader)
            .map_err(GeoError::Bincode)?;
        tracing::debug!(path = %path.display(), stats = ?db.stats(), "loaded binary snapshot");
        Ok(db)
    }

    #[cfg(feature = "json")]
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let raw: crate::raw::DatasetRaw = serde_json::from_reader(reader)?;
        Ok(crate::model::convert::from_raw(raw))
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_reader(json.as_bytes())
    }
}
