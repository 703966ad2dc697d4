// crates/somgeo-core/src/loader/builder.rs
use super::{bincode_options, common_io};
use crate::error::{GeoError, Result};
use crate::model::{DefaultBackend, GeoDb, CACHE_SUFFIX};
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

impl GeoDb<DefaultBackend> {
    /// **Smart Load:** Checks cache, loads binary or builds from source.
    pub(super) fn load_via_builder(path: &Path) -> Result<Self> {
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX)?;

        if Self::is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(db) => return Ok(db),
                Err(e) => tracing::warn!(
                    cache = %cache_path.display(),
                    error = %e,
                    "ignoring unreadable cache"
                ),
            }
        }

        let reader = common_io::open_stream(path)?;
        let db = Self::from_json_reader(reader)?;
        tracing::info!(source = %path.display(), stats = ?db.stats(), "built dataset from source");

        if let Err(e) = db.save_as(&cache_path) {
            tracing::warn!(cache = %cache_path.display(), error = %e, "could not write cache");
        }
        Ok(db)
    }

    /// Write a binary snapshot (gzipped when `compact` is on).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_generic(path.as_ref(), self)
    }

    fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
        let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(_) => return false,
        };
        match fs::metadata(source_path).and_then(|m| m.modified()) {
            Ok(source_time) => source_time <= cache_time,
            // Source gone but cache present: still usable.
            Err(_) => true,
        }
    }
}

/// Writes any serializable snapshot to disk.
fn write_generic<T: serde::Serialize>(path: &Path, db: &T) -> Result<()> {
    let file = File::create(path).map_err(GeoError::Io)?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        bincode_options()
            .serialize_into(&mut encoder, db)
            .map_err(GeoError::Bincode)?;
        encoder.finish()?.flush()?;
    }

    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        bincode_options()
            .serialize_into(&mut writer, db)
            .map_err(GeoError::Bincode)?;
        writer.flush()?;
    }

    tracing::debug!(path = %path.display(), "wrote binary snapshot");
    Ok(())
}
