// crates/somgeo-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

/// Opens a source file, transparently gunzipping `*.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let reader = open_file(path)?;

    if has_extension(path, "gz") {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(format!(
                "{} is gzipped but 'compact' is disabled",
                path.display()
            )));
        }
    }
    Ok(Box::new(reader))
}

/// Opens a binary cache; gzip is decided by the `compact` feature, matching
/// how the cache was written.
pub fn open_cache_stream(path: &Path) -> Result<Box<dyn Read>> {
    let reader = open_file(path)?;

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}

/// `data/somalia.json` -> `data/somalia.json.<suffix>`
pub fn get_cache_path(source_path: &Path, suffix: &str) -> Result<PathBuf> {
    let filename = source_path
        .file_name()
        .ok_or_else(|| {
            GeoError::InvalidData(format!("{} has no file name", source_path.display()))
        })?
        .to_string_lossy();
    Ok(source_path.with_file_name(format!("{filename}.{suffix}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("data/somalia.json"), "somgeo.bin").unwrap();
        assert_eq!(p, PathBuf::from("data/somalia.json.somgeo.bin"));
        assert!(get_cache_path(Path::new("/"), "x").is_err());
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(has_extension(Path::new("a/b.JSON.GZ"), "gz"));
        assert!(!has_extension(Path::new("a/b.json"), "gz"));
    }

    #[test]
    fn missing_file_is_not_found() {
        assert!(matches!(
            open_stream(Path::new("/definitely/not/here.json")),
            Err(GeoError::NotFound(_))
        ));
    }
}
