// crates/somgeo-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the dataset loader and the location/search core.
///
/// Only [`GeoError::InvalidArgument`] and [`GeoError::InvalidCode`] are raised
/// by the pure core (codec, locator, composer, search). The remaining
/// variants belong to the loader and listing layer.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Coordinates out of range, non-positive limit, unknown filter value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed Open Location Code or composite location code.
    #[error("Invalid location code: {0}")]
    InvalidCode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl GeoError {
    /// `true` for errors caused by caller input rather than by the dataset.
    pub fn is_client_error(&self) -> bool {
        matches!(self, GeoError::InvalidArgument(_) | GeoError::InvalidCode(_))
    }

    /// HTTP status a thin REST layer would answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            GeoError::InvalidArgument(_) | GeoError::InvalidCode(_) => 400,
            GeoError::NotFound(_) => 404,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
