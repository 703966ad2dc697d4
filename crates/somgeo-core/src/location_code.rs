// crates/somgeo-core/src/location_code.rs

//! # Somalia location codes
//!
//! A Somalia location code is a standard Open Location Code optionally
//! prefixed with a region identifier and a colon:
//!
//! - `SOM-BNR:6HJ728W9+Q7` (region inferred from the bounding-box table)
//! - `SOM-HIR:6HJ728W9+Q7` (region supplied by the caller)
//! - `6HJ728W9+Q7` (no region known)
//!
//! A prefix that is present, whether supplied or inferred, is carried through
//! unchanged; the composer never replaces it.
use crate::error::{GeoError, Result};
use crate::locator::RegionLocator;
use crate::olc::{self, CodeArea};
use serde::{Deserialize, Serialize};

/// Prepended to a short region code inferred by the [`RegionLocator`].
pub const REGION_PREFIX: &str = "SOM-";
pub const PREFIX_SEPARATOR: char = ':';

/// Result of [`LocationCodeComposer::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLocationCode {
    /// The Open Location Code part, without any region prefix.
    pub code: String,
    #[serde(flatten)]
    pub area: CodeArea,
    pub region_code: Option<String>,
}

impl ParsedLocationCode {
    pub fn latitude_center(&self) -> f64 {
        self.area.latitude_center
    }

    pub fn longitude_center(&self) -> f64 {
        self.area.longitude_center
    }
}

/// Builds and parses region-prefixed codes.
#[derive(Debug, Clone)]
pub struct LocationCodeComposer {
    locator: RegionLocator,
    code_length: usize,
}

impl Default for LocationCodeComposer {
    fn default() -> Self {
        LocationCodeComposer::new(RegionLocator::default())
    }
}

impl LocationCodeComposer {
    pub fn new(locator: RegionLocator) -> Self {
        LocationCodeComposer {
            locator,
            code_length: olc::PAIR_CODE_LENGTH,
        }
    }

    /// Digits used for the Open Location Code part (default 10).
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Encode a point, prefixing the region.
    ///
    /// A non-empty `region_code` is used verbatim. Otherwise the locator is
    /// asked and a hit becomes `SOM-<code>`. With no hit the bare code is
    /// returned.
    ///
    /// A supplied region containing `:` is rejected with
    /// [`GeoError::InvalidArgument`]; a table row containing one yields
    /// [`GeoError::InvalidData`]. Either would produce a code `parse` refuses.
    ///
    /// ```rust
    /// use somgeo_core::location_code::LocationCodeComposer;
    ///
    /// let composer = LocationCodeComposer::default();
    /// let code = composer.compose(2.0469, 45.3182, None).unwrap();
    /// assert!(code.starts_with("SOM-BNR:"));
    /// ```
    pub fn compose(&self, lat: f64, lon: f64, region_code: Option<&str>) -> Result<String> {
        let base = olc::encode_with_length(lat, lon, self.code_length)?;

        if let Some(region) = region_code.map(str::trim).filter(|r| !r.is_empty()) {
            if region.contains(PREFIX_SEPARATOR) {
                return Err(GeoError::InvalidArgument(format!(
                    "region code '{region}' must not contain '{PREFIX_SEPARATOR}'"
                )));
            }
            return Ok(format!("{region}{PREFIX_SEPARATOR}{base}"));
        }
        match self.locator.locate(lat, lon) {
            Some(region) if region.contains(PREFIX_SEPARATOR) => Err(GeoError::InvalidData(
                format!("region table code '{region}' contains '{PREFIX_SEPARATOR}'"),
            )),
            Some(region) => Ok(format!("{REGION_PREFIX}{region}{PREFIX_SEPARATOR}{base}")),
            None => Ok(base),
        }
    }

    /// Split off an optional region prefix and decode the rest.
    pub fn parse(&self, code: &str) -> Result<ParsedLocationCode> {
        parse_location_code(code)
    }
}

/// Parse `"<REGION>:<OLC>"` or a bare `"<OLC>"`.
///
/// Fails with [`GeoError::InvalidCode`] for more than one `:`, an empty
/// prefix, or an Open Location Code part that does not decode.
pub fn parse_location_code(code: &str) -> Result<ParsedLocationCode> {
    let code = code.trim();
    let (region_code, olc_part) = match code.matches(PREFIX_SEPARATOR).count() {
        0 => (None, code),
        1 => {
            let (prefix, rest) = code
                .split_once(PREFIX_SEPARATOR)
                .ok_or_else(|| GeoError::InvalidCode(code.to_string()))?;
            let prefix = prefix.trim();
            if prefix.is_empty() {
                return Err(GeoError::InvalidCode(format!(
                    "'{code}' has an empty region prefix"
                )));
            }
            (Some(prefix.to_string()), rest.trim())
        }
        _ => {
            return Err(GeoError::InvalidCode(format!(
                "'{code}' has more than one '{PREFIX_SEPARATOR}' separator"
            )))
        }
    };

    let area = olc::decode(olc_part)?;
    Ok(ParsedLocationCode {
        code: olc_part.to_string(),
        area,
        region_code,
    })
}
