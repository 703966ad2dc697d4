// crates/somgeo-core/src/olc/mod.rs

//! # GeoCode Codec
//!
//! Open Location Code ("plus code") encoding and decoding.
//!
//! A full code such as `6HJ728W9+Q7` names a cell on a fixed grid: the first
//! ten digits are five latitude/longitude pairs in base 20, and digits after
//! the tenth refine the cell on a 4x5 grid. Codes shorter than eight digits
//! are padded with `0` up to the `+` separator. A short code (`+2VX`,
//! `CJ+2VX`) drops leading digits and is only meaningful near a reference
//! point.
//!
//! Grammar and arithmetic match the published Open Location Code rules, so
//! codes interoperate with other encoders.
mod area;

pub use area::CodeArea;

use crate::error::{GeoError, Result};

pub const SEPARATOR: char = '+';
pub const SEPARATOR_POSITION: usize = 8;
pub const PADDING_CHARACTER: char = '0';
/// Digits in a standard 10-digit code (~14m x 14m at the equator).
pub const PAIR_CODE_LENGTH: usize = 10;
pub const MAX_DIGIT_COUNT: usize = 15;
const MIN_DIGIT_COUNT: usize = 2;
const MIN_TRIMMABLE_CODE_LEN: usize = 6;

const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";
const ENCODING_BASE: i64 = 20;

pub(crate) const LATITUDE_MAX: f64 = 90.0;
pub(crate) const LONGITUDE_MAX: f64 = 180.0;

// 20^4 and 20^3
const PAIR_FIRST_PLACE_VALUE: i64 = 160_000;
const PAIR_PRECISION: i64 = 8_000;
const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

const GRID_CODE_LENGTH: u32 = 5;
const GRID_COLUMNS: i64 = 4;
const GRID_ROWS: i64 = 5;
// 5^4 and 4^4
const GRID_LAT_FIRST_PLACE_VALUE: i64 = 625;
const GRID_LNG_FIRST_PLACE_VALUE: i64 = 256;
// PAIR_PRECISION * 5^5 and PAIR_PRECISION * 4^5
const FINAL_LAT_PRECISION: i64 = 25_000_000;
const FINAL_LNG_PRECISION: i64 = 8_192_000;

// -----------------------------------------------------------------------------
// GRAMMAR
// -----------------------------------------------------------------------------

fn digit_value(c: char) -> Option<i64> {
    let up = c.to_ascii_uppercase();
    CODE_ALPHABET
        .iter()
        .position(|&b| b as char == up)
        .map(|p| p as i64)
}

#[inline]
fn digit(v: i64) -> char {
    CODE_ALPHABET[v as usize] as char
}

/// Checks the code against the Open Location Code grammar.
///
/// Accepts both full and short codes, in any case.
pub fn is_valid(code: &str) -> bool {
    if code.len() <= 1 || !code.is_ascii() {
        return false;
    }
    let sep = match code.find(SEPARATOR) {
        Some(i) => i,
        None => return false,
    };
    if code.matches(SEPARATOR).count() > 1 {
        return false;
    }
    if sep > SEPARATOR_POSITION || sep % 2 == 1 {
        return false;
    }

    if let Some(pad) = code.find(PADDING_CHARACTER) {
        // Padding is only allowed in full codes, never first, and always in pairs
        // running up to the separator.
        if sep < SEPARATOR_POSITION || pad == 0 {
            return false;
        }
        let rpad = code.rfind(PADDING_CHARACTER).map_or(pad, |i| i + 1);
        let pads = &code[pad..rpad];
        if pads.len() % 2 == 1 || pads.chars().any(|c| c != PADDING_CHARACTER) {
            return false;
        }
        if !code.ends_with(SEPARATOR) {
            return false;
        }
    }

    // A single digit after the separator is never valid.
    if code.len() - sep - 1 == 1 {
        return false;
    }

    code.chars()
        .all(|c| c == SEPARATOR || c == PADDING_CHARACTER || digit_value(c).is_some())
}

/// Valid code with fewer than eight digits before the separator.
pub fn is_short(code: &str) -> bool {
    is_valid(code) && code.find(SEPARATOR).is_some_and(|sep| sep < SEPARATOR_POSITION)
}

/// Valid, not short, and its first pair stays inside the globe.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }
    let mut chars = code.chars();
    let first_lat = chars.next().and_then(digit_value).unwrap_or(0) * ENCODING_BASE;
    if first_lat as f64 >= LATITUDE_MAX * 2.0 {
        return false;
    }
    if let Some(first_lng) = chars.next().and_then(digit_value) {
        if (first_lng * ENCODING_BASE) as f64 >= LONGITUDE_MAX * 2.0 {
            return false;
        }
    }
    true
}

// -----------------------------------------------------------------------------
// NUMERIC HELPERS
// -----------------------------------------------------------------------------

fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

fn normalize_longitude(mut longitude: f64) -> f64 {
    while longitude < -LONGITUDE_MAX {
        longitude += LONGITUDE_MAX * 2.0;
    }
    while longitude >= LONGITUDE_MAX {
        longitude -= LONGITUDE_MAX * 2.0;
    }
    longitude
}

/// Height in degrees of a cell for the given code length.
fn compute_latitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        return (ENCODING_BASE as f64).powi(2 - (code_length / 2) as i32);
    }
    let grid_digits = (code_length - PAIR_CODE_LENGTH) as i32;
    (ENCODING_BASE as f64).powi(-3) / (GRID_ROWS as f64).powi(grid_digits)
}

fn round_to(v: f64, places: i32) -> f64 {
    let m = 10f64.powi(places);
    (v * m).round() / m
}

pub(crate) fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() || !(-LATITUDE_MAX..=LATITUDE_MAX).contains(&latitude) {
        return Err(GeoError::InvalidArgument(format!(
            "latitude {latitude} is outside [-90, 90]"
        )));
    }
    if !longitude.is_finite() || !(-LONGITUDE_MAX..=LONGITUDE_MAX).contains(&longitude) {
        return Err(GeoError::InvalidArgument(format!(
            "longitude {longitude} is outside [-180, 180]"
        )));
    }
    Ok(())
}

fn validate_length(code_length: usize) -> Result<()> {
    if code_length < MIN_DIGIT_COUNT
        || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Err(GeoError::InvalidArgument(format!(
            "invalid Open Location Code length {code_length}"
        )));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// ENCODE / DECODE
// -----------------------------------------------------------------------------

/// Encode a point as a standard 10-digit code.
///
/// ```rust
/// use somgeo_core::olc;
///
/// assert_eq!(olc::encode(20.3700625, 2.7821875).unwrap(), "7FG49QCJ+2V");
/// assert!(olc::encode(91.0, 0.0).is_err());
/// ```
pub fn encode(latitude: f64, longitude: f64) -> Result<String> {
    encode_with_length(latitude, longitude, PAIR_CODE_LENGTH)
}

/// Encode a point with an explicit number of digits.
///
/// Lengths below 10 must be even; lengths above 15 are capped at 15.
pub fn encode_with_length(latitude: f64, longitude: f64, code_length: usize) -> Result<String> {
    validate_coordinates(latitude, longitude)?;
    validate_length(code_length)?;
    Ok(encode_unchecked(latitude, longitude, code_length))
}

/// Encoding core. Clips latitude and wraps longitude instead of rejecting;
/// the length must already be valid.
fn encode_unchecked(latitude: f64, longitude: f64, code_length: usize) -> String {
    let code_length = code_length.min(MAX_DIGIT_COUNT);
    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);
    // The north pole belongs to the cell just below it.
    if latitude == LATITUDE_MAX {
        latitude -= compute_latitude_precision(code_length);
    }

    let mut lat_val =
        round_to((latitude + LATITUDE_MAX) * FINAL_LAT_PRECISION as f64, 6).floor() as i64;
    let mut lng_val =
        round_to((longitude + LONGITUDE_MAX) * FINAL_LNG_PRECISION as f64, 6).floor() as i64;

    // Digits are produced least significant first.
    let mut rev: Vec<char> = Vec::with_capacity(MAX_DIGIT_COUNT);
    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..(MAX_DIGIT_COUNT - PAIR_CODE_LENGTH) {
            let lat_digit = lat_val % GRID_ROWS;
            let lng_digit = lng_val % GRID_COLUMNS;
            rev.push(digit(lat_digit * GRID_COLUMNS + lng_digit));
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH);
    }
    for _ in 0..PAIR_CODE_LENGTH / 2 {
        rev.push(digit(lng_val % ENCODING_BASE));
        rev.push(digit(lat_val % ENCODING_BASE));
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }
    let digits: String = rev.into_iter().rev().collect();

    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    if code_length >= SEPARATOR_POSITION {
        code.push_str(&digits[..SEPARATOR_POSITION]);
        code.push(SEPARATOR);
        code.push_str(&digits[SEPARATOR_POSITION..code_length]);
    } else {
        code.push_str(&digits[..code_length]);
        code.extend(std::iter::repeat(PADDING_CHARACTER).take(SEPARATOR_POSITION - code_length));
        code.push(SEPARATOR);
    }
    code
}

/// Decode a full code into the cell it names.
///
/// Short codes must first go through [`recover_nearest`].
pub fn decode(code: &str) -> Result<CodeArea> {
    if !is_full(code) {
        return Err(GeoError::InvalidCode(format!(
            "'{code}' is not a valid full Open Location Code"
        )));
    }
    let digits: Vec<i64> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .filter_map(digit_value)
        .take(MAX_DIGIT_COUNT)
        .collect();
    let len = digits.len();

    let mut normal_lat = -(LATITUDE_MAX as i64) * PAIR_PRECISION;
    let mut normal_lng = -(LONGITUDE_MAX as i64) * PAIR_PRECISION;
    let mut grid_lat = 0i64;
    let mut grid_lng = 0i64;

    let pair_digits = len.min(PAIR_CODE_LENGTH);
    let mut pv = PAIR_FIRST_PLACE_VALUE;
    for i in (0..pair_digits).step_by(2) {
        normal_lat += digits[i] * pv;
        normal_lng += digits[i + 1] * pv;
        if i + 2 < pair_digits {
            pv /= ENCODING_BASE;
        }
    }
    let mut lat_precision = pv as f64 / PAIR_PRECISION as f64;
    let mut lng_precision = pv as f64 / PAIR_PRECISION as f64;

    if len > PAIR_CODE_LENGTH {
        let mut row_pv = GRID_LAT_FIRST_PLACE_VALUE;
        let mut col_pv = GRID_LNG_FIRST_PLACE_VALUE;
        for (i, &d) in digits.iter().enumerate().skip(PAIR_CODE_LENGTH) {
            grid_lat += (d / GRID_COLUMNS) * row_pv;
            grid_lng += (d % GRID_COLUMNS) * col_pv;
            if i + 1 < len {
                row_pv /= GRID_ROWS;
                col_pv /= GRID_COLUMNS;
            }
        }
        lat_precision = row_pv as f64 / FINAL_LAT_PRECISION as f64;
        lng_precision = col_pv as f64 / FINAL_LNG_PRECISION as f64;
    }

    let lat = normal_lat as f64 / PAIR_PRECISION as f64
        + grid_lat as f64 / FINAL_LAT_PRECISION as f64;
    let lng = normal_lng as f64 / PAIR_PRECISION as f64
        + grid_lng as f64 / FINAL_LNG_PRECISION as f64;

    Ok(CodeArea::new(
        round_to(lat, 14),
        round_to(lng, 14),
        round_to(lat + lat_precision, 14),
        round_to(lng + lng_precision, 14),
        len,
    ))
}

// -----------------------------------------------------------------------------
// SHORT CODES
// -----------------------------------------------------------------------------

/// Drop as many leading digits as a reference point allows.
///
/// The reference must lie well inside the area the remaining digits can
/// address; otherwise the code comes back unchanged (upper-cased).
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String> {
    if !is_full(code) {
        return Err(GeoError::InvalidCode(format!(
            "'{code}' is not a valid full Open Location Code"
        )));
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(GeoError::InvalidCode(format!(
            "'{code}' is padded and cannot be shortened"
        )));
    }
    validate_coordinates(latitude, longitude)?;

    let code = code.to_ascii_uppercase();
    let area = decode(&code)?;
    if area.code_length < MIN_TRIMMABLE_CODE_LEN {
        return Err(GeoError::InvalidCode(format!(
            "'{code}' is too short to be shortened"
        )));
    }

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);
    let range = (area.latitude_center - latitude)
        .abs()
        .max((area.longitude_center - longitude).abs());

    for i in (1..PAIR_RESOLUTIONS.len() - 1).rev() {
        // 0.3 keeps a safety margin inside the half-cell the short code covers.
        if range < PAIR_RESOLUTIONS[i] * 0.3 {
            return Ok(code[(i + 1) * 2..].to_string());
        }
    }
    Ok(code)
}

/// Rebuild the full code nearest to the reference point.
///
/// Full codes are returned upper-cased as-is.
pub fn recover_nearest(short_code: &str, latitude: f64, longitude: f64) -> Result<String> {
    if is_full(short_code) {
        return Ok(short_code.to_ascii_uppercase());
    }
    if !is_short(short_code) {
        return Err(GeoError::InvalidCode(format!(
            "'{short_code}' is not a valid short Open Location Code"
        )));
    }
    validate_coordinates(latitude, longitude)?;

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);
    let code = short_code.to_ascii_uppercase();
    let sep = code
        .find(SEPARATOR)
        .ok_or_else(|| GeoError::InvalidCode(format!("'{short_code}' has no separator")))?;

    let padding_length = SEPARATOR_POSITION - sep;
    let resolution = (ENCODING_BASE as f64).powf(2.0 - padding_length as f64 / 2.0);
    let half_resolution = resolution / 2.0;

    let reference = encode_unchecked(latitude, longitude, PAIR_CODE_LENGTH);
    let area = decode(&format!("{}{}", &reference[..padding_length], code))?;

    // The reference prefix may put us one cell off; step to the nearer neighbour.
    let mut lat_center = area.latitude_center;
    let mut lng_center = area.longitude_center;
    if latitude + half_resolution < lat_center && lat_center - resolution >= -LATITUDE_MAX {
        lat_center -= resolution;
    } else if latitude - half_resolution > lat_center && lat_center + resolution <= LATITUDE_MAX
    {
        lat_center += resolution;
    }
    if longitude + half_resolution < lng_center {
        lng_center -= resolution;
    } else if longitude - half_resolution > lng_center {
        lng_center += resolution;
    }

    Ok(encode_unchecked(lat_center, lng_center, area.code_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn encodes_reference_points() {
        assert_eq!(encode(20.3700625, 2.7821875).unwrap(), "7FG49QCJ+2V");
        assert_eq!(encode_with_length(20.375, 2.775, 6).unwrap(), "7FG49Q00+");
        assert_eq!(encode(2.0469, 45.3182).unwrap(), "6HJ728W9+Q7");
    }

    #[test]
    fn rejects_out_of_range_and_bad_lengths() {
        assert!(matches!(encode(91.0, 0.0), Err(GeoError::InvalidArgument(_))));
        assert!(matches!(encode(0.0, -180.5), Err(GeoError::InvalidArgument(_))));
        assert!(matches!(encode(f64::NAN, 0.0), Err(GeoError::InvalidArgument(_))));
        assert!(matches!(
            encode_with_length(1.0, 1.0, 7),
            Err(GeoError::InvalidArgument(_))
        ));
        assert!(matches!(
            encode_with_length(1.0, 1.0, 1),
            Err(GeoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn long_codes_cap_at_fifteen_digits() {
        let code = encode_with_length(2.0469, 45.3182, 20).unwrap();
        assert_eq!(code.len(), MAX_DIGIT_COUNT + 1);
        assert!(is_full(&code));
    }

    #[test]
    fn decodes_reference_cell() {
        let area = decode("7FG49QCJ+2V").unwrap();
        assert!(close(area.latitude_center, 20.3700625));
        assert!(close(area.longitude_center, 2.7821875));
        assert!(close(area.latitude_lo, 20.37));
        assert!(close(area.latitude_hi, 20.370125));
        assert_eq!(area.code_length, 10);

        let padded = decode("7FG49Q00+").unwrap();
        assert!(close(padded.latitude_center, 20.375));
        assert!(close(padded.longitude_center, 2.775));
        assert_eq!(padded.code_length, 6);
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("7fg49qcj+2v").unwrap(), decode("7FG49QCJ+2V").unwrap());
    }

    #[test]
    fn round_trip_contains_the_point() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon < 180.0 {
                let code = encode(lat, lon).unwrap();
                let area = decode(&code).unwrap();
                assert!(area.contains(lat, lon), "{code} does not contain ({lat}, {lon})");
                lon += 7.31;
            }
            lat += 3.17;
        }
    }

    #[test]
    fn north_pole_stays_inside_the_grid() {
        let area = decode(&encode(90.0, 10.0).unwrap()).unwrap();
        assert!(area.contains(90.0, 10.0));
        assert!(area.latitude_center < 90.0);
    }

    #[test]
    fn grammar() {
        assert!(is_valid("8FJ53P00+"));
        assert!(is_full("8FJ53P00+"));
        // Separator at an odd position.
        assert!(!is_valid("8FJ53PM+"));
        assert!(!is_valid("6HJ728W9+Q7+"));
        assert!(!is_valid("6HJ728W9+Q"));
        assert!(!is_valid("6HJ728W9Q7"));
        assert!(!is_valid("0HJ72800+"));
        assert!(!is_valid("6HJ7280+"));
        assert!(!is_valid("6HJ72800+Q7"));
        assert!(!is_valid("6HJ728WA+Q7"));
        assert!(is_short("+2VX"));
        assert!(is_short("CJ+2VX"));
        assert!(!is_full("CJ+2VX"));
        // First latitude digit beyond 180 degrees.
        assert!(!is_full("X2000000+"));
    }

    #[test]
    fn shortens_relative_to_reference() {
        assert_eq!(
            shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625).unwrap(),
            "+2VX"
        );
        assert_eq!(
            shorten("9C3W9QCJ+2VX", 51.3708675, -1.217765625).unwrap(),
            "CJ+2VX"
        );
        assert!(shorten("7FG49Q00+", 20.375, 2.775).is_err());
        assert!(shorten("CJ+2VX", 51.37, -1.21).is_err());
    }

    #[test]
    fn recovers_short_codes() {
        assert_eq!(
            recover_nearest("+2VX", 51.3701125, -1.217765625).unwrap(),
            "9C3W9QCJ+2VX"
        );
        assert_eq!(
            recover_nearest("CJ+2VX", 51.3708675, -1.217765625).unwrap(),
            "9C3W9QCJ+2VX"
        );
        assert_eq!(
            recover_nearest("6hj728w9+q7", 0.0, 0.0).unwrap(),
            "6HJ728W9+Q7"
        );
        assert!(matches!(
            recover_nearest("not-a-code", 0.0, 0.0),
            Err(GeoError::InvalidCode(_))
        ));
    }

    #[test]
    fn shorten_then_recover_round_trips() {
        let full = encode(2.0469, 45.3182).unwrap();
        let short = shorten(&full, 2.05, 45.32).unwrap();
        assert!(short.len() < full.len());
        assert_eq!(recover_nearest(&short, 2.05, 45.32).unwrap(), full);
    }
}
