use crate::extensions::str_ext::{RemoveAll, WithoutWhitespace};
use std::num::ParseFloatError;
use thiserror::Error;

// Two-letter markers go first, stripping `S` before `LS` would leave a dangling `L`
const HEMISPHERE_MARKERS: [&str; 9] = ["LS", "LU", "BT", "BB", "S", "N", "U", "E", "W"];

// `LS` is already covered by `S`, both spellings of south are kept
const NEGATIVE_MARKERS: [&str; 4] = ["S", "LS", "W", "BB"];

/// Parses a feed coordinate such as `"2.5 LS"` or `"120.5 BT"` into signed decimal degrees.
///
/// Latitudes use `LU`/`U`/`N` for north and `LS`/`S` for south, longitudes use `BT`/`E` for east and
/// `BB`/`W` for west. Whitespace may appear anywhere. South and west yield a negative value.
pub fn normalize(raw: &str) -> Result<f64, CoordinateParseError> {
    let cleaned = raw.without_whitespace();
    let sign = if NEGATIVE_MARKERS.iter().any(|marker| cleaned.contains(marker)) {
        -1.0
    } else {
        1.0
    };

    let residual = cleaned.remove_all(&HEMISPHERE_MARKERS);
    if residual.is_empty() {
        return Err(CoordinateParseError::Empty { raw: raw.to_string() });
    }

    let value = residual.parse::<f64>().map_err(|source| CoordinateParseError::InvalidNumber {
        raw: raw.to_string(),
        residual: residual.clone(),
        source,
    })?;

    if !value.is_finite() {
        return Err(CoordinateParseError::NotFinite { raw: raw.to_string() });
    }

    Ok(value * sign)
}

/// Lenient variant of [`normalize`], yields `0.0` for anything it cannot parse.
pub fn normalize_or_zero(raw: &str) -> f64 {
    normalize(raw).unwrap_or(0.0)
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateParseError {
    #[error("coordinate '{raw}' has no numeric part")]
    Empty { raw: String },
    #[error("coordinate '{raw}' leaves '{residual}' which is not a number: {source}")]
    InvalidNumber {
        raw: String,
        residual: String,
        source: ParseFloatError,
    },
    #[error("coordinate '{raw}' is not a finite number")]
    NotFinite { raw: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::north_two_letters("2.5LU", 2.5)]
    #[case::south_two_letters_spaced("2.5 LS", -2.5)]
    #[case::east_two_letters("120.5BT", 120.5)]
    #[case::west_two_letters("120.5BB", -120.5)]
    #[case::south_single_letter("7.12 S", -7.12)]
    #[case::north_single_letter("0.5N", 0.5)]
    #[case::north_u("1.25U", 1.25)]
    #[case::east_single_letter("98.7 E", 98.7)]
    #[case::west_single_letter("45W", -45.0)]
    #[case::spaces_everywhere(" 1 0 6 . 2 1  B T ", 106.21)]
    #[case::no_marker("3.75", 3.75)]
    fn normalize_parses_feed_coordinates(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(normalize(raw), Ok(expected));
    }

    #[test]
    fn normalize_treats_ls_the_same_as_s() {
        assert_eq!(normalize("4.1LS"), normalize("4.1S"));
    }

    #[rstest]
    #[case::words("not-a-number")]
    #[case::leftover_letters("2.5 XY")]
    #[case::two_numbers("2.5 3.5")]
    fn normalize_rejects_non_numeric_residuals(#[case] raw: &str) {
        let result = normalize(raw);
        assert!(matches!(result, Err(CoordinateParseError::InvalidNumber { .. })), "got {:?}", result);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::only_marker("LS")]
    fn normalize_rejects_coordinates_without_a_number(#[case] raw: &str) {
        assert_eq!(normalize(raw), Err(CoordinateParseError::Empty { raw: raw.to_string() }));
    }

    #[test]
    fn normalize_rejects_infinity() {
        assert_eq!(normalize("inf"), Err(CoordinateParseError::NotFinite { raw: "inf".to_string() }));
    }

    #[test]
    fn normalize_or_zero_substitutes_zero_on_failure() {
        assert_eq!(normalize_or_zero("not-a-number"), 0.0);
        assert_eq!(normalize_or_zero("2.5 LS"), -2.5);
    }
}
