use crate::coordinate::{CoordinateParseError, normalize};
use std::fmt::Display;

/// A point in signed decimal degrees. North and east are positive, the range is not checked.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const NEUTRAL: GeoCoordinate = GeoCoordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate { latitude, longitude }
    }

    /// Normalizes both raw axes, failing on the first one that does not parse.
    pub fn from_raw(latitude: &str, longitude: &str) -> Result<Self, CoordinateParseError> {
        Ok(GeoCoordinate {
            latitude: normalize(latitude)?,
            longitude: normalize(longitude)?,
        })
    }

    /// Like [`GeoCoordinate::from_raw`], but substitutes [`GeoCoordinate::NEUTRAL`] when either axis is unparseable.
    pub fn from_raw_or_neutral(latitude: &str, longitude: &str) -> Self {
        Self::from_raw(latitude, longitude).unwrap_or(Self::NEUTRAL)
    }
}

impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_raw_normalizes_both_axes() -> Result<(), CoordinateParseError> {
        assert_eq!(GeoCoordinate::from_raw("2.5 LS", "120.5 BT")?, GeoCoordinate::new(-2.5, 120.5));
        Ok(())
    }

    #[test]
    fn from_raw_fails_when_one_axis_is_invalid() {
        let result = GeoCoordinate::from_raw("2.5 LS", "somewhere");
        assert!(matches!(result, Err(CoordinateParseError::InvalidNumber { .. })), "got {:?}", result);
    }

    #[test]
    fn from_raw_or_neutral_falls_back_to_zero_for_the_whole_coordinate() {
        assert_eq!(GeoCoordinate::from_raw_or_neutral("2.5 LS", "somewhere"), GeoCoordinate::NEUTRAL);
        assert_eq!(GeoCoordinate::from_raw_or_neutral("not-a-number", "not-a-number"), GeoCoordinate::new(0.0, 0.0));
    }

    #[test]
    fn from_raw_or_neutral_keeps_valid_coordinates() {
        assert_eq!(GeoCoordinate::from_raw_or_neutral("3.1 LU", "98.2 BT"), GeoCoordinate::new(3.1, 98.2));
    }
}
