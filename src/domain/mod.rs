mod earthquake;
pub mod filter;
mod geo_coordinate;

pub use earthquake::EarthquakeRecord;
pub use geo_coordinate::GeoCoordinate;
