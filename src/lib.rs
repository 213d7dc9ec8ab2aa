//! Client for the BMKG public earthquake feed.
//!
//! [`BmkgClient`] fetches the latest, recent and felt earthquakes and decodes them into
//! [`EarthquakeRecord`]s. The feed reports coordinates as text such as `"2.5 LS"`, see
//! [`coordinate::normalize`] for turning those into signed decimal degrees.

pub mod app_config;
pub mod bmkg;
pub mod coordinate;
pub mod domain;
mod extensions;

pub use bmkg::{BmkgClient, EarthquakeFeed, FetchError, LatestEarthquake};
pub use domain::{EarthquakeRecord, GeoCoordinate};
