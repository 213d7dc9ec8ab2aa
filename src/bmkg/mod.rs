mod client;
mod decoder;
mod envelope;

pub use client::{BmkgClient, DEFAULT_BASE_URL, EarthquakeFeed, Endpoint, FetchError, LatestEarthquake};
pub use decoder::{DecodeError, EnvelopeKind, decode_list, decode_single};
