use crate::app_config::AppConfig;
use crate::bmkg::decoder::{DecodeError, decode_list, decode_single};
use crate::domain::{EarthquakeRecord, GeoCoordinate};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_BASE_URL: &str = "https://data.bmkg.go.id/DataMKG/TEWS";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Endpoint {
    /// The most recent earthquake, single record envelope.
    Latest,
    /// The latest magnitude 5+ earthquakes, record list envelope.
    Recent,
    /// The latest earthquakes that were felt, record list envelope.
    FeltReports,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Latest => "autogempa.json",
            Endpoint::Recent => "gempaterkini.json",
            Endpoint::FeltReports => "gempadirasakan.json",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LatestEarthquake {
    pub record: EarthquakeRecord,
    pub coordinate: GeoCoordinate,
}

/// A source of earthquake records. Every call is independent, the results are owned by the caller.
#[async_trait]
pub trait EarthquakeFeed: Send + Sync {
    /// The most recent earthquake, with its coordinate normalized leniently.
    async fn fetch_latest(&self) -> Result<LatestEarthquake, FetchError>;

    /// Recent earthquakes in feed order, unfiltered.
    async fn fetch_recent(&self) -> Result<Vec<EarthquakeRecord>, FetchError>;

    async fn fetch_felt_reports(&self) -> Result<Vec<EarthquakeRecord>, FetchError>;
}

#[derive(Clone, Debug)]
pub struct BmkgClient {
    client: Client,
    base_url: String,
}

impl BmkgClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(BmkgClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(config.bmkg().base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    // The body is read completely before it is decoded, dropping this future never yields a partial record
    #[instrument(skip(self))]
    async fn get(&self, endpoint: Endpoint) -> Result<Vec<u8>, FetchError> {
        let url = self.url(endpoint);
        debug!("Fetching {}...", url);

        let body = self.client.get(&url).send().await?.error_for_status()?.bytes().await?;
        debug!("Fetching {}... OK, {} bytes", url, body.len());

        Ok(body.to_vec())
    }

    async fn get_list(&self, endpoint: Endpoint) -> Result<Vec<EarthquakeRecord>, FetchError> {
        let body = self.get(endpoint).await?;
        let records = decode_list(&body)?;
        debug!("Decoded {} records from {:?}", records.len(), endpoint);

        Ok(records)
    }
}

#[async_trait]
impl EarthquakeFeed for BmkgClient {
    async fn fetch_latest(&self) -> Result<LatestEarthquake, FetchError> {
        let body = self.get(Endpoint::Latest).await?;
        let record = decode_single(&body)?;
        let coordinate = record.coordinate_or_neutral();

        Ok(LatestEarthquake { record, coordinate })
    }

    async fn fetch_recent(&self) -> Result<Vec<EarthquakeRecord>, FetchError> {
        self.get_list(Endpoint::Recent).await
    }

    async fn fetch_felt_reports(&self) -> Result<Vec<EarthquakeRecord>, FetchError> {
        self.get_list(Endpoint::FeltReports).await
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
