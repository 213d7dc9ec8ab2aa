use crate::domain::EarthquakeRecord;
use serde::Deserialize;

// API: https://data.bmkg.go.id/gempabumi/
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "Infogempa")]
    pub info: InfoGempa<T>,
}

#[derive(Debug, Deserialize)]
pub struct InfoGempa<T> {
    pub gempa: T,
}

#[derive(Debug, Deserialize)]
pub struct GempaGet {
    #[serde(rename = "Tanggal")]
    pub date: String,
    #[serde(rename = "Jam")]
    pub time: String,
    #[serde(rename = "Lintang")]
    pub latitude: String,
    #[serde(rename = "Bujur")]
    pub longitude: String,
    #[serde(rename = "Magnitude")]
    pub magnitude: String,
    #[serde(rename = "Kedalaman")]
    pub depth: String,
    #[serde(rename = "Wilayah")]
    pub region: String,
    #[serde(rename = "Potensi")]
    pub potential_hazard: Option<String>,
    #[serde(rename = "Dirasakan")]
    pub felt_report: Option<String>,
    #[serde(rename = "Shakemap")]
    pub shakemap: Option<String>, // file name relative to the feed base url
}

impl From<GempaGet> for EarthquakeRecord {
    fn from(gempa: GempaGet) -> Self {
        EarthquakeRecord {
            date: gempa.date,
            time: gempa.time,
            latitude_raw: gempa.latitude,
            longitude_raw: gempa.longitude,
            magnitude: gempa.magnitude,
            depth: gempa.depth,
            region: gempa.region,
            potential_hazard: gempa.potential_hazard,
            felt_report: gempa.felt_report,
            shakemap_ref: gempa.shakemap,
        }
    }
}
