use crate::coordinate::CoordinateParseError;
use crate::domain::GeoCoordinate;
use chrono::NaiveDate;
use std::fmt::Display;

/// A single earthquake as reported by the feed. All values are kept as the text the feed sent.
#[derive(Clone, Debug, PartialEq)]
pub struct EarthquakeRecord {
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) latitude_raw: String,
    pub(crate) longitude_raw: String,
    pub(crate) magnitude: String,
    pub(crate) depth: String,
    pub(crate) region: String,
    pub(crate) potential_hazard: Option<String>,
    pub(crate) felt_report: Option<String>,
    pub(crate) shakemap_ref: Option<String>,
}

impl EarthquakeRecord {
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn latitude_raw(&self) -> &str {
        &self.latitude_raw
    }

    pub fn longitude_raw(&self) -> &str {
        &self.longitude_raw
    }

    pub fn magnitude(&self) -> &str {
        &self.magnitude
    }

    pub fn depth(&self) -> &str {
        &self.depth
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn potential_hazard(&self) -> Option<&str> {
        self.potential_hazard.as_deref()
    }

    pub fn felt_report(&self) -> Option<&str> {
        self.felt_report.as_deref()
    }

    pub fn shakemap_ref(&self) -> Option<&str> {
        self.shakemap_ref.as_deref()
    }

    /// Date followed by time. Unique within one response and stable across fetches.
    pub fn identity(&self) -> String {
        format!("{}{}", self.date, self.time)
    }

    pub fn magnitude_value(&self) -> Option<f64> {
        self.magnitude.trim().parse().ok()
    }

    /// The leading number of the depth text, e.g. `10.0` for `"10 km"`.
    pub fn depth_km(&self) -> Option<f64> {
        let number: String = self.depth.trim().chars().take_while(|c| c.is_ascii_digit() || *c == '.').collect();
        number.parse().ok()
    }

    /// Parses the date using the formats the feed has used over time: `21/04/2025`, `21/04/25` and `21 Apr 2025`.
    pub fn occurred_on(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        if let Ok(parsed) = NaiveDate::parse_from_str(date, "%d %b %Y") {
            return Some(parsed);
        }

        // %Y happily accepts a two digit year, so pick the format by the width of the year
        let format = match date.rsplit('/').next().map(str::len) {
            Some(2) => "%d/%m/%y",
            _ => "%d/%m/%Y",
        };
        NaiveDate::parse_from_str(date, format).ok()
    }

    pub fn shakemap_url(&self, base_url: &str) -> Option<String> {
        self.shakemap_ref
            .as_deref()
            .map(|shakemap| format!("{}/{}", base_url.trim_end_matches('/'), shakemap.trim_start_matches('/')))
    }

    pub fn coordinate(&self) -> Result<GeoCoordinate, CoordinateParseError> {
        GeoCoordinate::from_raw(&self.latitude_raw, &self.longitude_raw)
    }

    pub fn coordinate_or_neutral(&self) -> GeoCoordinate {
        GeoCoordinate::from_raw_or_neutral(&self.latitude_raw, &self.longitude_raw)
    }
}

impl Display for EarthquakeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} | M {} | {} | {} {} | {}",
            self.date, self.time, self.magnitude, self.depth, self.latitude_raw, self.longitude_raw, self.region
        )?;
        if let Some(potential_hazard) = &self.potential_hazard {
            write!(f, " | {}", potential_hazard)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn record(date: &str, time: &str, magnitude: &str) -> EarthquakeRecord {
    EarthquakeRecord {
        date: date.to_string(),
        time: time.to_string(),
        latitude_raw: "2.5 LS".to_string(),
        longitude_raw: "120.5 BT".to_string(),
        magnitude: magnitude.to_string(),
        depth: "10 km".to_string(),
        region: "Test Region".to_string(),
        potential_hazard: None,
        felt_report: None,
        shakemap_ref: None,
    }
}
