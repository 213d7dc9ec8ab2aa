use crate::domain::EarthquakeRecord;

/// Keeps the records with a magnitude of at least `threshold`, in their original order.
/// Records whose magnitude is not a number are dropped.
pub fn at_least_magnitude(records: Vec<EarthquakeRecord>, threshold: f64) -> Vec<EarthquakeRecord> {
    records
        .into_iter()
        .filter(|record| record.magnitude_value().is_some_and(|magnitude| magnitude >= threshold))
        .collect()
}
