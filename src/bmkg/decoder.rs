use crate::bmkg::envelope::{Envelope, GempaGet};
use crate::domain::EarthquakeRecord;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use thiserror::Error;

/// Decodes `{"Infogempa": {"gempa": {...}}}` into a single record.
pub fn decode_single(bytes: &[u8]) -> Result<EarthquakeRecord, DecodeError> {
    decode::<GempaGet>(bytes, EnvelopeKind::Single).map(EarthquakeRecord::from)
}

/// Decodes `{"Infogempa": {"gempa": [...]}}` into records in feed order.
/// A single bad element fails the whole list.
pub fn decode_list(bytes: &[u8]) -> Result<Vec<EarthquakeRecord>, DecodeError> {
    decode::<Vec<GempaGet>>(bytes, EnvelopeKind::List).map(|gempas| gempas.into_iter().map(EarthquakeRecord::from).collect())
}

fn decode<T: DeserializeOwned>(bytes: &[u8], kind: EnvelopeKind) -> Result<T, DecodeError> {
    serde_json::from_slice::<Envelope<T>>(bytes)
        .map(|envelope| envelope.info.gempa)
        .map_err(|source| DecodeError {
            kind,
            source,
            raw: bytes.to_vec(),
        })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnvelopeKind {
    Single,
    List,
}

impl Display for EnvelopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvelopeKind::Single => write!(f, "single record"),
            EnvelopeKind::List => write!(f, "record list"),
        }
    }
}

#[derive(Error, Debug)]
#[error("invalid {kind} envelope: {source}")]
pub struct DecodeError {
    kind: EnvelopeKind,
    source: serde_json::Error,
    raw: Vec<u8>,
}

impl DecodeError {
    pub fn kind(&self) -> EnvelopeKind {
        self.kind
    }

    /// The payload that failed to decode, byte for byte.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn message(&self) -> String {
        self.source.to_string()
    }
}
