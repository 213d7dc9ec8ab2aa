mod normalizer;

pub use normalizer::{CoordinateParseError, normalize, normalize_or_zero};
