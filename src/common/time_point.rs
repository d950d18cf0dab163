use serde::{Deserialize, Serialize};

/// Unitless ordering key of a sample. Stored timestamps must be finite;
/// infinite values are only legal as range bounds.
pub type Timestamp = f64;

/// An owned (timestamp, value) pair, used for snapshots and JSON interchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample<T> {
    pub timestamp: Timestamp,
    pub value: T,
}

impl<T> Sample<T> {
    pub fn new(timestamp: Timestamp, value: T) -> Sample<T> {
        Sample { timestamp, value }
    }
}

pub fn is_finite(val: f64) -> bool {
    val.is_finite()
}

pub fn is_finite_or_infinite(val: f64) -> bool {
    !val.is_nan()
}

pub fn is_valid_timestamp(timestamp: Timestamp) -> bool {
    is_finite(timestamp)
}

/// A range is valid when both bounds are numbers (infinity allowed on either
/// side) and it is not inverted. Zero-width ranges denote a single instant.
pub fn is_valid_time_range(from: Timestamp, to: Timestamp) -> bool {
    is_finite_or_infinite(from) && is_finite_or_infinite(to) && to >= from
}
