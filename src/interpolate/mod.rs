use crate::common::time_point::Timestamp;
use crate::series::SampleSeries;

mod closest;
mod linear;

pub use closest::{Closest, ClosestFuture, ClosestPast, ForwardHold};
pub use linear::{lerp, Lerp, Linear};

///
/// Fills in a value for a lookup that found no exact sample. `insert_at` is
/// the insertion point produced by the failed search, so the nearest earlier
/// sample sits at `insert_at - 1` (absent when 0) and the nearest later one
/// at `insert_at` (absent when the series length is reached).
///
/// Implementations are stateless policies over a read-only series; they carry
/// their configuration and nothing else.
///
pub trait Interpolator<T> {
    fn interpolate(
        &self,
        series: &SampleSeries<T>,
        target: Timestamp,
        insert_at: usize,
    ) -> Option<T>;
}

/// Never synthesizes a value; a miss stays a miss.
pub struct NoInterpolation;

impl<T> Interpolator<T> for NoInterpolation {
    fn interpolate(&self, _: &SampleSeries<T>, _: Timestamp, _: usize) -> Option<T> {
        None
    }
}
