use crate::common::time_point::Timestamp;
use crate::interpolate::Interpolator;
use crate::series::SampleSeries;

/// Scalar linear interpolation between `a` and `b` at fraction `alpha`.
pub fn lerp(a: f64, b: f64, alpha: f64) -> f64 {
    (1.0 - alpha) * a + alpha * b
}

/// Field-wise linear interpolation between two payloads. Implement this for
/// structured values (positions, colors, readings) to use them with
/// [`Linear`]; the scalar [`lerp`] is the building block for each field.
pub trait Lerp {
    fn lerp(from: &Self, to: &Self, alpha: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(from: &f64, to: &f64, alpha: f64) -> f64 {
        lerp(*from, *to, alpha)
    }
}

impl Lerp for f32 {
    fn lerp(from: &f32, to: &f32, alpha: f64) -> f32 {
        lerp(f64::from(*from), f64::from(*to), alpha) as f32
    }
}

/// Interpolates linearly between the two neighboring samples. Queries before
/// the first or after the last sample have only one neighbor and stay misses.
pub struct Linear;

impl<T: Lerp> Interpolator<T> for Linear {
    fn interpolate(
        &self,
        series: &SampleSeries<T>,
        target: Timestamp,
        insert_at: usize,
    ) -> Option<T> {
        if insert_at == 0 || insert_at >= series.len() {
            return None;
        }
        let prev_timestamp = series.timestamps()[insert_at - 1];
        let next_timestamp = series.timestamps()[insert_at];
        let alpha = (target - prev_timestamp) / (next_timestamp - prev_timestamp);
        Some(T::lerp(
            &series.values()[insert_at - 1],
            &series.values()[insert_at],
            alpha,
        ))
    }
}
