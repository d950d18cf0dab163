use crate::common::time_point::{is_finite_or_infinite, Timestamp};
use crate::interpolate::Interpolator;
use crate::series::SampleSeries;
use crate::{Result, SparselineErr};

fn check_distance(name: &str, distance: f64) -> Result<()> {
    if !is_finite_or_infinite(distance) || distance < 0.0 {
        return Err(SparselineErr::InvalidParameter(format!(
            "{} must be a non-negative number, got {}; use infinity for an unbounded window",
            name, distance
        )));
    }
    Ok(())
}

/// Holds the nearest earlier sample's value for up to `max_distance` past its
/// timestamp. Never looks forward.
pub struct ClosestPast {
    max_distance: f64,
}

impl ClosestPast {
    pub fn new(max_distance: f64) -> Result<ClosestPast> {
        check_distance("max_distance", max_distance)?;
        Ok(ClosestPast { max_distance })
    }
}

impl<T: Clone> Interpolator<T> for ClosestPast {
    fn interpolate(
        &self,
        series: &SampleSeries<T>,
        target: Timestamp,
        insert_at: usize,
    ) -> Option<T> {
        if insert_at == 0 {
            return None;
        }
        if target - series.timestamps()[insert_at - 1] <= self.max_distance {
            Some(series.values()[insert_at - 1].clone())
        } else {
            None
        }
    }
}

/// Mirror of [`ClosestPast`]: takes the nearest later sample's value when it
/// lies within `max_distance` ahead of the target.
pub struct ClosestFuture {
    max_distance: f64,
}

impl ClosestFuture {
    pub fn new(max_distance: f64) -> Result<ClosestFuture> {
        check_distance("max_distance", max_distance)?;
        Ok(ClosestFuture { max_distance })
    }
}

impl<T: Clone> Interpolator<T> for ClosestFuture {
    fn interpolate(
        &self,
        series: &SampleSeries<T>,
        target: Timestamp,
        insert_at: usize,
    ) -> Option<T> {
        if insert_at >= series.len() {
            return None;
        }
        if series.timestamps()[insert_at] - target <= self.max_distance {
            Some(series.values()[insert_at].clone())
        } else {
            None
        }
    }
}

///
/// Picks whichever neighboring sample is closer, each direction limited by its
/// own maximum distance. On an equal-distance tie, `favour_past` decides.
///
/// Construction collapses degenerate windows onto the cheaper strategies:
/// two zero windows never fill anything, and a single zero window only ever
/// needs the one-sided lookup.
///
pub enum Closest {
    None,
    Past(ClosestPast),
    Either {
        max_forward: f64,
        max_backward: f64,
        favour_past: bool,
    },
}

impl Closest {
    pub fn new(max_forward: f64, max_backward: f64, favour_past: bool) -> Result<Closest> {
        check_distance("max_backward", max_backward)?;
        check_distance("max_forward", max_forward)?;
        if max_forward == 0.0 && max_backward == 0.0 {
            return Ok(Closest::None);
        }
        if max_backward == 0.0 {
            return Ok(Closest::Past(ClosestPast {
                max_distance: max_forward,
            }));
        }
        if max_forward == 0.0 {
            return Ok(Closest::Past(ClosestPast {
                max_distance: max_backward,
            }));
        }
        Ok(Closest::Either {
            max_forward,
            max_backward,
            favour_past,
        })
    }
}

impl<T: Clone> Interpolator<T> for Closest {
    fn interpolate(
        &self,
        series: &SampleSeries<T>,
        target: Timestamp,
        insert_at: usize,
    ) -> Option<T> {
        match *self {
            Closest::None => None,
            Closest::Past(ref past) => past.interpolate(series, target, insert_at),
            Closest::Either {
                max_forward,
                max_backward,
                favour_past,
            } => {
                let dist_prev = if insert_at > 0 {
                    Some(target - series.timestamps()[insert_at - 1])
                } else {
                    None
                };
                let dist_next = if insert_at < series.len() {
                    Some(series.timestamps()[insert_at] - target)
                } else {
                    None
                };
                let prev_ok = match dist_prev {
                    Some(d) => d <= max_backward,
                    None => false,
                };
                let next_ok = match dist_next {
                    Some(d) => d <= max_forward,
                    None => false,
                };
                let take_prev = prev_ok
                    && match (dist_prev, dist_next) {
                        (Some(prev), Some(next)) => {
                            prev < next || (prev == next && favour_past) || !next_ok
                        }
                        _ => true,
                    };
                if take_prev {
                    Some(series.values()[insert_at - 1].clone())
                } else if next_ok {
                    Some(series.values()[insert_at].clone())
                } else {
                    None
                }
            }
        }
    }
}

/// Forward-holds the previous sample's value for a fixed window. The same
/// lookup as [`ClosestPast`], kept as its own knobless type for the common
/// scrub-and-hold case.
pub struct ForwardHold {
    max_hold_length: f64,
}

impl ForwardHold {
    pub fn new(max_hold_length: f64) -> ForwardHold {
        ForwardHold { max_hold_length }
    }
}

impl<T: Clone> Interpolator<T> for ForwardHold {
    fn interpolate(
        &self,
        series: &SampleSeries<T>,
        target: Timestamp,
        insert_at: usize,
    ) -> Option<T> {
        if insert_at == 0 {
            return None;
        }
        if target - series.timestamps()[insert_at - 1] <= self.max_hold_length {
            Some(series.values()[insert_at - 1].clone())
        } else {
            None
        }
    }
}
