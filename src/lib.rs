mod common;
mod error;
mod interpolate;
mod series;

pub use common::*;
pub use common::time_point::{Sample, Timestamp};
pub use common::utils::{binary_search, SearchResult};
pub use error::*;
pub use interpolate::{
    lerp, Closest, ClosestFuture, ClosestPast, ForwardHold, Interpolator, Lerp, Linear,
    NoInterpolation,
};
pub use series::SampleSeries;
