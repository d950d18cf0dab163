use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum SparselineErr {
    #[fail(display = "invalid timestamp '{}'", _0)]
    InvalidTimestamp(f64),

    #[fail(display = "invalid time range {} - {}", _0, _1)]
    InvalidRange(f64, f64),

    #[fail(display = "timestamps and values must be of equal length, got {} and {}", _0, _1)]
    LengthMismatch(usize, usize),

    #[fail(display = "invalid parameter: {}", _0)]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, SparselineErr>;
