use std::error;
use std::fmt;

/// Bad arguments for a level sweep.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// `stop` does not lie above `start`.
    FlippedRange { key: &'static str, start: f64, stop: f64 },
    OutOfRange { key: &'static str, lo: f64, hi: f64, actual: f64 },
}

impl RangeError {
    pub fn out_of_range(key: &'static str, lo: f64, hi: f64, actual: f64) -> RangeError {
        RangeError::OutOfRange { key, lo, hi, actual }
    }
    pub fn flipped_range(key: &'static str, start: f64, stop: f64) -> RangeError {
        RangeError::FlippedRange { key, start, stop }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RangeError::FlippedRange { key, start, stop } =>
                write!(f, "{} runs backwards: stop {} dB is not above start {} dB", key, stop, start),
            RangeError::OutOfRange { key, lo, hi, actual } =>
                write!(f, "{} out of range: {} <= {} <= {}", key, lo, actual, hi),
        }
    }
}

impl error::Error for RangeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> { None }
}

/// Finite `v` in `lo..=hi`, otherwise an out of range error naming `name`.
pub fn range_check(v: f64, lo: f64, hi: f64, name: &'static str) -> Result<f64, RangeError> {
    match v {
        v if v.is_finite() && v >= lo && v <= hi => Ok(v),
        _ => Err(RangeError::out_of_range(name, lo, hi, v))
    }
}


/// Input level the limiter refuses to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelError {
    NonFinite(f64),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LevelError::NonFinite(v) => write!(f, "Input level is not finite: {} dB", v),
        }
    }
}

impl error::Error for LevelError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> { None }
}
