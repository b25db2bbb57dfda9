use log::warn;

use crate::errors::LevelError;

use super::utils;

/// One linear segment of the curve. The adjustment is interpolated between
/// `min_amount` and `max_amount` as the level moves from `min_threshold`
/// to `max_threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub min_threshold: f64,
    pub max_threshold: f64,
    pub min_amount: f64,
    pub max_amount: f64,
}

/// Levels in `(6, 20]` are pulled down by 3 to 6 dB.
pub const UPPER_LIMITING: Segment = Segment {
    min_threshold: 6.0,
    max_threshold: 20.0,
    min_amount: 3.0,
    max_amount: 6.0,
};

/// Levels in `[-10, 3)` are lifted by 6 to 3 dB.
pub const LOWER_BOOSTING: Segment = Segment {
    min_threshold: -10.0,
    max_threshold: 3.0,
    min_amount: 3.0,
    max_amount: 6.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    UpperLimiting,
    LowerBoosting,
    Passthrough,
}

impl Band {
    /// Band the level falls into. The upper band is open below and closed
    /// above, the lower band closed below and open above. NaN is passthrough.
    pub fn of(input_level: f64) -> Band {
	match input_level {
	    l if l > UPPER_LIMITING.min_threshold && l <= UPPER_LIMITING.max_threshold
		=> Band::UpperLimiting,
	    l if l >= LOWER_BOOSTING.min_threshold && l < LOWER_BOOSTING.max_threshold
		=> Band::LowerBoosting,
	    _ => Band::Passthrough
	}
    }

    pub fn segment(&self) -> Option<&'static Segment> {
	match *self {
	    Band::UpperLimiting => Some(&UPPER_LIMITING),
	    Band::LowerBoosting => Some(&LOWER_BOOSTING),
	    Band::Passthrough => None
	}
    }
}

/// Subtracts a reduction growing linearly from `min_reduction` at
/// `min_threshold` to `max_reduction` at `max_threshold`.
pub fn apply_upper_limiting(input_level: f64, min_threshold: f64, max_threshold: f64, min_reduction: f64, max_reduction: f64) -> f64 {
    let p = utils::proportion(input_level, min_threshold, max_threshold);
    let reduction = min_reduction + p * (max_reduction - min_reduction);
    input_level - reduction
}

/// Adds a boost shrinking linearly from `max_boost` at `min_threshold`
/// to `min_boost` at `max_threshold`.
pub fn apply_lower_boosting(input_level: f64, min_threshold: f64, max_threshold: f64, min_boost: f64, max_boost: f64) -> f64 {
    let p = utils::proportion(input_level, min_threshold, max_threshold);
    let boost = max_boost - p * (max_boost - min_boost);
    input_level + boost
}

/// Maps an input level in dB to its limited or boosted output level.
///
/// Levels outside both active bands, including the gap `[3, 6]`, are returned
/// unchanged. Non-finite input is not checked and comes back as it went in;
/// use [`try_decibel_limiter`] to reject it.
///
/// The mapping is not idempotent: `20` maps to `14`, which lies in the
/// limiting band again and maps further down on a second pass.
pub fn decibel_limiter(input_level: f64) -> f64 {
    match Band::of(input_level) {
	Band::UpperLimiting => {
	    let s = UPPER_LIMITING;
	    apply_upper_limiting(input_level, s.min_threshold, s.max_threshold, s.min_amount, s.max_amount)
	}
	Band::LowerBoosting => {
	    let s = LOWER_BOOSTING;
	    apply_lower_boosting(input_level, s.min_threshold, s.max_threshold, s.min_amount, s.max_amount)
	}
	Band::Passthrough => input_level
    }
}

/// Like [`decibel_limiter`] but refuses NaN and infinite levels.
pub fn try_decibel_limiter(input_level: f64) -> Result<f64, LevelError> {
    if !input_level.is_finite() {
	warn!("Rejecting non-finite input level {}", input_level);
	return Err(LevelError::NonFinite(input_level));
    }
    Ok(decibel_limiter(input_level))
}
