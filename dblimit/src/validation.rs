use itertools::Itertools;
use log::{debug, warn};

use crate::errors::*;
use crate::limiter::decibel_limiter;

/// Upper bound on the number of levels a single sweep may produce.
pub const MAX_SWEEP_LEVELS: usize = 1_000_000;

/// Level range swept by the validator when no levels are given.
pub const DEFAULT_SWEEP: (f64, f64, f64) = (-20.0, 30.0, 0.5);

/// Whether `output_level` lies within the tolerance expected for `input_level`.
///
/// Above 20 dB the output must not exceed 20 dB. In the limiting band it has
/// to land in `[0, 17]` and in the boosting band in `[-4, 9]`, leaving some
/// margin around the exact curve. Everywhere else the level must be untouched.
pub fn check_output_range(input_level: f64, output_level: f64) -> bool {
    match input_level {
        i if i > 20.0 => output_level <= 20.0,
        i if i > 6.0 && i <= 20.0 => output_level >= 0.0 && output_level <= 17.0,
        i if i >= -10.0 && i < 3.0 => output_level >= -4.0 && output_level <= 9.0,
        _ => output_level == input_level
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleResult {
    pub input: f64,
    pub output: f64,
    pub within_range: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    samples: Vec<SampleResult>,
}

impl ValidationReport {
    pub fn samples(&self) -> &[SampleResult] {
        &self.samples
    }

    pub fn passed(&self) -> bool {
        self.samples.iter().all(|s| s.within_range)
    }

    pub fn failures(&self) -> impl Iterator<Item = &SampleResult> {
        self.samples.iter().filter(|s| !s.within_range)
    }
}

/// Runs every level through the limiter and checks each output.
pub fn test_limiter<I>(levels: I) -> ValidationReport
where I: IntoIterator<Item = f64> {
    let samples: Vec<SampleResult> = levels.into_iter().map(|input| {
        let output = decibel_limiter(input);
        let within_range = check_output_range(input, output);
        if !within_range {
            warn!("Output {:.2} dB for input {:.2} dB is outside the expected range", output, input);
        }
        SampleResult { input, output, within_range }
    }).collect();

    let report = ValidationReport { samples };
    debug!("Validated {} levels, failed: [{}]", report.samples.len(), report.failures().map(|s| s.input).join(", "));

    report
}

/// Levels `start, start + step, ...` below `stop`.
pub fn sweep(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, RangeError> {
    range_check(start, std::f64::MIN, std::f64::MAX, "sweep start")?;
    range_check(stop, std::f64::MIN, std::f64::MAX, "sweep stop")?;
    if stop <= start {
        return Err(RangeError::flipped_range("sweep", start, stop));
    }
    range_check(step, std::f64::MIN_POSITIVE, std::f64::MAX, "sweep step")?;

    let count = ((stop - start) / step).ceil();
    if !count.is_finite() || count > MAX_SWEEP_LEVELS as f64 {
        return Err(RangeError::out_of_range("sweep step", (stop - start) / MAX_SWEEP_LEVELS as f64, std::f64::MAX, step));
    }
    let count = count as usize;
    debug!("Sweeping {} levels from {} dB in steps of {} dB", count, start, step);

    Ok((0..count).map(|i| start + i as f64 * step).collect())
}
