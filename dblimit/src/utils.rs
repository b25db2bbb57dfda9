/// Position of `value` in the interval `min_range..max_range`, where
/// `min_range` maps to 0.0 and `max_range` to 1.0. Not clamped.
pub fn proportion(value: f64, min_range: f64, max_range: f64) -> f64 {
    debug_assert!(max_range != min_range, "empty proportion range at {}", min_range);
    (value - min_range) / (max_range - min_range)
}
