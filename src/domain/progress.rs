/// Percentage of the target reached, clamped to 100 so an
/// over-funded campaign never overflows the progress bar.
///
/// `target` comes from validated configuration and is always positive.
pub fn progress_percent(total: f64, target: f64) -> f64 {
    debug_assert!(target > 0.0, "target must be validated at config load");
    ((total / target) * 100.0).min(100.0)
}
