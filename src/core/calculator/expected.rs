/// Target minutes per worked day, or `None` when no target applies
/// (missing or zero). Fractional minutes are truncated.
pub fn calculate_expected(hours_per_day: Option<f64>) -> Option<i64> {
    match hours_per_day {
        Some(h) if h != 0.0 => Some((h * 60.0) as i64),
        _ => None,
    }
}
