use crate::core::calculator::timeline::Timeline;

/// Sum of daily deviations from `expected`. Days absent from the timeline
/// contribute nothing, so a day never clocked in is not counted as a deficit.
pub fn calculate_surplus(timeline: &Timeline, expected: i64) -> i64 {
    timeline
        .per_day
        .values()
        .map(|worked| worked - expected)
        .sum()
}
