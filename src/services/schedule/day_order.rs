use crate::models::course_day::CourseDay;
use crate::utils::rotate::rotated;

/// Natural (Monday-first, unrotated) labels for `day_count` columns.
///
/// Position `i` uses the caller's override when one exists and the short
/// English weekday symbol otherwise, so a short override list still yields
/// a label for every column.
pub fn natural_day_symbols(day_count: usize, overrides: Option<&[String]>) -> Vec<String> {
    (0..day_count)
        .map(|i| {
            overrides
                .and_then(|labels| labels.get(i))
                .cloned()
                .unwrap_or_else(|| CourseDay::ALL[i % 7].short_symbol().to_string())
        })
        .collect()
}

/// Rotate `labels` left so the column for `week_start` comes first.
///
/// The shift is `week_start.raw_value() - 1` taken modulo the label count.
pub fn resolve_day_symbols(week_start: CourseDay, labels: &[String]) -> Vec<String> {
    let shift = (week_start.raw_value() - 1) as usize;
    rotated(labels, shift)
}

/// Column a course on `day` lands in when `week_start` is leftmost.
///
/// Days outside a short visible week still wrap into `0..day_count`.
pub fn column_for_day(day: CourseDay, week_start: CourseDay, day_count: usize) -> usize {
    let count = day_count.max(1) as i64;
    let offset = day.raw_value() as i64 - week_start.raw_value() as i64;
    (offset + count).rem_euclid(count) as usize
}
