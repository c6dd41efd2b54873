// Property-based tests for day rotation, hour ranges and the layout pass

use proptest::prelude::*;
use rust_timetable::models::course_day::CourseDay;
use rust_timetable::models::event::CourseEvent;
use rust_timetable::models::settings::LayoutConfig;
use rust_timetable::services::layout::layout;
use rust_timetable::services::schedule::{
    column_for_day, natural_day_symbols, resolve_day_symbols, resolve_visible_hour_range,
};
use rust_timetable::services::selection::SelectionRouter;

fn any_day() -> impl Strategy<Value = CourseDay> {
    (1u8..=7).prop_map(|raw| CourseDay::from_raw(raw).unwrap())
}

/// Well-formed course starting between 6:00 and 20:59, at most 3 hours long
fn any_course() -> impl Strategy<Value = CourseEvent> {
    (any_day(), 6u32..21, 0u32..60, 1u32..180).prop_map(|(day, hour, minute, length)| {
        let end_total = hour * 60 + minute + length;
        CourseEvent::new(
            day,
            format!("{}:{:02}", hour, minute),
            format!("{}:{:02}", end_total / 60, end_total % 60),
            "Course",
            "Room",
        )
    })
}

proptest! {
    /// Property: the first resolved label belongs to the week-start column,
    /// and the output is a rotation of the input
    #[test]
    fn prop_day_symbols_are_rotation(start in any_day(), count in 1usize..=7) {
        let natural = natural_day_symbols(count, None);
        let resolved = resolve_day_symbols(start, &natural);

        let shift = (start.raw_value() as usize - 1) % count;
        prop_assert_eq!(&resolved[0], &natural[shift]);
        prop_assert_eq!(resolved.len(), natural.len());
        for (i, label) in resolved.iter().enumerate() {
            prop_assert_eq!(label, &natural[(shift + i) % count]);
        }
    }

    /// Property: a course on the week-start day always lands in column 0
    #[test]
    fn prop_week_start_maps_to_column_zero(start in any_day(), count in 0usize..=7) {
        prop_assert_eq!(column_for_day(start, start, count), 0);
    }

    /// Property: every day maps into range, even in short weeks
    #[test]
    fn prop_columns_stay_in_range(day in any_day(), start in any_day(), count in 1usize..=7) {
        prop_assert!(column_for_day(day, start, count) < count);
    }

    /// Property: the derived hour range covers every course
    #[test]
    fn prop_hour_range_covers_courses(events in prop::collection::vec(any_course(), 1..12)) {
        let range = resolve_visible_hour_range(&events, 0, 24);
        for course in &events {
            let (start, end) = course.time_span().unwrap();
            prop_assert!(range.min_hour <= start.hour);
            prop_assert!(end.hour < range.max_hour_exclusive);
        }
    }

    /// Property: layout is deterministic and places every well-formed course
    #[test]
    fn prop_layout_idempotent(
        events in prop::collection::vec(any_course(), 0..12),
        start in any_day(),
        count in 1usize..=7,
        width in 0.0f32..1200.0,
    ) {
        let config = LayoutConfig {
            week_start: start,
            visible_day_count: count,
            ..LayoutConfig::default()
        };
        let first = layout(&events, &config, width);
        let second = layout(&events, &config, width);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.placed_rects.len(), events.len());
        prop_assert_eq!(first.day_headers.len(), count);
        for rect in &first.placed_rects {
            prop_assert!(rect.width >= 0.0);
            prop_assert!(rect.height >= 0.0);
            prop_assert!(rect.y >= config.header_height);
        }
    }

    /// Property: indices past the course list never resolve
    #[test]
    fn prop_stale_indices_ignored(
        events in prop::collection::vec(any_course(), 0..8),
        extra in 0usize..100,
    ) {
        let result = layout(&events, &LayoutConfig::default(), 375.0);
        let router = SelectionRouter::from_layout(&result);
        prop_assert!(router.on_primary_select(events.len() + extra).is_none());
        prop_assert!(router.on_secondary_select(events.len() + extra).is_none());
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_one_malformed_course_dropped() {
        let events = vec![
            CourseEvent::new(CourseDay::Monday, "9:00", "10:00", "A", "1"),
            CourseEvent::new(CourseDay::Monday, "bad", "10:00", "B", "2"),
            CourseEvent::new(CourseDay::Tuesday, "11:00", "12:00", "C", "3"),
        ];
        let result = layout(&events, &LayoutConfig::default(), 375.0);
        assert_eq!(result.placed_rects.len(), events.len() - 1);
    }

    #[test]
    fn test_empty_range_is_fallback() {
        let range = resolve_visible_hour_range(&[], 0, 24);
        assert_eq!((range.min_hour, range.max_hour_exclusive), (0, 24));
    }

    #[test]
    fn test_nine_to_ten_thirty_range() {
        let events = [CourseEvent::new(CourseDay::Monday, "9:00", "10:30", "A", "1")];
        let range = resolve_visible_hour_range(&events, 0, 24);
        assert_eq!((range.min_hour, range.max_hour_exclusive), (9, 11));
    }
}
