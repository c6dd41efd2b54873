use crate::models::event::CourseEvent;
use crate::models::layout::HourRange;
use crate::models::settings::LayoutConfig;

/// Visible hour range derived from the courses.
///
/// Returns the fallback when there are no courses, or when none of them has
/// a parseable start and end. Otherwise the range runs from the earliest
/// start hour to one past the latest end hour.
pub fn resolve_visible_hour_range(
    events: &[CourseEvent],
    fallback_min: u32,
    fallback_max: u32,
) -> HourRange {
    let spans = events.iter().filter_map(CourseEvent::time_span);

    let mut bounds: Option<(u32, u32)> = None;
    for (start, end) in spans {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(start.hour), max.max(end.hour)),
            None => (start.hour, end.hour),
        });
    }

    match bounds {
        Some((min_start, max_end)) => {
            HourRange::new(min_start, max_end.saturating_add(1).min(25))
        }
        None => HourRange::new(fallback_min, fallback_max),
    }
}

/// Hour range the layout pass uses for `config`: derived from the courses
/// when `auto_hour_range` is on, the configured defaults otherwise.
pub fn resolve_config_hour_range(events: &[CourseEvent], config: &LayoutConfig) -> HourRange {
    if config.auto_hour_range {
        resolve_visible_hour_range(events, config.default_min_hour, config.default_max_hour)
    } else {
        HourRange::new(config.default_min_hour, config.default_max_hour)
    }
}
