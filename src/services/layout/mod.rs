//! Schedule grid layout engine.
//!
//! Turns a course list plus a [`LayoutConfig`] and the surface width into a
//! [`TimetableLayout`]: one rectangle per well-formed course, one header per
//! visible day column, the hour axis and optional grid lines. The pass is a
//! pure function of its inputs, so calling it twice yields identical output.

mod grid;
mod label;

use crate::models::event::CourseEvent;
use crate::models::layout::{CornerRadii, DayHeader, HourRange, PlacedRect, TimetableLayout};
use crate::models::settings::{LayoutConfig, RoundOption};
use crate::services::schedule::{
    column_for_day, natural_day_symbols, resolve_config_hour_range, resolve_day_symbols,
};

pub use grid::{grid_lines, hour_marks};
pub use label::course_label;

/// Width of one day column. Never negative; zero columns count as one.
pub fn column_width(config: &LayoutConfig, grid_width: f32) -> f32 {
    let day_count = config.effective_day_count() as f32;
    ((grid_width - config.axis_width) / day_count).max(0.0)
}

/// Rotated labels for the visible columns.
pub fn day_symbols(config: &LayoutConfig) -> Vec<String> {
    let natural = natural_day_symbols(
        config.effective_day_count(),
        config.user_day_symbols.as_deref(),
    );
    resolve_day_symbols(config.week_start, &natural)
}

/// Corner radii for a course block under the configured rounding policy.
pub fn corner_radii(config: &LayoutConfig) -> CornerRadii {
    let r = config.corner_radius;
    match config.round_corner {
        RoundOption::None => CornerRadii::ZERO,
        RoundOption::All => CornerRadii {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        },
        RoundOption::Left => CornerRadii {
            top_left: r,
            bottom_left: r,
            ..CornerRadii::ZERO
        },
        RoundOption::Right => CornerRadii {
            top_right: r,
            bottom_right: r,
            ..CornerRadii::ZERO
        },
    }
}

/// Place one course, or `None` when its times are malformed.
pub fn place_course(
    index: usize,
    course: &CourseEvent,
    config: &LayoutConfig,
    hour_range: HourRange,
    col_width: f32,
) -> Option<PlacedRect> {
    let (start, end) = match (course.start_clock(), course.end_clock()) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Skipping course #{} '{}': {}", index, course.title, e);
            return None;
        }
    };

    let row = config.row_height_per_hour;
    let insets = config.cell_insets;
    let column = column_for_day(course.day, config.week_start, config.effective_day_count());

    let x = config.axis_width + col_width * column as f32 + insets.left;
    let y = config.header_height
        + row * (start.hour as f32 - hour_range.min_hour as f32)
        + (start.minute as f32 / 60.0) * row
        + insets.top;
    let width = (col_width - insets.horizontal()).max(0.0);
    let height = (row * (end.hour as f32 - start.hour as f32)
        + ((end.minute as f32 - start.minute as f32) / 60.0) * row
        - insets.vertical())
    .max(0.0);

    Some(PlacedRect {
        index,
        column,
        x,
        y,
        width,
        height,
        corner_radii: corner_radii(config),
        background_color: course.background_color.clone(),
        label: course_label(course, config, width, height),
        source_event: course.clone(),
    })
}

/// Run a full layout pass.
pub fn layout(events: &[CourseEvent], config: &LayoutConfig, grid_width: f32) -> TimetableLayout {
    let hour_range = resolve_config_hour_range(events, config);
    let col_width = column_width(config, grid_width);

    let placed_rects: Vec<PlacedRect> = events
        .iter()
        .enumerate()
        .filter_map(|(index, course)| place_course(index, course, config, hour_range, col_width))
        .collect();

    let day_headers: Vec<DayHeader> = day_symbols(config)
        .into_iter()
        .enumerate()
        .map(|(index, label)| DayHeader {
            index,
            x: config.axis_width + col_width * index as f32,
            y: 0.0,
            width: col_width,
            height: config.header_height,
            label,
            font_size: config.symbol_font_size,
            text_color: config.day_text_color.clone(),
            background_color: config.symbol_background_color.clone(),
        })
        .collect();

    let content_width = grid_width.max(0.0);
    let content_height =
        config.header_height + config.row_height_per_hour * hour_range.hour_count() as f32;

    log::debug!(
        "Laid out {}/{} courses over {} columns, hours {}..{}",
        placed_rects.len(),
        events.len(),
        day_headers.len(),
        hour_range.min_hour,
        hour_range.max_hour_exclusive
    );

    TimetableLayout {
        placed_rects,
        day_headers,
        hour_marks: hour_marks(config, hour_range),
        grid_lines: grid_lines(config, hour_range, col_width),
        hour_range,
        column_width: col_width,
        content_width,
        content_height,
        scroll_enabled: config.scroll_enabled,
    }
}
