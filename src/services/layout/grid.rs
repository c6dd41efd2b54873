use crate::models::layout::{GridLine, HourMark, HourRange};
use crate::models::settings::LayoutConfig;

/// Time-axis labels, one per visible hour row.
pub fn hour_marks(config: &LayoutConfig, hour_range: HourRange) -> Vec<HourMark> {
    let row = config.row_height_per_hour;
    hour_range
        .hours()
        .enumerate()
        .map(|(offset, hour)| HourMark {
            hour,
            x: 0.0,
            y: config.header_height + row * offset as f32,
            width: config.axis_width,
            height: row,
            label: format!("{:02}:00", hour),
            font_size: config.symbol_time_font_size,
            text_color: config.symbol_time_text_color.clone(),
        })
        .collect()
}

/// Hour and column separators. Only drawn when `full_border` is set.
pub fn grid_lines(config: &LayoutConfig, hour_range: HourRange, col_width: f32) -> Vec<GridLine> {
    if !config.full_border {
        return Vec::new();
    }

    let row = config.row_height_per_hour;
    let day_count = config.effective_day_count();
    let left = config.axis_width;
    let right = left + col_width * day_count as f32;
    let top = config.header_height;
    let bottom = top + row * hour_range.hour_count() as f32;

    let horizontal = (0..=hour_range.hour_count()).map(|k| {
        let y = top + row * k as f32;
        GridLine {
            x1: left,
            y1: y,
            x2: right,
            y2: y,
            width: config.border_width,
        }
    });

    let vertical = (0..=day_count).map(|c| {
        let x = left + col_width * c as f32;
        GridLine {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: bottom,
            width: config.border_width,
        }
    });

    horizontal.chain(vertical).collect()
}
