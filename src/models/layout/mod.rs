//! Output of a layout pass.
//!
//! Everything here is plain data in surface coordinates (points, origin at
//! the top-left of the scrollable content). The rendering surface draws it;
//! the selection router reads it back to resolve taps.

use serde::Serialize;

use crate::models::event::CourseEvent;
use crate::models::settings::TextAlignment;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges belong to the
    /// neighbouring rectangle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Per-corner radii for a course block.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const ZERO: CornerRadii = CornerRadii {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    pub fn is_square(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Text drawn inside a course block. The frame is relative to the block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseLabel {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub room: String,
    /// `title` and `room` joined by a newline
    pub text: String,
    /// Number of leading characters of `text` rendered in the title font
    pub title_char_count: usize,
    pub alignment: TextAlignment,
    pub title_font_size: f32,
    pub room_font_size: f32,
    pub text_color: String,
}

/// One course positioned on the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedRect {
    /// Position of the course in the input list; the selection key
    pub index: usize,
    /// Rotated column the course landed in
    pub column: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radii: CornerRadii,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub label: CourseLabel,
    pub source_event: CourseEvent,
}

impl PlacedRect {
    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Label above a day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayHeader {
    /// Rotated column position, 0 = leftmost
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
    pub font_size: f32,
    pub text_color: String,
    pub background_color: String,
}

impl DayHeader {
    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Row label on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourMark {
    pub hour: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
    pub font_size: f32,
    pub text_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
}

/// Inclusive-start, exclusive-end hour bounds of the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourRange {
    pub min_hour: u32,
    pub max_hour_exclusive: u32,
}

impl HourRange {
    pub const fn new(min_hour: u32, max_hour_exclusive: u32) -> Self {
        Self {
            min_hour,
            max_hour_exclusive,
        }
    }

    pub fn hour_count(&self) -> u32 {
        self.max_hour_exclusive.saturating_sub(self.min_hour)
    }

    pub fn hours(&self) -> std::ops::Range<u32> {
        self.min_hour..self.max_hour_exclusive
    }
}

/// Complete result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableLayout {
    pub placed_rects: Vec<PlacedRect>,
    pub day_headers: Vec<DayHeader>,
    pub hour_marks: Vec<HourMark>,
    pub grid_lines: Vec<GridLine>,
    pub hour_range: HourRange,
    pub column_width: f32,
    pub content_width: f32,
    pub content_height: f32,
    pub scroll_enabled: bool,
}

impl TimetableLayout {
    /// Layout with nothing placed, used before the first pass.
    pub fn empty() -> Self {
        Self {
            placed_rects: Vec::new(),
            day_headers: Vec::new(),
            hour_marks: Vec::new(),
            grid_lines: Vec::new(),
            hour_range: HourRange::new(0, 24),
            column_width: 0.0,
            content_width: 0.0,
            content_height: 0.0,
            scroll_enabled: true,
        }
    }

    pub fn day_labels(&self) -> impl Iterator<Item = &str> {
        self.day_headers.iter().map(|header| header.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(39.9, 59.9));
        assert!(!rect.contains(40.0, 30.0));
        assert!(!rect.contains(20.0, 60.0));
        assert!(!rect.contains(9.9, 30.0));
    }

    #[test]
    fn test_zero_sized_rect_contains_nothing() {
        let rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!rect.contains(5.0, 5.0));
    }

    #[test]
    fn test_hour_range_count() {
        assert_eq!(HourRange::new(9, 18).hour_count(), 9);
        assert_eq!(HourRange::new(10, 10).hour_count(), 0);
        assert_eq!(HourRange::new(12, 9).hour_count(), 0);
        assert_eq!(HourRange::new(9, 12).hours().collect::<Vec<_>>(), vec![9, 10, 11]);
    }

    #[test]
    fn test_corner_radii_square() {
        assert!(CornerRadii::ZERO.is_square());
        let rounded = CornerRadii {
            top_left: 4.0,
            ..CornerRadii::ZERO
        };
        assert!(!rounded.is_square());
    }
}
