//! Selection routing.
//!
//! Every placed course carries the index of the course in the input list.
//! The router keeps a lookup table from that index to the course, rebuilt on
//! each layout pass, so a tap reported by the surface resolves to the course
//! that was on screen. Indices the table does not know about (stale input
//! queued across a data change, skipped courses) resolve to nothing.

use std::collections::BTreeMap;

use crate::models::event::CourseEvent;
use crate::models::layout::TimetableLayout;

/// What a surface coordinate landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A course block, by input index
    Course(usize),
    /// A day header, by rotated column
    DayHeader(usize),
}

/// Find what is under `(x, y)`.
///
/// Course blocks are searched last-placed first so a block drawn on top of
/// another wins. Headers are checked after courses.
pub fn hit_test(layout: &TimetableLayout, x: f32, y: f32) -> Option<HitTarget> {
    if let Some(rect) = layout
        .placed_rects
        .iter()
        .rev()
        .find(|rect| rect.frame().contains(x, y))
    {
        return Some(HitTarget::Course(rect.index));
    }

    layout
        .day_headers
        .iter()
        .find(|header| header.frame().contains(x, y))
        .map(|header| HitTarget::DayHeader(header.index))
}

/// Index → course and column → day label lookup for the current layout.
#[derive(Debug, Clone, Default)]
pub struct SelectionRouter {
    courses: BTreeMap<usize, CourseEvent>,
    day_labels: Vec<String>,
}

impl SelectionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router for a freshly computed layout.
    pub fn from_layout(layout: &TimetableLayout) -> Self {
        let mut router = Self::new();
        router.rebuild(layout);
        router
    }

    /// Replace the lookup tables with the contents of `layout`.
    pub fn rebuild(&mut self, layout: &TimetableLayout) {
        self.courses = layout
            .placed_rects
            .iter()
            .map(|rect| (rect.index, rect.source_event.clone()))
            .collect();
        self.day_labels = layout.day_labels().map(str::to_string).collect();
    }

    /// Course for a tap on the block tagged `index`.
    pub fn on_primary_select(&self, index: usize) -> Option<&CourseEvent> {
        self.lookup(index, "tap")
    }

    /// Course for a long press on the block tagged `index`.
    pub fn on_secondary_select(&self, index: usize) -> Option<&CourseEvent> {
        self.lookup(index, "long press")
    }

    /// Column and label for a tap on a day header.
    pub fn on_day_select(&self, column: usize) -> Option<(usize, &str)> {
        match self.day_labels.get(column) {
            Some(label) => Some((column, label.as_str())),
            None => {
                log::debug!(
                    "Ignoring day tap on column {} ({} columns laid out)",
                    column,
                    self.day_labels.len()
                );
                None
            }
        }
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn day_count(&self) -> usize {
        self.day_labels.len()
    }

    fn lookup(&self, index: usize, gesture: &str) -> Option<&CourseEvent> {
        let course = self.courses.get(&index);
        if course.is_none() {
            log::debug!("Ignoring {} on unknown course index {}", gesture, index);
        }
        course
    }
}
