//! Stateful timetable component.
//!
//! Owns the current configuration, course list and surface width. Every
//! mutation runs exactly one layout pass and rebuilds the selection table,
//! so the rectangles handed to the surface and the indices it reports back
//! always agree.

mod delegate;

pub use delegate::{TimetableDataSource, TimetableDelegate};

use crate::models::course_day::CourseDay;
use crate::models::event::CourseEvent;
use crate::models::layout::TimetableLayout;
use crate::models::settings::LayoutConfig;
use crate::services::layout::layout;
use crate::services::selection::{hit_test, HitTarget, SelectionRouter};

#[derive(Debug, Clone)]
pub struct Timetable {
    config: LayoutConfig,
    events: Vec<CourseEvent>,
    grid_width: f32,
    layout: TimetableLayout,
    router: SelectionRouter,
}

impl Timetable {
    pub fn new(config: LayoutConfig) -> Self {
        let mut timetable = Self {
            config,
            events: Vec::new(),
            grid_width: 0.0,
            layout: TimetableLayout::empty(),
            router: SelectionRouter::new(),
        };
        timetable.relayout();
        timetable
    }

    /// Replace the whole configuration. Invalid values are logged and
    /// applied anyway; the layout pass clamps what it cannot use.
    pub fn configure(&mut self, config: LayoutConfig) {
        if let Err(reason) = config.validate() {
            log::warn!("Applying questionable timetable config: {}", reason);
        }
        self.config = config;
        self.relayout();
    }

    pub fn set_events(&mut self, events: Vec<CourseEvent>) {
        self.events = events;
        self.relayout();
    }

    /// Pull day labels and courses from `source` and lay out once.
    pub fn reload_data(&mut self, source: &dyn TimetableDataSource) {
        let day_count = source.number_of_days();
        let labels: Vec<String> = (0..day_count)
            .map(|i| {
                source
                    .day_symbol(i)
                    .unwrap_or_else(|| CourseDay::ALL[i % 7].short_symbol().to_string())
            })
            .collect();

        self.config.visible_day_count = day_count;
        self.config.user_day_symbols = Some(labels);
        self.events = source.course_items();
        self.relayout();
    }

    /// Report the measured surface width. Only a changed width re-lays out.
    pub fn set_grid_width(&mut self, width: f32) {
        if width == self.grid_width {
            return;
        }
        self.grid_width = width;
        self.relayout();
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn events(&self) -> &[CourseEvent] {
        &self.events
    }

    pub fn grid_width(&self) -> f32 {
        self.grid_width
    }

    pub fn layout(&self) -> &TimetableLayout {
        &self.layout
    }

    /// Rotated labels of the visible columns.
    pub fn day_symbols(&self) -> Vec<String> {
        self.layout.day_labels().map(str::to_string).collect()
    }

    /// First hour shown on the time axis.
    pub fn minimum_course_start_time(&self) -> u32 {
        self.layout.hour_range.min_hour
    }

    /// Forward a tap on the block tagged `index`. Returns whether the
    /// delegate was called.
    pub fn select_course(&self, index: usize, delegate: &mut dyn TimetableDelegate) -> bool {
        match self.router.on_primary_select(index) {
            Some(course) => {
                delegate.did_select_course(course);
                true
            }
            None => false,
        }
    }

    pub fn long_select_course(&self, index: usize, delegate: &mut dyn TimetableDelegate) -> bool {
        match self.router.on_secondary_select(index) {
            Some(course) => {
                delegate.did_long_select_course(course);
                true
            }
            None => false,
        }
    }

    pub fn select_day(&self, column: usize, delegate: &mut dyn TimetableDelegate) -> bool {
        match self.router.on_day_select(column) {
            Some((index, name)) => {
                delegate.did_select_day(index, name);
                true
            }
            None => false,
        }
    }

    /// Resolve a raw tap coordinate and forward it.
    pub fn tap_at(&self, x: f32, y: f32, delegate: &mut dyn TimetableDelegate) -> bool {
        match hit_test(&self.layout, x, y) {
            Some(HitTarget::Course(index)) => self.select_course(index, delegate),
            Some(HitTarget::DayHeader(column)) => self.select_day(column, delegate),
            None => false,
        }
    }

    /// Resolve a raw long-press coordinate. Day headers ignore long presses.
    pub fn long_press_at(&self, x: f32, y: f32, delegate: &mut dyn TimetableDelegate) -> bool {
        match hit_test(&self.layout, x, y) {
            Some(HitTarget::Course(index)) => self.long_select_course(index, delegate),
            _ => false,
        }
    }

    fn relayout(&mut self) {
        self.layout = layout(&self.events, &self.config, self.grid_width);
        self.router.rebuild(&self.layout);
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
