//! Collaborator traits implemented by the host application.

use crate::models::event::CourseEvent;

/// Receives selections resolved by the timetable.
pub trait TimetableDelegate {
    fn did_select_course(&mut self, course: &CourseEvent);

    fn did_long_select_course(&mut self, course: &CourseEvent);

    fn did_select_day(&mut self, day_index: usize, day_name: &str);
}

/// Supplies day labels and courses on `Timetable::reload_data`.
pub trait TimetableDataSource {
    fn number_of_days(&self) -> usize;

    /// Natural (unrotated, Monday-first) label for column `index`. `None`
    /// falls back to the short English weekday symbol.
    fn day_symbol(&self, _index: usize) -> Option<String> {
        None
    }

    fn course_items(&self) -> Vec<CourseEvent>;
}
