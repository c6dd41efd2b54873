// Event module
// Course event model placed on the weekly timetable

mod clock_time;

pub use clock_time::{ClockTime, ClockTimeError};

use serde::{Deserialize, Serialize};

use crate::models::course_day::CourseDay;
use crate::utils::text::truncated;

/// Label text color used when a course does not carry its own.
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

/// A scheduled course shown as one block on the timetable.
///
/// Times are kept as the raw strings the caller supplied. Layout parses them
/// on every pass and skips the course if either one is malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEvent {
    pub day: CourseDay,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    #[serde(default)]
    pub room: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_name_length: Option<usize>,
}

impl CourseEvent {
    /// Create a course with the required fields and no styling.
    ///
    /// # Examples
    /// ```
    /// use rust_timetable::models::course_day::CourseDay;
    /// use rust_timetable::models::event::CourseEvent;
    ///
    /// let course = CourseEvent::new(CourseDay::Monday, "9:00", "10:30", "Algebra", "B-204");
    /// assert!(course.time_span().is_some());
    /// ```
    pub fn new(
        day: CourseDay,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        title: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
            title: title.into(),
            room: room.into(),
            background_color: None,
            text_color: None,
            max_name_length: None,
        }
    }

    /// Create a builder for constructing courses with optional fields
    pub fn builder() -> CourseEventBuilder {
        CourseEventBuilder::new()
    }

    pub fn start_clock(&self) -> Result<ClockTime, ClockTimeError> {
        ClockTime::parse(&self.start_time)
    }

    pub fn end_clock(&self) -> Result<ClockTime, ClockTimeError> {
        ClockTime::parse(&self.end_time)
    }

    /// Parsed start and end, or `None` if either string is malformed.
    pub fn time_span(&self) -> Option<(ClockTime, ClockTime)> {
        Some((self.start_clock().ok()?, self.end_clock().ok()?))
    }

    /// Title shortened to the course's own limit, or to `fallback_limit`
    /// when the course has none. A limit of zero leaves the title intact.
    pub fn display_title(&self, fallback_limit: usize) -> String {
        let limit = self.max_name_length.unwrap_or(fallback_limit);
        if limit > 0 {
            truncated(&self.title, limit)
        } else {
            self.title.clone()
        }
    }

    pub fn label_text_color(&self) -> &str {
        self.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR)
    }

    /// Validate the course.
    ///
    /// Layout does not require a valid course; this is for callers that want
    /// to reject bad input before handing it over.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Course title cannot be empty".to_string());
        }

        let start = self
            .start_clock()
            .map_err(|e| format!("Invalid start time: {}", e))?;
        let end = self
            .end_clock()
            .map_err(|e| format!("Invalid end time: {}", e))?;

        if end <= start {
            return Err("Course end time must be after start time".to_string());
        }

        Ok(())
    }
}

/// Builder for creating courses with optional fields
pub struct CourseEventBuilder {
    day: Option<CourseDay>,
    start_time: Option<String>,
    end_time: Option<String>,
    title: Option<String>,
    room: String,
    background_color: Option<String>,
    text_color: Option<String>,
    max_name_length: Option<usize>,
}

impl CourseEventBuilder {
    pub fn new() -> Self {
        Self {
            day: None,
            start_time: None,
            end_time: None,
            title: None,
            room: String::new(),
            background_color: None,
            text_color: None,
            max_name_length: None,
        }
    }

    pub fn day(mut self, day: CourseDay) -> Self {
        self.day = Some(day);
        self
    }

    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn max_name_length(mut self, length: usize) -> Self {
        self.max_name_length = Some(length);
        self
    }

    /// Build the course, validating times and title
    pub fn build(self) -> Result<CourseEvent, String> {
        let day = self.day.ok_or("Course day is required")?;
        let start_time = self.start_time.ok_or("Course start time is required")?;
        let end_time = self.end_time.ok_or("Course end time is required")?;
        let title = self.title.ok_or("Course title is required")?;

        let course = CourseEvent {
            day,
            start_time,
            end_time,
            title,
            room: self.room,
            background_color: self.background_color,
            text_color: self.text_color,
            max_name_length: self.max_name_length,
        };

        course.validate()?;
        Ok(course)
    }
}

impl Default for CourseEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
