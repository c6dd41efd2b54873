// Test fixtures - reusable test data
// Provides consistent courses and configs across all test files

#![allow(dead_code)]

use rust_timetable::models::course_day::CourseDay;
use rust_timetable::models::event::CourseEvent;
use rust_timetable::models::settings::LayoutConfig;

/// Sample layout configs
pub mod configs {
    use super::*;

    /// Monday-first work week, 9:00-18:00 fixed, 60pt rows
    pub fn work_week_fixed() -> LayoutConfig {
        LayoutConfig {
            week_start: CourseDay::Monday,
            visible_day_count: 5,
            default_min_hour: 9,
            default_max_hour: 18,
            auto_hour_range: false,
            row_height_per_hour: 60.0,
            ..LayoutConfig::default()
        }
    }

    /// Full week starting Sunday with the hour range derived from courses
    pub fn sunday_week_auto() -> LayoutConfig {
        LayoutConfig {
            week_start: CourseDay::Sunday,
            visible_day_count: 7,
            ..LayoutConfig::default()
        }
    }
}

/// Sample courses
pub mod courses {
    use super::*;

    /// Wednesday 10:00-11:30
    pub fn algorithms() -> CourseEvent {
        CourseEvent::builder()
            .day(CourseDay::Wednesday)
            .start_time("10:00")
            .end_time("11:30")
            .title("Algorithms")
            .room("E-101")
            .background_color("#4A90D9")
            .build()
            .unwrap()
    }

    /// Monday 9:00-10:00
    pub fn morning_art() -> CourseEvent {
        CourseEvent::new(CourseDay::Monday, "9:00", "10:00", "Art History", "A-12")
    }

    /// Friday 16:15-17:45 with a long title
    pub fn late_seminar() -> CourseEvent {
        CourseEvent::new(
            CourseDay::Friday,
            "16:15",
            "17:45",
            "Seminar in Distributed Systems",
            "S-3",
        )
    }

    /// A course whose start time cannot be parsed
    pub fn broken() -> CourseEvent {
        CourseEvent::new(CourseDay::Tuesday, "bad", "11:00", "Broken", "?")
    }

    pub fn semester() -> Vec<CourseEvent> {
        vec![morning_art(), algorithms(), late_seminar()]
    }
}
