// Course day module
// Weekday identifiers used to place courses into columns

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Day of the week a course takes place on.
///
/// Raw values run Monday = 1 through Sunday = 7. The raw value is what the
/// column rotation arithmetic works on, so the discriminants are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl CourseDay {
    /// All days in natural (Monday-first) order.
    pub const ALL: [CourseDay; 7] = [
        CourseDay::Monday,
        CourseDay::Tuesday,
        CourseDay::Wednesday,
        CourseDay::Thursday,
        CourseDay::Friday,
        CourseDay::Saturday,
        CourseDay::Sunday,
    ];

    pub fn raw_value(self) -> u8 {
        self as u8
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1..=7 => Some(Self::ALL[(raw - 1) as usize]),
            _ => None,
        }
    }

    /// Short English symbol ("Mon", "Tue", ...).
    pub fn short_symbol(self) -> &'static str {
        match self {
            CourseDay::Monday => "Mon",
            CourseDay::Tuesday => "Tue",
            CourseDay::Wednesday => "Wed",
            CourseDay::Thursday => "Thu",
            CourseDay::Friday => "Fri",
            CourseDay::Saturday => "Sat",
            CourseDay::Sunday => "Sun",
        }
    }
}

impl Default for CourseDay {
    fn default() -> Self {
        Self::Monday
    }
}

impl From<Weekday> for CourseDay {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<CourseDay> for Weekday {
    fn from(day: CourseDay) -> Self {
        match day {
            CourseDay::Monday => Weekday::Mon,
            CourseDay::Tuesday => Weekday::Tue,
            CourseDay::Wednesday => Weekday::Wed,
            CourseDay::Thursday => Weekday::Thu,
            CourseDay::Friday => Weekday::Fri,
            CourseDay::Saturday => Weekday::Sat,
            CourseDay::Sunday => Weekday::Sun,
        }
    }
}

impl std::fmt::Display for CourseDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_symbol())
    }
}
