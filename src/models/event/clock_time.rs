use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use thiserror::Error;

/// Wall-clock time of day as written on a course, e.g. `9:05` or `14:30`.
///
/// Hours run 0-24 and minutes 0-59. `24:00` is accepted as an end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    #[error("expected a time in H:MM form, got {0:?}")]
    Shape(String),
    #[error("{part:?} in {input:?} is not a non-negative integer")]
    Number { input: String, part: String },
    #[error("{input:?} is outside 0:00-24:00")]
    Range { input: String },
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Parse `H:MM`. The string must split into exactly two integer parts
    /// that form a time between `0:00` and `24:00`.
    pub fn parse(input: &str) -> Result<Self, ClockTimeError> {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 2 {
            return Err(ClockTimeError::Shape(input.to_string()));
        }

        let number = |part: &str| {
            part.parse::<u32>().map_err(|_| ClockTimeError::Number {
                input: input.to_string(),
                part: part.to_string(),
            })
        };

        let hour = number(parts[0])?;
        let minute = number(parts[1])?;
        if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
            return Err(ClockTimeError::Range {
                input: input.to_string(),
            });
        }

        Ok(Self { hour, minute })
    }

    /// Hours since midnight including the minute fraction.
    pub fn fractional_hours(&self) -> f32 {
        self.hour as f32 + self.minute as f32 / 60.0
    }

    /// `None` for `24:00` and other values chrono cannot represent.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;
        Self::new(time.hour(), time.minute())
    }
}
