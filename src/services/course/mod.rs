//! Course list files.
//!
//! Courses are stored as JSON, either a bare array or an object with a
//! `courses` array, so exports from other tools can be loaded unchanged.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::models::event::CourseEvent;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CourseFile {
    Bare(Vec<CourseEvent>),
    Wrapped { courses: Vec<CourseEvent> },
}

#[derive(Serialize)]
struct CourseFileRef<'a> {
    courses: &'a [CourseEvent],
}

pub fn parse_courses(json: &str) -> Result<Vec<CourseEvent>, SerdeError> {
    let file: CourseFile = serde_json::from_str(json)?;
    Ok(match file {
        CourseFile::Bare(courses) | CourseFile::Wrapped { courses } => courses,
    })
}

pub fn load_courses(path: &Path) -> Result<Vec<CourseEvent>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read courses from {}", path.display()))?;
    let courses = parse_courses(&data).map_err(|err| map_deser_error(err, path))?;

    let malformed = courses.iter().filter(|c| c.time_span().is_none()).count();
    if malformed > 0 {
        log::warn!(
            "{} of {} courses in {} have malformed times and will not be shown",
            malformed,
            courses.len(),
            path.display()
        );
    }

    Ok(courses)
}

pub fn save_courses(path: &Path, courses: &[CourseEvent]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(&CourseFileRef { courses })?;
    fs::write(path, data)
        .with_context(|| format!("failed to write courses to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize courses from {}",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course_day::CourseDay;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bare_array() {
        let json = r##"[
            {"day": "monday", "start_time": "9:00", "end_time": "10:00", "title": "Art"},
            {"day": "friday", "start_time": "13:00", "end_time": "15:00", "title": "Lab",
             "room": "L2", "background_color": "#FF8800", "max_name_length": 2}
        ]"##;
        let courses = parse_courses(json).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].day, CourseDay::Friday);
        assert_eq!(courses[1].max_name_length, Some(2));
    }

    #[test]
    fn test_parse_wrapped_object() {
        let json = r#"{"courses": [
            {"day": "sunday", "start_time": "8:00", "end_time": "9:00", "title": "Choir"}
        ]}"#;
        let courses = parse_courses(json).unwrap();
        assert_eq!(courses[0].title, "Choir");
    }

    #[test]
    fn test_parse_rejects_unknown_day() {
        let json = r#"[{"day": "funday", "start_time": "8:00", "end_time": "9:00", "title": "X"}]"#;
        assert!(parse_courses(json).is_err());
    }

    #[test]
    fn test_malformed_times_still_load() {
        let json = r#"[{"day": "monday", "start_time": "bad", "end_time": "9:00", "title": "X"}]"#;
        assert_eq!(parse_courses(json).unwrap().len(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("courses.json");
        let courses = vec![
            CourseEvent::new(CourseDay::Tuesday, "10:00", "11:00", "Databases", "C-3"),
            CourseEvent::new(CourseDay::Thursday, "14:00", "15:30", "Graphics", "D-1"),
        ];

        save_courses(&path, &courses).unwrap();
        assert_eq!(load_courses(&path).unwrap(), courses);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        assert!(load_courses(&dir.path().join("absent.json")).is_err());
    }
}
