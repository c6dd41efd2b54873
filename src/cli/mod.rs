//! Headless command-line surface over the timetable component.

mod args;

pub use args::{Cli, Commands, LayoutInput, LogLevel};

use std::io::Write;

use anyhow::{bail, Result};

use crate::models::event::CourseEvent;
use crate::services::course::load_courses;
use crate::services::settings::SettingsService;
use crate::timetable::{Timetable, TimetableDelegate};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Layout { input, compact } => {
            let timetable = build_timetable(&input)?;
            let layout = timetable.layout();
            let json = if compact {
                serde_json::to_string(layout)?
            } else {
                serde_json::to_string_pretty(layout)?
            };
            println!("{}", json);
        }
        Commands::Select { input, x, y, long } => {
            let timetable = build_timetable(&input)?;
            let mut out = std::io::stdout().lock();
            let mut delegate = PrintingDelegate { out: &mut out };
            let handled = if long {
                timetable.long_press_at(x, y, &mut delegate)
            } else {
                timetable.tap_at(x, y, &mut delegate)
            };
            if !handled {
                writeln!(out, "nothing selected at ({}, {})", x, y)?;
            }
        }
        Commands::InitConfig { path, force } => {
            let service = match path {
                Some(path) => SettingsService::new(path),
                None => SettingsService::at_default_location()?,
            };
            if service.path().exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    service.path().display()
                );
            }
            service.reset()?;
            println!("{}", service.path().display());
        }
    }
    Ok(())
}

fn build_timetable(input: &LayoutInput) -> Result<Timetable> {
    let service = match &input.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::at_default_location()?,
    };
    let config = service.get()?;
    let courses = load_courses(&input.events)?;

    let mut timetable = Timetable::new(config);
    timetable.set_grid_width(input.width);
    timetable.set_events(courses);
    Ok(timetable)
}

/// Writes each delegate callback as one line.
struct PrintingDelegate<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> PrintingDelegate<'_, W> {
    fn print_course(&mut self, gesture: &str, course: &CourseEvent) {
        let result = writeln!(
            self.out,
            "{} {} {}-{} {} ({})",
            gesture, course.day, course.start_time, course.end_time, course.title, course.room
        );
        if let Err(e) = result {
            log::warn!("Failed to write {} of {}: {}", gesture, course.title, e);
        }
    }
}

impl<W: Write> TimetableDelegate for PrintingDelegate<'_, W> {
    fn did_select_course(&mut self, course: &CourseEvent) {
        self.print_course("select", course);
    }

    fn did_long_select_course(&mut self, course: &CourseEvent) {
        self.print_course("long-select", course);
    }

    fn did_select_day(&mut self, day_index: usize, day_name: &str) {
        if let Err(e) = writeln!(self.out, "select-day {} {}", day_index, day_name) {
            log::warn!("Failed to write day selection {}: {}", day_name, e);
        }
    }
}
