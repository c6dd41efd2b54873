// Rust Timetable Library
// Weekly course timetable layout, day ordering and selection routing

pub mod cli;
pub mod models;
pub mod services;
pub mod timetable;
pub mod utils;
