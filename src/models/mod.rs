// Module exports for models

pub mod course_day;
pub mod event;
pub mod layout;
pub mod settings;
