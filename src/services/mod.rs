// Service module exports

pub mod course;
pub mod layout;
pub mod schedule;
pub mod selection;
pub mod settings;
