// Utility modules shared by models and services

pub mod rotate;
pub mod text;
