//! Day-order and time-range resolution.
//! Pure helpers that decide which day sits in which column and which hours
//! the vertical axis spans, ahead of the geometry pass.

mod day_order;
mod hour_range;

pub use day_order::{column_for_day, natural_day_symbols, resolve_day_symbols};
pub use hour_range::{resolve_config_hour_range, resolve_visible_hour_range};
