// Settings module
// Layout configuration for the timetable grid

mod style;

pub use style::{EdgeInsets, RoundOption, TextAlignment};

use serde::{Deserialize, Serialize};

use crate::models::course_day::CourseDay;

/// Everything the layout pass needs besides the course list and the surface
/// width. Every field has a default so partial TOML files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Day shown in the leftmost column
    pub week_start: CourseDay,
    /// Number of day columns (commonly 5-7)
    pub visible_day_count: usize,
    /// Caller-supplied natural (Monday-first, unrotated) day labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_day_symbols: Option<Vec<String>>,

    pub default_min_hour: u32,
    pub default_max_hour: u32,
    /// Derive the visible hour range from the courses instead of the defaults
    pub auto_hour_range: bool,

    pub row_height_per_hour: f32,
    pub header_height: f32,
    pub axis_width: f32,

    pub round_corner: RoundOption,
    pub corner_radius: f32,
    pub full_border: bool,
    pub border_width: f32,
    pub border_color: String,

    pub text_alignment: TextAlignment,
    pub title_font_size: f32,
    pub room_font_size: f32,
    pub symbol_font_size: f32,
    pub symbol_time_font_size: f32,
    pub day_text_color: String,
    pub symbol_background_color: String,
    pub symbol_time_text_color: String,

    /// Title truncation applied to courses without their own limit; 0 = off
    pub max_name_length: usize,
    pub scroll_enabled: bool,

    pub cell_insets: EdgeInsets,
    pub text_insets: EdgeInsets,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            week_start: CourseDay::Monday,
            visible_day_count: 7,
            user_day_symbols: None,
            default_min_hour: 0,
            default_max_hour: 24,
            auto_hour_range: true,
            row_height_per_hour: 60.0,
            header_height: 28.0,
            axis_width: 32.0,
            round_corner: RoundOption::None,
            corner_radius: 0.0,
            full_border: false,
            border_width: 0.0,
            border_color: "#00000000".to_string(),
            text_alignment: TextAlignment::Center,
            title_font_size: 11.0,
            room_font_size: 9.0,
            symbol_font_size: 10.0,
            symbol_time_font_size: 10.0,
            day_text_color: "#000000".to_string(),
            symbol_background_color: "#00000000".to_string(),
            symbol_time_text_color: "#000000".to_string(),
            max_name_length: 0,
            scroll_enabled: true,
            cell_insets: EdgeInsets::ZERO,
            text_insets: EdgeInsets::ZERO,
        }
    }
}

impl LayoutConfig {
    /// Validate the configuration.
    ///
    /// Layout tolerates invalid values (it clamps and guards instead), so
    /// this is used when loading configs from disk and to warn on
    /// `configure`.
    pub fn validate(&self) -> Result<(), String> {
        if self.visible_day_count == 0 || self.visible_day_count > 7 {
            return Err("Visible day count must be between 1 and 7".to_string());
        }

        if self.default_min_hour >= self.default_max_hour {
            return Err("Default min hour must be less than default max hour".to_string());
        }

        if self.default_max_hour > 24 {
            return Err("Default max hour cannot exceed 24".to_string());
        }

        let dimensions = [
            ("Row height per hour", self.row_height_per_hour),
            ("Header height", self.header_height),
            ("Axis width", self.axis_width),
            ("Corner radius", self.corner_radius),
            ("Border width", self.border_width),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and non-negative", name));
            }
        }

        if self.row_height_per_hour == 0.0 {
            return Err("Row height per hour must be greater than zero".to_string());
        }

        self.cell_insets.validate("Cell insets")?;
        self.text_insets.validate("Text insets")?;

        Ok(())
    }

    /// Day count used for arithmetic; zero is treated as one column.
    pub fn effective_day_count(&self) -> usize {
        self.visible_day_count.max(1)
    }
}
