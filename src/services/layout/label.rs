use crate::models::event::CourseEvent;
use crate::models::layout::CourseLabel;
use crate::models::settings::LayoutConfig;

/// Label for a course block of the given size.
///
/// The label frame is the block shrunk by the text insets. The title is
/// truncated before it is joined with the room name.
pub fn course_label(
    course: &CourseEvent,
    config: &LayoutConfig,
    block_width: f32,
    block_height: f32,
) -> CourseLabel {
    let insets = config.text_insets;
    let title = course.display_title(config.max_name_length);
    let title_char_count = title.chars().count();
    let text = format!("{}\n{}", title, course.room);

    CourseLabel {
        x: insets.left,
        y: insets.top,
        width: (block_width - insets.horizontal()).max(0.0),
        height: (block_height - insets.vertical()).max(0.0),
        title,
        room: course.room.clone(),
        text,
        title_char_count,
        alignment: config.text_alignment,
        title_font_size: config.title_font_size,
        room_font_size: config.room_font_size,
        text_color: course.label_text_color().to_string(),
    }
}
