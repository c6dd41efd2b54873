// Delegate dispatch tests using mocked delegates

use mockall::mock;
use rust_timetable::models::course_day::CourseDay;
use rust_timetable::models::event::CourseEvent;
use rust_timetable::models::settings::LayoutConfig;
use rust_timetable::timetable::{Timetable, TimetableDelegate};

mock! {
    pub Delegate {}

    impl TimetableDelegate for Delegate {
        fn did_select_course(&mut self, course: &CourseEvent);
        fn did_long_select_course(&mut self, course: &CourseEvent);
        fn did_select_day(&mut self, day_index: usize, day_name: &str);
    }
}

fn timetable() -> Timetable {
    let mut timetable = Timetable::new(LayoutConfig {
        visible_day_count: 5,
        ..LayoutConfig::default()
    });
    timetable.set_grid_width(532.0);
    timetable.set_events(vec![
        CourseEvent::new(CourseDay::Monday, "9:00", "10:00", "Art", "A1"),
        CourseEvent::new(CourseDay::Wednesday, "10:00", "11:30", "Math", "B1"),
    ]);
    timetable
}

#[test]
fn test_tap_calls_did_select_course_once() {
    let timetable = timetable();
    let mut delegate = MockDelegate::new();
    delegate
        .expect_did_select_course()
        .withf(|course| course.title == "Math")
        .times(1)
        .return_const(());
    delegate.expect_did_long_select_course().times(0);
    delegate.expect_did_select_day().times(0);

    assert!(timetable.select_course(1, &mut delegate));
}

#[test]
fn test_long_press_calls_did_long_select_course() {
    let timetable = timetable();
    let mut delegate = MockDelegate::new();
    delegate
        .expect_did_long_select_course()
        .withf(|course| course.title == "Art" && course.room == "A1")
        .times(1)
        .return_const(());
    delegate.expect_did_select_course().times(0);

    // Monday column starts at x = 32; the range starts at 9:00 below a 28pt header
    assert!(timetable.long_press_at(40.0, 40.0, &mut delegate));
}

#[test]
fn test_out_of_range_selection_triggers_nothing() {
    let timetable = timetable();
    let mut delegate = MockDelegate::new();
    delegate.expect_did_select_course().times(0);
    delegate.expect_did_long_select_course().times(0);
    delegate.expect_did_select_day().times(0);

    assert!(!timetable.select_course(2, &mut delegate));
    assert!(!timetable.long_select_course(99, &mut delegate));
    assert!(!timetable.select_day(5, &mut delegate));
}

#[test]
fn test_header_tap_calls_did_select_day() {
    let timetable = timetable();
    let mut delegate = MockDelegate::new();
    delegate
        .expect_did_select_day()
        .withf(|day_index, day_name| *day_index == 4 && day_name == "Fri")
        .times(1)
        .return_const(());

    // Friday header spans x 432..532
    assert!(timetable.tap_at(500.0, 10.0, &mut delegate));
}
