use timeline_zoom::api::{LabelTimeZone, TimelineEngine, TimelineEngineConfig};
use timeline_zoom::core::Viewport;
use timeline_zoom::core::primitives::{MS_PER_DAY, MS_PER_HOUR};
use timeline_zoom::render::NullRenderer;
use timeline_zoom::selector::{CalendarCell, RangeSelector, SelectionPhase, YearMonth};

// 2024-03-01T00:00:00Z
const MAR_1_2024: i64 = 1_704_067_200_000 + 60 * MS_PER_DAY;

fn march_2024() -> RangeSelector {
    RangeSelector::new(YearMonth::new(2024, 3).expect("month"))
}

#[test]
fn two_clicks_emit_whole_day_range() {
    let mut selector = march_2024();
    assert_eq!(selector.click_day(5).expect("click"), None);
    let range = selector
        .click_day(8)
        .expect("click")
        .expect("completed range");

    assert_eq!(range.start(), MAR_1_2024 + 4 * MS_PER_DAY);
    assert_eq!(range.end(), MAR_1_2024 + 8 * MS_PER_DAY - 1);
    assert_eq!(selector.phase(), SelectionPhase::From);
}

#[test]
fn earlier_second_click_is_swapped() {
    let mut selector = march_2024();
    selector.click_day(20).expect("click");
    let range = selector
        .click_day(10)
        .expect("click")
        .expect("completed range");

    assert!(range.start() <= range.end());
    assert_eq!(range.start(), MAR_1_2024 + 9 * MS_PER_DAY);
    assert_eq!(range.end(), MAR_1_2024 + 20 * MS_PER_DAY - 1);
    assert_eq!(selector.from_date().map(|date| date.to_string()), Some("2024-03-10".to_owned()));
    assert_eq!(selector.to_date().map(|date| date.to_string()), Some("2024-03-20".to_owned()));
}

#[test]
fn same_day_twice_selects_that_day() {
    let mut selector = march_2024();
    selector.click_day(5).expect("click");
    let range = selector.click_day(5).expect("click").expect("range");
    assert_eq!(range.span(), MS_PER_DAY - 1);
}

#[test]
fn day_boundaries_follow_selector_timezone() {
    let mut selector =
        march_2024().with_timezone(LabelTimeZone::FixedOffsetMinutes { minutes: 120 });
    selector.click_day(5).expect("click");
    let range = selector.click_day(5).expect("click").expect("range");

    assert_eq!(range.start(), MAR_1_2024 + 4 * MS_PER_DAY - 2 * MS_PER_HOUR);
    assert_eq!(range.end(), MAR_1_2024 + 5 * MS_PER_DAY - 2 * MS_PER_HOUR - 1);
}

#[test]
fn third_click_starts_a_new_selection() {
    let mut selector = march_2024();
    selector.click_day(5).expect("click");
    selector.click_day(8).expect("click");

    assert_eq!(selector.click_day(12).expect("click"), None);
    assert_eq!(selector.to_date(), None);
    assert_eq!(selector.phase(), SelectionPhase::To);
    assert_eq!(selector.selected_range().expect("range"), None);
}

#[test]
fn calendar_grid_starts_on_sunday_and_flags_selection() {
    let mut selector = march_2024();
    selector.click_day(5).expect("click");
    selector.click_day(8).expect("click");

    let cells = selector.calendar_cells();
    // 2024-03-01 is a Friday.
    assert_eq!(cells.len(), 5 + 31);
    assert!(cells[..5].iter().all(|cell| *cell == CalendarCell::Blank));

    let day = |n: u32| cells[4 + n as usize];
    assert_eq!(
        day(5),
        CalendarCell::Day {
            day: 5,
            selected: true,
            in_range: false,
            start_node: false
        }
    );
    assert!(matches!(day(6), CalendarCell::Day { in_range: true, .. }));
    assert!(matches!(day(7), CalendarCell::Day { in_range: true, .. }));
    assert!(matches!(day(8), CalendarCell::Day { selected: true, .. }));
    assert!(matches!(
        day(9),
        CalendarCell::Day {
            selected: false,
            in_range: false,
            ..
        }
    ));
}

#[test]
fn month_navigation_rolls_over_years() {
    let mut selector = RangeSelector::new(YearMonth::new(2024, 12).expect("month"));
    assert_eq!(selector.month_label(), "December 2024");

    selector.next_month().expect("next");
    assert_eq!(selector.month_label(), "January 2025");

    selector.previous_month().expect("previous");
    selector.previous_month().expect("previous");
    assert_eq!(selector.month_label(), "November 2024");

    selector.shift_months(-23).expect("shift");
    assert_eq!(selector.month(), YearMonth::new(2022, 12).expect("month"));
}

#[test]
fn selection_survives_month_navigation() {
    let mut selector = RangeSelector::new(YearMonth::new(2024, 1).expect("month"));
    selector.click_day(30).expect("click");
    selector.next_month().expect("next");
    let range = selector.click_day(2).expect("click").expect("range");

    // 2024-01-30 .. 2024-02-02
    assert_eq!(range.start(), 1_704_067_200_000 + 29 * MS_PER_DAY);
    assert_eq!(range.end(), 1_704_067_200_000 + 33 * MS_PER_DAY - 1);
}

#[test]
fn reset_clears_selection() {
    let mut selector = march_2024();
    selector.click_day(3).expect("click");
    selector.reset();

    assert_eq!(selector.from_date(), None);
    assert_eq!(selector.phase(), SelectionPhase::From);
    assert!(
        selector
            .calendar_cells()
            .iter()
            .all(|cell| !matches!(cell, CalendarCell::Day { selected: true, .. }))
    );
}

#[test]
fn selected_range_initializes_engine_window() {
    let mut selector = march_2024();
    selector.click_day(1).expect("click");
    let range = selector.click_day(3).expect("click").expect("range");

    let config = TimelineEngineConfig::new(Viewport::new(800, 120));
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_range_from(range);

    let window = engine.window().expect("window");
    assert_eq!(window.start(), range.start());
    assert_eq!(window.end(), range.end());
}
