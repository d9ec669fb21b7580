use approx::assert_relative_eq;
use timeline_zoom::api::{
    LabelLocale, LabelTimeZone, TickLabelConfig, TimelineEngine, TimelineEngineConfig,
    build_timeline_scene,
};
use timeline_zoom::core::primitives::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};
use timeline_zoom::core::{AbsoluteRange, TickInterval, Viewport, ViewportWindow};
use timeline_zoom::render::NullRenderer;

// 2024-01-01T00:00:00Z
const JAN_1_2024: i64 = 1_704_067_200_000;

fn labels(window: ViewportWindow, config: TickLabelConfig) -> Vec<String> {
    build_timeline_scene(window, &[], config)
        .expect("scene")
        .ticks
        .into_iter()
        .map(|tick| tick.label)
        .collect()
}

#[test]
fn three_day_range_gets_daily_ticks_on_each_midnight() {
    let config = TimelineEngineConfig::new(Viewport::new(900, 120));
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_range(JAN_1_2024, JAN_1_2024 + 3 * MS_PER_DAY)
        .expect("range");

    let scene = engine.scene().expect("scene");
    assert_eq!(scene.interval, TickInterval::OneDay);

    let tick_labels: Vec<&str> = scene.ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(tick_labels, ["Jan 1", "Jan 2", "Jan 3", "Jan 4"]);

    let percents: Vec<f64> = scene.ticks.iter().map(|tick| tick.percent).collect();
    assert_relative_eq!(percents[0], 0.0);
    assert_relative_eq!(percents[1], 100.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(percents[2], 200.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(percents[3], 100.0);
}

#[test]
fn interval_thresholds() {
    let cases = [
        (MS_PER_HOUR, TickInterval::OneHour),
        (4 * MS_PER_HOUR, TickInterval::OneHour),
        (4 * MS_PER_HOUR + 1, TickInterval::ThreeHours),
        (8 * MS_PER_HOUR, TickInterval::ThreeHours),
        (8 * MS_PER_HOUR + 1, TickInterval::SixHours),
        (36 * MS_PER_HOUR, TickInterval::SixHours),
        (36 * MS_PER_HOUR + 1, TickInterval::TwelveHours),
        (3 * MS_PER_DAY - 1, TickInterval::TwelveHours),
        (3 * MS_PER_DAY, TickInterval::OneDay),
        (30 * MS_PER_DAY, TickInterval::OneDay),
    ];
    for (duration, expected) in cases {
        assert_eq!(
            TickInterval::for_view_duration(duration),
            expected,
            "duration {duration}"
        );
    }
}

#[test]
fn one_day_window_uses_six_hour_ticks_with_midnight_dates() {
    let range = AbsoluteRange::new(JAN_1_2024, JAN_1_2024 + MS_PER_DAY).expect("range");
    assert_eq!(
        labels(ViewportWindow::full(range), TickLabelConfig::default()),
        ["00:00\nJan 1", "06:00", "12:00", "18:00", "00:00\nJan 2"]
    );
}

#[test]
fn ticks_are_aligned_to_interval_multiples_inside_window() {
    let range = AbsoluteRange::new(JAN_1_2024, JAN_1_2024 + MS_PER_DAY).expect("range");
    let window = ViewportWindow::within(
        range,
        JAN_1_2024 + 30 * MS_PER_MINUTE,
        JAN_1_2024 + 3 * MS_PER_HOUR + 30 * MS_PER_MINUTE,
    )
    .expect("window");

    let scene = build_timeline_scene(window, &[], TickLabelConfig::default()).expect("scene");
    assert_eq!(scene.interval, TickInterval::OneHour);

    let timestamps: Vec<i64> = scene.ticks.iter().map(|tick| tick.timestamp).collect();
    assert_eq!(
        timestamps,
        [
            JAN_1_2024 + MS_PER_HOUR,
            JAN_1_2024 + 2 * MS_PER_HOUR,
            JAN_1_2024 + 3 * MS_PER_HOUR
        ]
    );
    assert!(timestamps.iter().all(|t| t % MS_PER_HOUR == 0));
    assert_relative_eq!(scene.ticks[0].percent, 100.0 / 6.0, epsilon = 1e-9);
    assert_eq!(scene.ticks[0].label, "01:00");
}

#[test]
fn fixed_offset_timezone_shifts_labels_only() {
    let range = AbsoluteRange::new(JAN_1_2024, JAN_1_2024 + 3 * MS_PER_HOUR).expect("range");
    let window = ViewportWindow::full(range);
    let config = TickLabelConfig::default()
        .with_timezone(LabelTimeZone::FixedOffsetMinutes { minutes: 120 });

    assert_eq!(labels(window, config), ["02:00", "03:00", "04:00", "05:00"]);

    let utc = build_timeline_scene(window, &[], TickLabelConfig::default()).expect("scene");
    let shifted = build_timeline_scene(window, &[], config).expect("scene");
    let utc_times: Vec<i64> = utc.ticks.iter().map(|tick| tick.timestamp).collect();
    let shifted_times: Vec<i64> = shifted.ticks.iter().map(|tick| tick.timestamp).collect();
    assert_eq!(utc_times, shifted_times);
}

#[test]
fn spanish_locale_puts_day_first() {
    let range = AbsoluteRange::new(JAN_1_2024, JAN_1_2024 + 4 * MS_PER_DAY).expect("range");
    let config = TickLabelConfig::default().with_locale(LabelLocale::EsEs);
    let tick_labels = labels(ViewportWindow::full(range), config);
    assert_eq!(tick_labels.first().map(String::as_str), Some("1 ene"));
    assert_eq!(tick_labels.last().map(String::as_str), Some("5 ene"));
}

#[test]
fn label_config_change_invalidates_cached_scene() {
    let config = TimelineEngineConfig::new(Viewport::new(900, 120));
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_range(JAN_1_2024, JAN_1_2024 + 3 * MS_PER_DAY)
        .expect("range");

    let first = engine.scene().expect("scene");
    let again = engine.scene().expect("scene");
    assert!(std::sync::Arc::ptr_eq(&first, &again));
    assert_eq!(engine.scene_cache_stats().hits, 1);

    engine.set_label_config(TickLabelConfig::default().with_locale(LabelLocale::EsEs));
    let relabeled = engine.scene().expect("scene");
    assert_eq!(relabeled.ticks[0].label, "1 ene");
    assert_eq!(engine.scene_cache_stats().misses, 2);
}
