use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ticks::TICK_INLINE_CAPACITY;
use crate::core::{
    EndCap, EventInterval, EventMarker, TickInterval, Timestamp, ViewportWindow,
    aligned_tick_times, project_events, resolve_end_cap,
};

use super::TickLabelConfig;
use super::tick_label_format::format_tick_label;

/// Labeled ruler gridline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub timestamp: Timestamp,
    pub label: String,
    /// Horizontal position in percent of the window width.
    pub percent: f64,
}

pub type TickMarks = SmallVec<[TickMark; TICK_INLINE_CAPACITY]>;

/// Everything a renderer needs for one window: ruler ticks, event markers
/// and the trailing no-data region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineScene {
    pub window: ViewportWindow,
    pub interval: TickInterval,
    pub ticks: TickMarks,
    pub markers: Vec<EventMarker>,
    pub end_cap: Option<EndCap>,
}

/// Derives ticks and projections for `window` over `events`.
///
/// Pure: equal inputs give equal scenes. Returns `None` for a zero-width
/// window, which has no defined projection.
#[must_use]
pub fn build_timeline_scene(
    window: ViewportWindow,
    events: &[EventInterval],
    label_config: TickLabelConfig,
) -> Option<TimelineScene> {
    if window.is_degenerate() {
        return None;
    }

    let interval = TickInterval::for_view_duration(window.duration());
    let ticks = aligned_tick_times(window, interval)
        .into_iter()
        .filter_map(|timestamp| {
            let percent = window.percent_of(timestamp)?;
            Some(TickMark {
                timestamp,
                label: format_tick_label(timestamp, interval, label_config),
                percent,
            })
        })
        .collect();

    Some(TimelineScene {
        window,
        interval,
        ticks,
        markers: project_events(events, window),
        end_cap: resolve_end_cap(events, window),
    })
}

#[cfg(test)]
mod tests {
    use super::build_timeline_scene;
    use crate::api::TickLabelConfig;
    use crate::core::primitives::{MS_PER_DAY, MS_PER_HOUR};
    use crate::core::{AbsoluteRange, EventInterval, TickInterval, ViewportWindow};

    #[test]
    fn degenerate_window_is_not_renderable() {
        let range = AbsoluteRange::new(10, 10).expect("range");
        let scene = build_timeline_scene(ViewportWindow::full(range), &[], TickLabelConfig::default());
        assert!(scene.is_none());
    }

    #[test]
    fn tick_percentages_follow_window_projection() {
        let range = AbsoluteRange::new(0, 4 * MS_PER_HOUR).expect("range");
        let scene = build_timeline_scene(
            ViewportWindow::full(range),
            &[EventInterval::new(MS_PER_HOUR, 2 * MS_PER_HOUR)],
            TickLabelConfig::default(),
        )
        .expect("scene");

        assert_eq!(scene.interval, TickInterval::OneHour);
        let percents: Vec<f64> = scene.ticks.iter().map(|tick| tick.percent).collect();
        assert_eq!(percents, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(scene.ticks[0].label, "00:00\nJan 1");
        assert_eq!(scene.ticks[1].label, "01:00");
        assert_eq!(scene.markers.len(), 1);
        let cap = scene.end_cap.expect("cap after last event");
        assert!((cap.left_percent - 50.0).abs() <= 1e-12);
    }

    #[test]
    fn two_day_window_uses_twelve_hour_ticks() {
        let range = AbsoluteRange::new(0, 2 * MS_PER_DAY).expect("range");
        let scene = build_timeline_scene(ViewportWindow::full(range), &[], TickLabelConfig::default())
            .expect("scene");
        assert_eq!(scene.interval, TickInterval::TwelveHours);
        assert_eq!(scene.ticks.len(), 5);
    }
}
