use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{EventInterval, Timestamp, ViewportWindow};

/// Start marker of one event that overlaps the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    /// Position of the event in the source slice.
    pub event_index: usize,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Horizontal position of `start`, in percent of the window width.
    /// Negative for events that began before the window.
    pub percent: f64,
}

/// Trailing part of the window with no event coverage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndCap {
    pub data_end: Timestamp,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Projects every event overlapping `window` onto a start-marker percentage.
///
/// Source order is kept. A zero-width window yields no markers.
#[must_use]
pub fn project_events(events: &[EventInterval], window: ViewportWindow) -> Vec<EventMarker> {
    if window.is_degenerate() {
        return Vec::new();
    }

    #[cfg(feature = "parallel-projection")]
    {
        events
            .par_iter()
            .enumerate()
            .filter_map(|(index, event)| project_single_event(index, *event, window))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        events
            .iter()
            .enumerate()
            .filter_map(|(index, event)| project_single_event(index, *event, window))
            .collect()
    }
}

fn project_single_event(
    index: usize,
    event: EventInterval,
    window: ViewportWindow,
) -> Option<EventMarker> {
    if !event.overlaps(window.start(), window.end()) {
        return None;
    }
    let percent = window.percent_of(event.start)?;
    Some(EventMarker {
        event_index: index,
        start: event.start,
        end: event.end,
        percent,
    })
}

/// Latest event end, or `None` for an empty event set.
#[must_use]
pub fn data_end(events: &[EventInterval]) -> Option<Timestamp> {
    events.iter().map(|event| event.end).max()
}

/// Resolves the no-data region between the last event end and the window end.
///
/// The data end is taken over all events, not only visible ones; without
/// events it defaults to the window end, which never produces a cap.
#[must_use]
pub fn resolve_end_cap(events: &[EventInterval], window: ViewportWindow) -> Option<EndCap> {
    let data_end = data_end(events).unwrap_or(window.end());
    let left_percent = window.percent_of(data_end)?;
    if left_percent >= 100.0 {
        return None;
    }
    let width_percent = (window.end() - data_end) as f64 / window.duration() as f64 * 100.0;
    Some(EndCap {
        data_end,
        left_percent,
        width_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::{project_events, resolve_end_cap};
    use crate::core::{AbsoluteRange, EventInterval, ViewportWindow};

    fn window(start: i64, end: i64) -> ViewportWindow {
        let range = AbsoluteRange::new(0, 10_000).expect("range");
        ViewportWindow::within(range, start, end).expect("window")
    }

    #[test]
    fn projection_keeps_only_overlapping_events_in_source_order() {
        let events = vec![
            EventInterval::new(50, 80),
            EventInterval::new(150, 300),
            EventInterval::new(5_000, 5_100),
            EventInterval::new(90, 120),
        ];
        let markers = project_events(&events, window(100, 1_100));
        let indices: Vec<usize> = markers.iter().map(|m| m.event_index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert!((markers[0].percent - 5.0).abs() <= 1e-12);
        assert!((markers[1].percent + 1.0).abs() <= 1e-12);
    }

    #[test]
    fn end_cap_covers_tail_after_last_event() {
        let events = vec![EventInterval::new(0, 200), EventInterval::new(100, 600)];
        let cap = resolve_end_cap(&events, window(0, 1_000)).expect("cap");
        assert_eq!(cap.data_end, 600);
        assert!((cap.left_percent - 60.0).abs() <= 1e-12);
        assert!((cap.width_percent - 40.0).abs() <= 1e-12);
    }

    #[test]
    fn no_events_means_no_end_cap() {
        assert!(resolve_end_cap(&[], window(0, 1_000)).is_none());
    }

    #[test]
    fn data_ending_after_window_means_no_end_cap() {
        let events = vec![EventInterval::new(0, 2_000)];
        assert!(resolve_end_cap(&events, window(0, 1_000)).is_none());
    }
}
