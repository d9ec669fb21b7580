use std::sync::Arc;

use crate::core::{AbsoluteRange, EventInterval, ViewportWindow};

/// Range and window of an initialized engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ViewportState {
    pub(super) range: AbsoluteRange,
    pub(super) window: ViewportWindow,
}

impl ViewportState {
    pub(super) fn full(range: AbsoluteRange) -> Self {
        Self {
            range,
            window: ViewportWindow::full(range),
        }
    }
}

/// Domain data owned by the engine.
///
/// `viewport == None` is the unavailable state: no valid range has been
/// loaded, or the last one was rejected.
#[derive(Debug, Clone)]
pub(super) struct TimelineModel {
    pub(super) viewport: Option<ViewportState>,
    pub(super) events: Arc<[EventInterval]>,
    /// Bumped on every event-set replacement; part of the scene cache key.
    pub(super) events_revision: u64,
}

impl Default for TimelineModel {
    fn default() -> Self {
        Self {
            viewport: None,
            events: Arc::from(Vec::new()),
            events_revision: 0,
        }
    }
}

impl TimelineModel {
    pub(super) fn replace_events(&mut self, events: Vec<EventInterval>) {
        self.events = Arc::from(events);
        self.events_revision = self.events_revision.wrapping_add(1);
    }
}
