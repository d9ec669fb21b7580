use tracing::{debug, warn};

use crate::core::{AbsoluteRange, EventInterval, Timestamp, ViewportWindow};
use crate::error::TimelineResult;
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::TimelineEngine;
use super::timeline_model::ViewportState;

impl<R: Renderer> TimelineEngine<R> {
    /// Loads a new absolute range and shows it in full.
    ///
    /// Zoom, pan and the previous event set are discarded. A range with
    /// `start > end` leaves the engine unavailable and returns
    /// `TimelineError::InvalidRange`.
    pub fn set_range(&mut self, start: Timestamp, end: Timestamp) -> TimelineResult<()> {
        match AbsoluteRange::new(start, end) {
            Ok(range) => {
                self.set_range_from(range);
                Ok(())
            }
            Err(err) => {
                warn!(start, end, error = %err, "rejecting timeline range");
                self.clear_range();
                Err(err)
            }
        }
    }

    pub fn set_range_from(&mut self, range: AbsoluteRange) {
        debug!(
            start = range.start(),
            end = range.end(),
            span_ms = range.span(),
            "loading timeline range"
        );
        self.model.viewport = Some(ViewportState::full(range));
        self.model.replace_events(Vec::new());
        self.interaction.reset();
        self.scene_cache.clear();
        self.emit_plugin_event(PluginEvent::RangeChanged {
            start: range.start(),
            end: range.end(),
        });
    }

    /// Drops range, window and events; the engine becomes unavailable.
    pub fn clear_range(&mut self) {
        self.model.viewport = None;
        self.model.replace_events(Vec::new());
        self.interaction.reset();
        self.scene_cache.clear();
        self.emit_plugin_event(PluginEvent::RangeUnavailable);
    }

    /// Replaces the event set. Rejects the whole set if any event has
    /// `start > end`, keeping the previous one.
    pub fn set_events(&mut self, events: Vec<EventInterval>) -> TimelineResult<()> {
        for (index, event) in events.iter().enumerate() {
            if let Err(err) = event.validate() {
                warn!(index, error = %err, "rejecting event set");
                return Err(err);
            }
        }
        debug!(events_len = events.len(), "loading timeline events");
        let events_len = events.len();
        self.model.replace_events(events);
        self.emit_plugin_event(PluginEvent::EventsUpdated { events_len });
        Ok(())
    }

    /// Range followed by its events, validated before anything changes.
    pub fn load(&mut self, range: AbsoluteRange, events: Vec<EventInterval>) -> TimelineResult<()> {
        for event in &events {
            event.validate()?;
        }
        self.set_range_from(range);
        self.set_events(events)
    }

    /// Zooms fully out. Returns `true` when the window changed.
    pub fn reset_window(&mut self) -> bool {
        match self.model.viewport {
            Some(state) => self.commit_window(ViewportWindow::full(state.range)),
            None => false,
        }
    }

    pub(super) fn commit_window(&mut self, window: ViewportWindow) -> bool {
        let Some(state) = self.model.viewport.as_mut() else {
            return false;
        };
        if state.window == window {
            return false;
        }
        state.window = window;
        self.emit_window_changed();
        true
    }
}
