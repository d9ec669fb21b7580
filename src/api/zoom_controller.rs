use tracing::{debug, trace};

use crate::core::ZoomLimits;
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::TimelineEngine;
use super::zoom_factor_resolver::{ZoomDirection, resolve_anchor_ratio, resolve_zoom_factor};

impl<R: Renderer> TimelineEngine<R> {
    /// Zooms one step around the pointer.
    ///
    /// Returns `Ok(false)` when nothing changed: engine unavailable, unusable
    /// container width, or a step that would leave the duration limits.
    pub fn zoom(
        &mut self,
        pointer_x: f64,
        container_width: f64,
        direction: ZoomDirection,
    ) -> TimelineResult<bool> {
        let Some(anchor_ratio) = resolve_anchor_ratio(pointer_x, container_width)? else {
            trace!(container_width, "skipping zoom on unusable container width");
            return Ok(false);
        };
        let Some(state) = self.model.viewport else {
            return Ok(false);
        };

        let factor = resolve_zoom_factor(direction, self.zoom_behavior);
        let limits = ZoomLimits::for_range(
            state.range,
            self.zoom_behavior.min_visible_duration_ms,
            self.zoom_behavior.max_visible_range_ratio,
        );
        let Some(window) = state
            .window
            .zoomed(state.range, anchor_ratio, factor, limits)
        else {
            debug!(
                ?direction,
                duration_ms = state.window.duration(),
                "zoom step outside visible duration limits"
            );
            return Ok(false);
        };

        trace!(
            ?direction,
            anchor_ratio,
            start = window.start(),
            end = window.end(),
            "zoomed timeline window"
        );
        Ok(self.commit_window(window))
    }

    /// Mouse-wheel entry point: negative `delta_y` zooms in, positive zooms out.
    pub fn wheel_zoom(
        &mut self,
        delta_y: f64,
        pointer_x: f64,
        container_width: f64,
    ) -> TimelineResult<bool> {
        match ZoomDirection::from_wheel_delta(delta_y) {
            Some(direction) => self.zoom(pointer_x, container_width, direction),
            None => Ok(false),
        }
    }
}
