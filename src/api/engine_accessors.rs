use std::sync::Arc;

use crate::core::{AbsoluteRange, EventInterval, Viewport, ViewportWindow, ZoomLimits};
use crate::error::TimelineResult;
use crate::interaction::{CursorAffordance, InteractionMode, PanState};
use crate::render::Renderer;

use super::validation::{validate_viewport, validate_zoom_behavior};
use super::{TickLabelConfig, TimelineEngine, TimelineEngineConfig, ZoomBehavior};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> TimelineResult<()> {
        self.viewport = validate_viewport(viewport)?;
        Ok(())
    }

    /// Absolute range, `None` while unavailable.
    #[must_use]
    pub fn range(&self) -> Option<AbsoluteRange> {
        self.model.viewport.map(|state| state.range)
    }

    /// Visible window, `None` while unavailable.
    #[must_use]
    pub fn window(&self) -> Option<ViewportWindow> {
        self.model.viewport.map(|state| state.window)
    }

    #[must_use]
    pub fn events(&self) -> &[EventInterval] {
        &self.model.events
    }

    /// Shared handle to the current event set.
    #[must_use]
    pub fn events_shared(&self) -> Arc<[EventInterval]> {
        Arc::clone(&self.model.events)
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.model.viewport.is_some()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn pan_state(&self) -> PanState {
        self.interaction.pan_state()
    }

    #[must_use]
    pub fn cursor_affordance(&self) -> CursorAffordance {
        self.interaction.cursor()
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.zoom_behavior
    }

    /// Replaces zoom factors and limits. The current window is kept even if
    /// it lies outside the new limits; the next zoom step applies them.
    pub fn set_zoom_behavior(&mut self, behavior: ZoomBehavior) -> TimelineResult<()> {
        self.zoom_behavior = validate_zoom_behavior(behavior)?;
        Ok(())
    }

    /// Zoom limits for the current range, `None` while unavailable.
    #[must_use]
    pub fn zoom_limits(&self) -> Option<ZoomLimits> {
        let range = self.range()?;
        Some(ZoomLimits::for_range(
            range,
            self.zoom_behavior.min_visible_duration_ms,
            self.zoom_behavior.max_visible_range_ratio,
        ))
    }

    #[must_use]
    pub fn label_config(&self) -> TickLabelConfig {
        self.label_config
    }

    pub fn set_label_config(&mut self, config: TickLabelConfig) {
        self.label_config = config;
    }

    /// Current configuration, suitable for `TimelineEngineConfig::to_json_pretty`.
    #[must_use]
    pub fn config(&self) -> TimelineEngineConfig {
        TimelineEngineConfig {
            viewport: self.viewport,
            zoom_behavior: self.zoom_behavior,
            label_config: self.label_config,
            render_style: self.render_style,
        }
    }
}
