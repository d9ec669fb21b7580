use indexmap::IndexMap;
use tracing::trace;

use crate::core::Viewport;
use crate::error::TimelineResult;
use crate::extensions::{PluginEvent, TimelinePlugin};
use crate::interaction::InteractionState;
use crate::render::{RenderFrame, Renderer};

use super::scene_cache::SceneCache;
use super::timeline_model::TimelineModel;
use super::validation::validate_render_style;
use super::{TickLabelConfig, TimelineRenderStyle, ZoomBehavior, render_frame_builder};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Viewport engine facade consumed by host applications.
///
/// `TimelineEngine` owns the absolute range, the visible window, the event
/// set and the drag state, and turns them into render frames.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) zoom_behavior: ZoomBehavior,
    pub(super) label_config: TickLabelConfig,
    pub(super) render_style: TimelineRenderStyle,
    pub(super) model: TimelineModel,
    pub(super) interaction: InteractionState,
    pub(super) scene_cache: SceneCache,
    /// Registration order is dispatch order.
    pub(super) plugins: IndexMap<String, Box<dyn TimelinePlugin>>,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn render_style(&self) -> TimelineRenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: TimelineRenderStyle) -> TimelineResult<()> {
        self.render_style = validate_render_style(style)?;
        Ok(())
    }

    /// Builds the current frame and hands it to the renderer.
    ///
    /// An unavailable engine renders an empty frame.
    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_render_frame();
        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "render timeline frame"
        );
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders into an external cairo context, e.g. from a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> TimelineResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Frame for the current state without rendering it.
    pub fn build_render_frame(&mut self) -> RenderFrame {
        let scene = self.scene();
        render_frame_builder::build_render_frame(
            self.viewport,
            scene.as_deref(),
            self.render_style,
        )
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
