use tracing::trace;

use crate::error::TimelineResult;
use crate::extensions::PluginEvent;
use crate::interaction::InteractionEvent;
use crate::render::Renderer;

use super::TimelineEngine;
use super::pan_delta_resolver::resolve_pixel_pan_delta_time;
use super::validation::validate_pointer_x;

impl<R: Renderer> TimelineEngine<R> {
    /// Begins a drag at `pointer_x`. The returned event carries the cursor
    /// the host should show; `None` while the engine is unavailable.
    pub fn pan_start(&mut self, pointer_x: f64) -> TimelineResult<Option<InteractionEvent>> {
        let pointer_x = validate_pointer_x(pointer_x)?;
        if self.model.viewport.is_none() {
            trace!("ignoring pan start on unavailable engine");
            return Ok(None);
        }
        let event = self.interaction.on_pan_start(pointer_x);
        self.emit_plugin_event(PluginEvent::PanStarted);
        Ok(Some(event))
    }

    /// Moves the window with the pointer while a drag is active.
    ///
    /// The window duration never changes; the window stops at the range
    /// edges.
    pub fn pan_move(&mut self, pointer_x: f64, container_width: f64) -> TimelineResult<bool> {
        let pointer_x = validate_pointer_x(pointer_x)?;
        let Some(delta_px) = self.interaction.on_pan_move(pointer_x) else {
            return Ok(false);
        };
        let Some(state) = self.model.viewport else {
            return Ok(false);
        };
        let Some(time_delta) =
            resolve_pixel_pan_delta_time(delta_px, container_width, state.window.duration())?
        else {
            trace!(container_width, "skipping pan on unusable container width");
            return Ok(false);
        };

        let window = state.window.panned(state.range, time_delta);
        Ok(self.commit_window(window))
    }

    /// Ends the drag. `None` when no drag was active.
    pub fn pan_end(&mut self) -> Option<InteractionEvent> {
        let event = self.interaction.on_pan_end()?;
        self.emit_plugin_event(PluginEvent::PanEnded);
        Some(event)
    }

    /// Pointer left the surface: same cleanup as releasing the button.
    pub fn pointer_leave(&mut self) -> Option<InteractionEvent> {
        self.pan_end()
    }
}
