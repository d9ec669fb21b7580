use crate::extensions::{PluginContext, PluginEvent};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.viewport,
            range: self.model.viewport.map(|state| state.range),
            window: self.model.viewport.map(|state| state.window),
            events_len: self.model.events.len(),
            interaction_mode: self.interaction.mode(),
            cursor: self.interaction.cursor(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }

    pub(super) fn emit_window_changed(&mut self) {
        if let Some(state) = self.model.viewport {
            self.emit_plugin_event(PluginEvent::WindowChanged {
                start: state.window.start(),
                end: state.window.end(),
            });
        }
    }
}
