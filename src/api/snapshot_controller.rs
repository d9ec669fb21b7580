use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::{EngineSnapshot, TimelineEngine, build_timeline_scene};

impl<R: Renderer> TimelineEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    ///
    /// The scene is derived fresh and does not touch the scene cache.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let state = self.model.viewport;
        EngineSnapshot {
            viewport: self.viewport,
            available: state.is_some(),
            range: state.map(|state| state.range),
            window: state.map(|state| state.window),
            pan_state: self.interaction.pan_state(),
            cursor: self.interaction.cursor(),
            events_len: self.model.events.len(),
            zoom_behavior: self.zoom_behavior,
            label_config: self.label_config,
            scene: state.and_then(|state| {
                build_timeline_scene(state.window, &self.model.events, self.label_config)
            }),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
