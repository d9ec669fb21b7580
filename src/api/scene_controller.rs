use std::sync::Arc;

use tracing::trace;

use crate::render::Renderer;

use super::scene_cache::{SceneCacheKey, SceneCacheStats};
use super::{TimelineEngine, TimelineScene, build_timeline_scene};

impl<R: Renderer> TimelineEngine<R> {
    /// Ticks, event markers and end cap for the current window.
    ///
    /// Returns `None` while the engine is unavailable or the window has zero
    /// width. Repeated calls without an input change return the same scene.
    pub fn scene(&mut self) -> Option<Arc<TimelineScene>> {
        let state = self.model.viewport?;
        let key = SceneCacheKey {
            window: state.window,
            events_revision: self.model.events_revision,
            label_config: self.label_config,
        };
        if let Some(scene) = self.scene_cache.get(key) {
            return Some(scene);
        }

        let scene = Arc::new(build_timeline_scene(
            state.window,
            &self.model.events,
            self.label_config,
        )?);
        trace!(
            interval = ?scene.interval,
            ticks = scene.ticks.len(),
            markers = scene.markers.len(),
            has_end_cap = scene.end_cap.is_some(),
            "recomputed timeline scene"
        );
        self.scene_cache.insert(key, Arc::clone(&scene));
        Some(scene)
    }

    #[must_use]
    pub fn scene_cache_stats(&self) -> SceneCacheStats {
        self.scene_cache.stats()
    }
}
