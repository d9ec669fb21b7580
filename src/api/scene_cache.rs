use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::ViewportWindow;

use super::{TickLabelConfig, TimelineScene};

/// Runtime metrics of the single-entry scene cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneCacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Every input the scene depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct SceneCacheKey {
    pub(super) window: ViewportWindow,
    pub(super) events_revision: u64,
    pub(super) label_config: TickLabelConfig,
}

/// Keeps the scene of the last rendered input set.
///
/// Gestures replace the window on every step, so one entry is enough: a hit
/// means nothing changed since the previous frame.
#[derive(Debug, Default)]
pub(super) struct SceneCache {
    entry: Option<(SceneCacheKey, Arc<TimelineScene>)>,
    hits: u64,
    misses: u64,
}

impl SceneCache {
    pub(super) fn get(&mut self, key: SceneCacheKey) -> Option<Arc<TimelineScene>> {
        match &self.entry {
            Some((cached_key, scene)) if *cached_key == key => {
                self.hits = self.hits.saturating_add(1);
                Some(Arc::clone(scene))
            }
            _ => None,
        }
    }

    pub(super) fn insert(&mut self, key: SceneCacheKey, scene: Arc<TimelineScene>) {
        self.misses = self.misses.saturating_add(1);
        self.entry = Some((key, scene));
    }

    pub(super) fn clear(&mut self) {
        self.entry = None;
    }

    pub(super) fn stats(&self) -> SceneCacheStats {
        SceneCacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }
}
