use indexmap::IndexMap;

use crate::error::TimelineResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::scene_cache::SceneCache;
use super::timeline_model::TimelineModel;
use super::validation::validate_engine_config;
use super::{TimelineEngine, TimelineEngineConfig};

impl<R: Renderer> TimelineEngine<R> {
    /// Creates an engine without a range.
    ///
    /// The engine stays unavailable until `set_range` succeeds.
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = validate_engine_config(config)?;
        Ok(Self {
            renderer,
            viewport: config.viewport,
            zoom_behavior: config.zoom_behavior,
            label_config: config.label_config,
            render_style: config.render_style,
            model: TimelineModel::default(),
            interaction: InteractionState::default(),
            scene_cache: SceneCache::default(),
            plugins: IndexMap::new(),
        })
    }
}
