mod axis_config;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod pan_controller;
mod pan_delta_resolver;
mod plugin_dispatch;
mod plugin_registry;
mod range_controller;
mod render_frame_builder;
mod render_style;
mod scene;
mod scene_cache;
mod scene_controller;
mod snapshot_controller;
mod tick_label_format;
mod timeline_model;
mod validation;
mod zoom_controller;
mod zoom_factor_resolver;

pub use axis_config::{LabelLocale, LabelTimeZone, TickLabelConfig};
pub use engine::TimelineEngine;
pub use engine_config::{TimelineEngineConfig, ZoomBehavior};
pub use engine_snapshot::EngineSnapshot;
pub use render_style::TimelineRenderStyle;
pub use scene::{TickMark, TickMarks, TimelineScene, build_timeline_scene};
pub use scene_cache::SceneCacheStats;
pub use zoom_factor_resolver::ZoomDirection;
