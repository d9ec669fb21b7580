use serde::{Deserialize, Serialize};

use crate::core::{AbsoluteRange, Viewport, ViewportWindow};
use crate::interaction::{CursorAffordance, InteractionMode};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub range: Option<AbsoluteRange>,
    pub window: Option<ViewportWindow>,
    pub events_len: usize,
    pub interaction_mode: InteractionMode,
    pub cursor: CursorAffordance,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    RangeChanged { start: i64, end: i64 },
    RangeUnavailable,
    EventsUpdated { events_len: usize },
    WindowChanged { start: i64, end: i64 },
    PanStarted,
    PanEnded,
    Rendered,
}

/// Observer hook for host-side logic (cursor updates, linked views, telemetry).
///
/// Plugins read engine context but never mutate engine internals.
pub trait TimelinePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
