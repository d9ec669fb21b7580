use serde::{Deserialize, Serialize};

use crate::core::{AbsoluteRange, Viewport, ViewportWindow};
use crate::interaction::{CursorAffordance, PanState};

use super::{TickLabelConfig, TimelineScene, ZoomBehavior};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub available: bool,
    pub range: Option<AbsoluteRange>,
    pub window: Option<ViewportWindow>,
    pub pan_state: PanState,
    pub cursor: CursorAffordance,
    pub events_len: usize,
    pub zoom_behavior: ZoomBehavior,
    pub label_config: TickLabelConfig,
    pub scene: Option<TimelineScene>,
}
