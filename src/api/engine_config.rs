use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::core::primitives::MS_PER_HOUR;
use crate::error::{TimelineError, TimelineResult};

use super::{LabelLocale, LabelTimeZone, TickLabelConfig, TimelineRenderStyle};

/// Zoom step and duration limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    /// Duration multiplier for one zoom-in step (`< 1`).
    pub zoom_in_factor: f64,
    /// Duration multiplier for one zoom-out step (`> 1`).
    pub zoom_out_factor: f64,
    /// Shortest window a zoom step may produce.
    pub min_visible_duration_ms: i64,
    /// Longest window a zoom step may request, relative to the absolute range span.
    pub max_visible_range_ratio: f64,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            zoom_in_factor: 0.85,
            zoom_out_factor: 1.15,
            min_visible_duration_ms: MS_PER_HOUR,
            max_visible_range_ratio: 2.0,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep timeline setup next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub zoom_behavior: ZoomBehavior,
    #[serde(default)]
    pub label_config: TickLabelConfig,
    #[serde(default)]
    pub render_style: TimelineRenderStyle,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            zoom_behavior: ZoomBehavior::default(),
            label_config: TickLabelConfig::default(),
            render_style: TimelineRenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_zoom_behavior(mut self, behavior: ZoomBehavior) -> Self {
        self.zoom_behavior = behavior;
        self
    }

    /// Sets both zoom step factors.
    #[must_use]
    pub fn with_zoom_factors(mut self, zoom_in_factor: f64, zoom_out_factor: f64) -> Self {
        self.zoom_behavior.zoom_in_factor = zoom_in_factor;
        self.zoom_behavior.zoom_out_factor = zoom_out_factor;
        self
    }

    #[must_use]
    pub fn with_label_locale(mut self, locale: LabelLocale) -> Self {
        self.label_config.locale = locale;
        self
    }

    #[must_use]
    pub fn with_label_timezone(mut self, timezone: LabelTimeZone) -> Self {
        self.label_config.timezone = timezone;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: TimelineRenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}
