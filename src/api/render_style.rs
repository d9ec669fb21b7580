use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Style contract for timeline render frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineRenderStyle {
    pub background_color: Color,
    pub ruler_background_color: Color,
    pub tick_line_color: Color,
    pub tick_label_color: Color,
    pub event_marker_color: Color,
    pub end_cap_color: Color,
    /// Height of the ruler band at the top of the surface.
    pub ruler_height_px: f64,
    pub tick_stroke_width_px: f64,
    pub event_marker_stroke_width_px: f64,
    pub tick_label_font_size_px: f64,
    /// Horizontal gap between a tick line and its label.
    pub tick_label_offset_px: f64,
    /// Draw tick gridlines through the event area, not only in the ruler.
    pub show_gridlines: bool,
}

impl Default for TimelineRenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            ruler_background_color: Color::rgb(0.96, 0.96, 0.97),
            tick_line_color: Color::rgba(0.55, 0.57, 0.62, 0.8),
            tick_label_color: Color::rgb(0.20, 0.22, 0.27),
            event_marker_color: Color::rgba(0.13, 0.45, 0.85, 0.7),
            end_cap_color: Color::rgba(0.85, 0.86, 0.88, 0.6),
            ruler_height_px: 40.0,
            tick_stroke_width_px: 1.0,
            event_marker_stroke_width_px: 1.0,
            tick_label_font_size_px: 11.0,
            tick_label_offset_px: 4.0,
            show_gridlines: true,
        }
    }
}
