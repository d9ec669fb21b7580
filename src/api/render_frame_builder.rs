use crate::core::Viewport;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{TimelineRenderStyle, TimelineScene};

/// Lays a scene out in pixels: background, ruler band, end cap, tick lines
/// with labels and event start markers, in paint order.
///
/// Without a scene only the background is drawn.
pub(super) fn build_render_frame(
    viewport: Viewport,
    scene: Option<&TimelineScene>,
    style: TimelineRenderStyle,
) -> RenderFrame {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let mut frame = RenderFrame::new(viewport).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        width,
        height,
        style.background_color,
    ));
    let Some(scene) = scene else {
        return frame;
    };

    let ruler_bottom = style.ruler_height_px.min(height);
    if ruler_bottom > 0.0 {
        frame = frame.with_rect(RectPrimitive::new(
            0.0,
            0.0,
            width,
            ruler_bottom,
            style.ruler_background_color,
        ));
    }

    if let Some(end_cap) = scene.end_cap {
        let left = percent_to_x(end_cap.left_percent, width).clamp(0.0, width);
        let right = percent_to_x(end_cap.left_percent + end_cap.width_percent, width)
            .clamp(left, width);
        if right > left && height > ruler_bottom {
            frame = frame.with_rect(RectPrimitive::new(
                left,
                ruler_bottom,
                right - left,
                height - ruler_bottom,
                style.end_cap_color,
            ));
        }
    }

    let tick_bottom = if style.show_gridlines {
        height
    } else {
        ruler_bottom
    };
    for tick in &scene.ticks {
        let x = percent_to_x(tick.percent, width);
        frame = frame
            .with_line(LinePrimitive::vertical(
                x,
                0.0,
                tick_bottom,
                style.tick_stroke_width_px,
                style.tick_line_color,
            ))
            .with_text(TextPrimitive::new(
                tick.label.clone(),
                x + style.tick_label_offset_px,
                style.tick_label_offset_px,
                style.tick_label_font_size_px,
                style.tick_label_color,
                TextHAlign::Left,
            ));
    }

    for marker in &scene.markers {
        let x = percent_to_x(marker.percent, width);
        // Events that began before the window have no visible start.
        if !(0.0..=width).contains(&x) {
            continue;
        }
        frame = frame.with_line(LinePrimitive::vertical(
            x,
            ruler_bottom,
            height,
            style.event_marker_stroke_width_px,
            style.event_marker_color,
        ));
    }

    frame
}

fn percent_to_x(percent: f64, width: f64) -> f64 {
    percent / 100.0 * width
}
