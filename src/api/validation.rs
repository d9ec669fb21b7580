use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};

use super::{TimelineEngineConfig, TimelineRenderStyle, ZoomBehavior};

pub(super) fn validate_viewport(viewport: Viewport) -> TimelineResult<Viewport> {
    if !viewport.is_valid() {
        return Err(TimelineError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_zoom_behavior(behavior: ZoomBehavior) -> TimelineResult<ZoomBehavior> {
    if !behavior.zoom_in_factor.is_finite()
        || behavior.zoom_in_factor <= 0.0
        || behavior.zoom_in_factor >= 1.0
    {
        return Err(TimelineError::InvalidData(
            "zoom-in factor must be finite and in (0, 1)".to_owned(),
        ));
    }
    if !behavior.zoom_out_factor.is_finite() || behavior.zoom_out_factor <= 1.0 {
        return Err(TimelineError::InvalidData(
            "zoom-out factor must be finite and > 1".to_owned(),
        ));
    }
    if behavior.min_visible_duration_ms <= 0 {
        return Err(TimelineError::InvalidData(
            "min visible duration must be > 0 ms".to_owned(),
        ));
    }
    if !behavior.max_visible_range_ratio.is_finite() || behavior.max_visible_range_ratio < 1.0 {
        return Err(TimelineError::InvalidData(
            "max visible range ratio must be finite and >= 1".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_render_style(
    style: TimelineRenderStyle,
) -> TimelineResult<TimelineRenderStyle> {
    style.background_color.validate()?;
    style.ruler_background_color.validate()?;
    style.tick_line_color.validate()?;
    style.tick_label_color.validate()?;
    style.event_marker_color.validate()?;
    style.end_cap_color.validate()?;

    for (name, value) in [
        ("tick stroke width", style.tick_stroke_width_px),
        ("event marker stroke width", style.event_marker_stroke_width_px),
        ("tick label font size", style.tick_label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    for (name, value) in [
        ("ruler height", style.ruler_height_px),
        ("tick label offset", style.tick_label_offset_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    Ok(style)
}

pub(super) fn validate_engine_config(
    config: TimelineEngineConfig,
) -> TimelineResult<TimelineEngineConfig> {
    validate_viewport(config.viewport)?;
    validate_zoom_behavior(config.zoom_behavior)?;
    validate_render_style(config.render_style)?;
    Ok(config)
}

pub(super) fn validate_pointer_x(pointer_x: f64) -> TimelineResult<f64> {
    if !pointer_x.is_finite() {
        return Err(TimelineError::InvalidData(
            "pointer x must be finite".to_owned(),
        ));
    }
    Ok(pointer_x)
}

/// Gestures over a collapsed or unmeasured container are skipped, not rejected.
pub(super) fn is_usable_container_width(container_width: f64) -> bool {
    container_width.is_finite() && container_width > 0.0
}
