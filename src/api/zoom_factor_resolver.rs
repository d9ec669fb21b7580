use serde::{Deserialize, Serialize};

use crate::error::TimelineResult;

use super::ZoomBehavior;
use super::validation::{is_usable_container_width, validate_pointer_x};

/// Wheel zoom direction. `In` narrows the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scroll up zooms in, scroll down zooms out, zero does nothing.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

pub(super) fn resolve_zoom_factor(direction: ZoomDirection, behavior: ZoomBehavior) -> f64 {
    match direction {
        ZoomDirection::In => behavior.zoom_in_factor,
        ZoomDirection::Out => behavior.zoom_out_factor,
    }
}

/// Pointer position as a fraction of the container, clamped to `[0, 1]`.
///
/// `Ok(None)` means the container has no usable width and the gesture must
/// be ignored.
pub(super) fn resolve_anchor_ratio(
    pointer_x: f64,
    container_width: f64,
) -> TimelineResult<Option<f64>> {
    let pointer_x = validate_pointer_x(pointer_x)?;
    if !is_usable_container_width(container_width) {
        return Ok(None);
    }
    Ok(Some((pointer_x / container_width).clamp(0.0, 1.0)))
}
