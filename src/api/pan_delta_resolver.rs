use crate::error::{TimelineError, TimelineResult};

use super::validation::is_usable_container_width;

/// Converts a horizontal pointer delta into the time the window moves back by.
///
/// A drag to the right (`delta_px > 0`) reveals earlier time. `Ok(None)`
/// means the container has no usable width.
pub(super) fn resolve_pixel_pan_delta_time(
    delta_px: f64,
    container_width: f64,
    visible_duration_ms: i64,
) -> TimelineResult<Option<f64>> {
    if !is_usable_container_width(container_width) {
        return Ok(None);
    }
    let delta_time = delta_px / container_width * visible_duration_ms as f64;
    if !delta_time.is_finite() {
        return Err(TimelineError::InvalidData(
            "computed pan delta time must be finite".to_owned(),
        ));
    }
    Ok(Some(delta_time))
}
