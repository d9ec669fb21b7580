use serde::{Deserialize, Serialize};

use crate::core::primitives::round_to_timestamp;
use crate::core::{AbsoluteRange, Timestamp};
use crate::error::{TimelineError, TimelineResult};

/// Duration bounds a zoom step must respect, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
}

impl ZoomLimits {
    /// Derives limits for `range`: a fixed floor and a ceiling relative to the range span.
    #[must_use]
    pub fn for_range(range: AbsoluteRange, min_duration_ms: i64, max_range_ratio: f64) -> Self {
        Self {
            min_duration_ms: min_duration_ms as f64,
            max_duration_ms: range.span() as f64 * max_range_ratio,
        }
    }

    #[must_use]
    pub fn admits(self, duration_ms: f64) -> bool {
        duration_ms >= self.min_duration_ms && duration_ms <= self.max_duration_ms
    }
}

/// Currently visible sub-interval of an [`AbsoluteRange`].
///
/// Windows are plain values: every gesture produces a new window instead of
/// editing the current one, so readers always see a complete snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewportWindow {
    start: Timestamp,
    end: Timestamp,
}

impl ViewportWindow {
    /// Window covering the whole range (full zoom-out).
    #[must_use]
    pub fn full(range: AbsoluteRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
        }
    }

    /// Builds a window inside `range`.
    pub fn within(range: AbsoluteRange, start: Timestamp, end: Timestamp) -> TimelineResult<Self> {
        if start >= end {
            return Err(TimelineError::InvalidData(
                "window start must be before window end".to_owned(),
            ));
        }
        if start < range.start() || end > range.end() {
            return Err(TimelineError::InvalidData(format!(
                "window [{start}, {end}] must lie inside [{}, {}]",
                range.start(),
                range.end()
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> Timestamp {
        self.start
    }

    #[must_use]
    pub fn end(self) -> Timestamp {
        self.end
    }

    #[must_use]
    pub fn duration(self) -> i64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.end <= self.start
    }

    #[must_use]
    pub fn is_within(self, range: AbsoluteRange) -> bool {
        self.start >= range.start() && self.end <= range.end()
    }

    /// Time value at a horizontal ratio of the window (`0.0` = start, `1.0` = end).
    #[must_use]
    pub fn time_at_ratio(self, ratio: f64) -> f64 {
        self.start as f64 + self.duration() as f64 * ratio
    }

    /// Horizontal position of `time` as a percentage of the window.
    ///
    /// Returns `None` for a zero-width window.
    #[must_use]
    pub fn percent_of(self, time: Timestamp) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some((time - self.start) as f64 / self.duration() as f64 * 100.0)
    }

    /// Zooms around the time at `anchor_ratio` by `factor` (`< 1` zooms in).
    ///
    /// Returns `None` when the resulting duration falls outside `limits`.
    /// The anchor time keeps its screen position unless a range edge is hit.
    /// Past the right edge the window shifts left to keep the requested
    /// duration; past the left edge it is compressed to start at the range
    /// start while keeping its unclamped end.
    #[must_use]
    pub fn zoomed(
        self,
        range: AbsoluteRange,
        anchor_ratio: f64,
        factor: f64,
        limits: ZoomLimits,
    ) -> Option<Self> {
        let anchor_ratio = anchor_ratio.clamp(0.0, 1.0);
        let current_start = self.start as f64;
        let time_at_cursor = self.time_at_ratio(anchor_ratio);
        let new_duration = self.duration() as f64 * factor;
        if !new_duration.is_finite() || !limits.admits(new_duration) {
            return None;
        }

        // Whole-millisecond duration; the unclamped end derives from it.
        let duration = round_to_timestamp(new_duration);
        let mut start =
            round_to_timestamp(time_at_cursor - (time_at_cursor - current_start) * factor);
        let mut end = start.saturating_add(duration);

        // Each edge is clamped on its own, then only the start moves back to
        // recover the duration. A left-edge hit keeps the unclamped end.
        start = start.max(range.start());
        end = end.min(range.end());
        if end - start < duration {
            start = end.saturating_sub(duration).max(range.start());
        }
        if end <= start {
            return None;
        }
        Some(Self { start, end })
    }

    /// Translates the window by `-time_delta` milliseconds, snapping to the range edges.
    ///
    /// Duration is preserved exactly.
    #[must_use]
    pub fn panned(self, range: AbsoluteRange, time_delta: f64) -> Self {
        let duration = self.duration();
        let delta = round_to_timestamp(time_delta);
        let new_start = self.start.saturating_sub(delta);
        let new_end = self.end.saturating_sub(delta);

        if new_start <= range.start() {
            Self {
                start: range.start(),
                end: range.start() + duration,
            }
        } else if new_end >= range.end() {
            Self {
                start: range.end() - duration,
                end: range.end(),
            }
        } else {
            Self {
                start: new_start,
                end: new_end,
            }
        }
    }
}
