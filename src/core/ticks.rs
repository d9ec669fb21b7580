use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::{MS_PER_DAY, MS_PER_HOUR};
use crate::core::{Timestamp, ViewportWindow};

/// Inline capacity for generated tick times; the adaptive interval keeps
/// typical windows well below it.
pub const TICK_INLINE_CAPACITY: usize = 16;

pub type TickTimes = SmallVec<[Timestamp; TICK_INLINE_CAPACITY]>;

/// Ruler spacing selected from the visible duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TickInterval {
    OneHour,
    ThreeHours,
    SixHours,
    TwelveHours,
    OneDay,
}

impl TickInterval {
    /// Step function from visible duration to interval, coarser for wider windows.
    ///
    /// Boundaries: `>= 3d` daily, `> 1.5d` 12h, `> 8h` 6h, `> 4h` 3h, else 1h.
    /// The daily boundary is deliberately inclusive, so a window of exactly
    /// three days gets one tick per day (Jan 1 to Jan 4); the finer
    /// boundaries are strict.
    #[must_use]
    pub fn for_view_duration(view_duration_ms: i64) -> Self {
        let duration = view_duration_ms as f64;
        if duration >= MS_PER_DAY as f64 * 3.0 {
            Self::OneDay
        } else if duration > MS_PER_DAY as f64 * 1.5 {
            Self::TwelveHours
        } else if duration > MS_PER_HOUR as f64 * 8.0 {
            Self::SixHours
        } else if duration > MS_PER_HOUR as f64 * 4.0 {
            Self::ThreeHours
        } else {
            Self::OneHour
        }
    }

    #[must_use]
    pub fn as_millis(self) -> i64 {
        match self {
            Self::OneHour => MS_PER_HOUR,
            Self::ThreeHours => 3 * MS_PER_HOUR,
            Self::SixHours => 6 * MS_PER_HOUR,
            Self::TwelveHours => 12 * MS_PER_HOUR,
            Self::OneDay => MS_PER_DAY,
        }
    }

    #[must_use]
    pub fn is_daily(self) -> bool {
        self.as_millis() >= MS_PER_DAY
    }
}

/// Interval-aligned tick times inside `window`, inclusive on both ends.
///
/// Enumeration starts at the last interval boundary at or before the window
/// start, so ticks land on absolute clock boundaries.
#[must_use]
pub fn aligned_tick_times(window: ViewportWindow, interval: TickInterval) -> TickTimes {
    let step = interval.as_millis();
    let mut ticks = TickTimes::new();
    let aligned_start = window.start().div_euclid(step) * step;

    let mut time = aligned_start;
    while time <= window.end() {
        if time >= window.start() {
            ticks.push(time);
        }
        match time.checked_add(step) {
            Some(next) => time = next,
            None => break,
        }
    }
    ticks
}
