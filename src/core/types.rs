use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_timestamp;
use crate::error::{TimelineError, TimelineResult};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Pixel size of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Full time span the timeline may ever display.
///
/// Built only through validating constructors, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsoluteRange {
    start: Timestamp,
    end: Timestamp,
}

impl AbsoluteRange {
    pub fn new(start: Timestamp, end: Timestamp) -> TimelineResult<Self> {
        if start > end {
            return Err(TimelineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn from_datetimes(start: DateTime<Utc>, end: DateTime<Utc>) -> TimelineResult<Self> {
        Self::new(datetime_to_timestamp(start), datetime_to_timestamp(end))
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
    pub fn span(self) -> i64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

/// One externally supplied time interval drawn on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventInterval {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl EventInterval {
    #[must_use]
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if self.start > self.end {
            return Err(TimelineError::InvalidData(format!(
                "event start ({}) must not be after its end ({})",
                self.start, self.end
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn duration(self) -> i64 {
        self.end - self.start
    }

    /// Inclusive overlap test against `[start, end]`.
    #[must_use]
    pub fn overlaps(self, start: Timestamp, end: Timestamp) -> bool {
        self.end >= start && self.start <= end
    }
}
