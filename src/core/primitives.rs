use chrono::{DateTime, FixedOffset, Utc};

use crate::core::Timestamp;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[must_use]
pub fn datetime_to_timestamp(time: DateTime<Utc>) -> Timestamp {
    time.timestamp_millis()
}

/// Converts a timestamp into wall-clock time at `offset`.
///
/// Returns `None` outside chrono's representable range.
#[must_use]
pub fn timestamp_to_local(timestamp: Timestamp, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp).map(|dt| dt.with_timezone(&offset))
}

/// Rounds an `f64` millisecond value back onto the integer timeline.
///
/// Values outside the `i64` range saturate; NaN maps to zero.
#[must_use]
pub fn round_to_timestamp(value: f64) -> Timestamp {
    if !value.is_finite() {
        if value.is_nan() {
            return 0;
        }
        return if value > 0.0 { i64::MAX } else { i64::MIN };
    }
    let rounded = value.round();
    if rounded >= i64::MAX as f64 {
        i64::MAX
    } else if rounded <= i64::MIN as f64 {
        i64::MIN
    } else {
        rounded as i64
    }
}
