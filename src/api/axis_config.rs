use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Locale preset used by ruler label formatters.
///
/// Only the label text changes with the locale; calendar math is always
/// proleptic Gregorian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    #[default]
    EnUs,
    EsEs,
}

/// Wall-clock offset used for labels and for range-selector day boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl LabelTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    /// Offsets outside chrono's accepted range fall back to UTC.
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
}

/// Ruler label configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TickLabelConfig {
    #[serde(default)]
    pub locale: LabelLocale,
    #[serde(default)]
    pub timezone: LabelTimeZone,
}

impl TickLabelConfig {
    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: LabelTimeZone) -> Self {
        self.timezone = timezone;
        self
    }
}
