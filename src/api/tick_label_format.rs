use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::core::primitives::timestamp_to_local;
use crate::core::{TickInterval, Timestamp};

use super::{LabelLocale, TickLabelConfig};

const EN_US_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const ES_ES_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Formats one ruler label.
///
/// Daily intervals render a short date. Finer intervals render 24-hour
/// `HH:MM`; a tick at local midnight carries the short date on a second line.
pub(super) fn format_tick_label(
    timestamp: Timestamp,
    interval: TickInterval,
    config: TickLabelConfig,
) -> String {
    let Some(local) = timestamp_to_local(timestamp, config.timezone.fixed_offset()) else {
        return timestamp.to_string();
    };

    if interval.is_daily() {
        return format_short_date(local, config.locale);
    }

    let time = format!("{:02}:{:02}", local.hour(), local.minute());
    if local.hour() == 0 && local.minute() == 0 {
        return format!("{time}\n{}", format_short_date(local, config.locale));
    }
    time
}

pub(super) fn format_short_date(local: DateTime<FixedOffset>, locale: LabelLocale) -> String {
    let month_index = local.month0() as usize;
    match locale {
        LabelLocale::EnUs => format!("{} {}", EN_US_MONTHS[month_index], local.day()),
        LabelLocale::EsEs => format!("{} {}", local.day(), ES_ES_MONTHS[month_index]),
    }
}

#[cfg(test)]
mod tests {
    use super::format_tick_label;
    use crate::api::{LabelLocale, LabelTimeZone, TickLabelConfig};
    use crate::core::TickInterval;
    use crate::core::primitives::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

    // 2024-01-01T00:00:00Z
    const JAN_1_2024: i64 = 1_704_067_200_000;

    #[test]
    fn daily_interval_uses_short_date() {
        let label = format_tick_label(
            JAN_1_2024 + MS_PER_DAY,
            TickInterval::OneDay,
            TickLabelConfig::default(),
        );
        assert_eq!(label, "Jan 2");
    }

    #[test]
    fn hourly_interval_uses_padded_24h_time() {
        let label = format_tick_label(
            JAN_1_2024 + 15 * MS_PER_HOUR + 5 * MS_PER_MINUTE,
            TickInterval::OneHour,
            TickLabelConfig::default(),
        );
        assert_eq!(label, "15:05");
    }

    #[test]
    fn midnight_tick_appends_date_line() {
        let label = format_tick_label(
            JAN_1_2024 + 2 * MS_PER_DAY,
            TickInterval::SixHours,
            TickLabelConfig::default(),
        );
        assert_eq!(label, "00:00\nJan 3");
    }

    #[test]
    fn spanish_locale_puts_day_first() {
        let config = TickLabelConfig::default().with_locale(LabelLocale::EsEs);
        let label = format_tick_label(JAN_1_2024, TickInterval::OneDay, config);
        assert_eq!(label, "1 ene");
    }

    #[test]
    fn timezone_offset_shifts_midnight_detection() {
        let config = TickLabelConfig::default()
            .with_timezone(LabelTimeZone::FixedOffsetMinutes { minutes: 60 });
        let label = format_tick_label(JAN_1_2024 - MS_PER_HOUR, TickInterval::OneHour, config);
        assert_eq!(label, "00:00\nJan 1");
    }
}
