//! Headless month calendar that turns two day clicks into an [`AbsoluteRange`].

mod calendar;

pub use calendar::{CalendarCell, YearMonth};

use chrono::{NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::LabelTimeZone;
use crate::core::{AbsoluteRange, Timestamp};
use crate::error::{TimelineError, TimelineResult};

/// Which boundary the next day click sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionPhase {
    #[default]
    From,
    To,
}

/// Two-click date range picker state.
///
/// The first click picks `from`, the second picks `to` and completes the
/// range. Dates are ordered on completion, so clicking an earlier day second
/// still yields `from <= to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelector {
    month: YearMonth,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    phase: SelectionPhase,
    timezone: LabelTimeZone,
}

impl RangeSelector {
    #[must_use]
    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            from: None,
            to: None,
            phase: SelectionPhase::From,
            timezone: LabelTimeZone::Utc,
        }
    }

    /// Timezone whose midnights bound the emitted range.
    #[must_use]
    pub fn with_timezone(mut self, timezone: LabelTimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    #[must_use]
    pub fn month(&self) -> YearMonth {
        self.month
    }

    #[must_use]
    pub fn from_date(&self) -> Option<NaiveDate> {
        self.from
    }

    #[must_use]
    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    #[must_use]
    pub fn timezone(&self) -> LabelTimeZone {
        self.timezone
    }

    #[must_use]
    pub fn month_label(&self) -> String {
        self.month.label()
    }

    pub fn shift_months(&mut self, offset: i32) -> TimelineResult<()> {
        self.month = self.month.shifted(offset)?;
        Ok(())
    }

    pub fn next_month(&mut self) -> TimelineResult<()> {
        self.shift_months(1)
    }

    pub fn previous_month(&mut self) -> TimelineResult<()> {
        self.shift_months(-1)
    }

    /// Clears both dates and waits for a new `from` click.
    pub fn reset(&mut self) {
        self.from = None;
        self.to = None;
        self.phase = SelectionPhase::From;
    }

    /// Handles a click on `day` of the displayed month.
    ///
    /// Returns the completed range on the second click, `None` on the first.
    pub fn click_day(&mut self, day: u32) -> TimelineResult<Option<AbsoluteRange>> {
        let date = self.month.date(day).ok_or_else(|| {
            TimelineError::InvalidData(format!(
                "day {day} is outside 1..={} for {}",
                self.month.days_in_month(),
                self.month.label()
            ))
        })?;

        match (self.phase, self.from) {
            (SelectionPhase::To, Some(from)) => {
                let (from, to) = if date < from { (date, from) } else { (from, date) };
                self.from = Some(from);
                self.to = Some(to);
                self.phase = SelectionPhase::From;
                let range = self.resolve_range(from, to)?;
                debug!(
                    %from,
                    %to,
                    start = range.start(),
                    end = range.end(),
                    "date range selected"
                );
                Ok(Some(range))
            }
            _ => {
                self.from = Some(date);
                self.to = None;
                self.phase = SelectionPhase::To;
                Ok(None)
            }
        }
    }

    /// Range for the current pair, `None` until both dates are set.
    pub fn selected_range(&self) -> TimelineResult<Option<AbsoluteRange>> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => self.resolve_range(from, to).map(Some),
            _ => Ok(None),
        }
    }

    /// Month grid in Sunday-first weeks: leading blanks, then one cell per day.
    #[must_use]
    pub fn calendar_cells(&self) -> Vec<CalendarCell> {
        let blanks = self.month.leading_blanks() as usize;
        let days = self.month.days_in_month();
        let mut cells = Vec::with_capacity(blanks + days as usize);
        cells.extend(std::iter::repeat_n(CalendarCell::Blank, blanks));

        for day in 1..=days {
            let Some(date) = self.month.date(day) else {
                continue;
            };
            let selected = self.from == Some(date) || self.to == Some(date);
            let in_range = match (self.from, self.to) {
                (Some(from), Some(to)) => date > from && date < to,
                _ => false,
            };
            let start_node = self.phase == SelectionPhase::To && self.from == Some(date);
            cells.push(CalendarCell::Day {
                day,
                selected,
                in_range,
                start_node,
            });
        }
        cells
    }

    fn resolve_range(&self, from: NaiveDate, to: NaiveDate) -> TimelineResult<AbsoluteRange> {
        let start = self.local_timestamp(from, NaiveTime::MIN)?;
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).ok_or_else(|| {
            TimelineError::InvalidData("invalid end-of-day time".to_owned())
        })?;
        let end = self.local_timestamp(to, end_of_day)?;
        AbsoluteRange::new(start, end)
    }

    fn local_timestamp(&self, date: NaiveDate, time: NaiveTime) -> TimelineResult<Timestamp> {
        self.timezone
            .fixed_offset()
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|local| local.timestamp_millis())
            .ok_or_else(|| {
                TimelineError::InvalidData(format!("{date} {time} has no single local instant"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarCell, RangeSelector, SelectionPhase, YearMonth};

    #[test]
    fn first_click_sets_pending_start_node() {
        let mut selector = RangeSelector::new(YearMonth::new(2024, 3).expect("month"));
        assert_eq!(selector.click_day(10).expect("click"), None);
        assert_eq!(selector.phase(), SelectionPhase::To);

        let cells = selector.calendar_cells();
        let start_nodes = cells
            .iter()
            .filter(|cell| matches!(cell, CalendarCell::Day { start_node: true, .. }))
            .count();
        assert_eq!(start_nodes, 1);
    }

    #[test]
    fn out_of_month_day_is_rejected() {
        let mut selector = RangeSelector::new(YearMonth::new(2023, 2).expect("month"));
        let err = selector.click_day(29).expect_err("feb 29 2023 does not exist");
        assert!(format!("{err}").contains("outside 1..=28"));
        assert_eq!(selector.phase(), SelectionPhase::From);
    }
}
