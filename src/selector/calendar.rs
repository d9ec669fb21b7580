use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month shown by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `month` is 1-based.
    pub fn new(year: i32, month: u32) -> TimelineResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(TimelineError::InvalidData(format!(
                "invalid calendar month {year}-{month:02}"
            )));
        }
        Ok(Self { year, month })
    }

    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }

    /// Moves by `offset` months, rolling years over in both directions.
    pub fn shifted(self, offset: i32) -> TimelineResult<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(offset);
        let year = i32::try_from(index.div_euclid(12)).map_err(|_| {
            TimelineError::InvalidData(format!("month offset {offset} leaves the calendar"))
        })?;
        let month = index.rem_euclid(12) as u32 + 1;
        Self::new(year, month)
    }

    /// Date of `day` in this month, `None` outside `1..=days_in_month`.
    #[must_use]
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    #[must_use]
    pub fn days_in_month(self) -> u32 {
        (28..=31)
            .rev()
            .find(|&day| self.date(day).is_some())
            .unwrap_or(28)
    }

    /// Blank cells before the 1st in a Sunday-first week.
    #[must_use]
    pub fn leading_blanks(self) -> u32 {
        self.date(1)
            .map_or(0, |first| first.weekday().num_days_from_sunday())
    }

    /// English header such as `"March 2024"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    Blank,
    Day {
        day: u32,
        /// Equals the `from` or the `to` date.
        selected: bool,
        /// Strictly between `from` and `to`.
        in_range: bool,
        /// The pending `from` date while waiting for the second click.
        start_node: bool,
    },
}
