//! Calendar pages: which month is displayed, and how its days are laid out

pub mod grid;

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Duration, Months, NaiveDate};


/// Identifies the month a calendar page displays.
///
/// Months are 1-based (January is `1`), the same way [`chrono`] counts them.
/// It serializes as `{"year": 2024, "month": 2}`, and deserializing an invalid month fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "YearMonth", try_from = "YearMonth")]
pub struct CalendarCursor {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl CalendarCursor {
    /// Returns `None` if `month` is not in `1..=12`, or if this month cannot be represented
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(Self::from_first_day)
    }

    /// The month that contains `date`
    pub fn containing(date: NaiveDate) -> Option<Self> {
        date.with_day(1)
            .and_then(Self::from_first_day)
    }

    fn from_first_day(first_day: NaiveDate) -> Option<Self> {
        // "Day 0" of the next month, so that leap years are chrono's business
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())?;
        Some(Self { first_day, last_day })
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// Index of the weekday of the 1st of this month, 0 being Sunday
    pub fn first_weekday_index(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    /// The following month, rolling over to January of the next year if needed.
    ///
    /// Returns `None` past the range of dates `chrono` supports
    pub fn next(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(Self::from_first_day)
    }

    /// The preceding month, rolling over to December of the previous year if needed.
    ///
    /// Returns `None` past the range of dates `chrono` supports
    pub fn previous(&self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .and_then(Self::from_first_day)
    }

    /// Resolve a day of this month into a full date.
    ///
    /// Returns `None` if `day` is not a day of this month
    pub fn date_for_day(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first_day.with_day(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }
}

/// The serialized form of a [`CalendarCursor`], as exchanged with a UI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl From<CalendarCursor> for YearMonth {
    fn from(cursor: CalendarCursor) -> Self {
        Self { year: cursor.year(), month: cursor.month() }
    }
}

impl TryFrom<YearMonth> for CalendarCursor {
    type Error = String;

    fn try_from(value: YearMonth) -> Result<Self, Self::Error> {
        CalendarCursor::new(value.year, value.month)
            .ok_or_else(|| format!("{:04}-{:02} is not a valid month", value.year, value.month))
    }
}

/// January 1970
impl Default for CalendarCursor {
    fn default() -> Self {
        let first_day = NaiveDate::default();
        Self { first_day, last_day: first_day + Duration::days(30) }
    }
}

impl Display for CalendarCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
