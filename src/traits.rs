use chrono::NaiveDate;

/// A source for "today", used to flag the current day in a month grid and to jump back to the current month.
///
/// Calendars usually run on a [`SystemClock`](crate::clock::SystemClock), but any fixed date can be provided (e.g. in tests)
pub trait Clock {
    /// Returns the current calendar date
    fn today(&self) -> NaiveDate;
}
