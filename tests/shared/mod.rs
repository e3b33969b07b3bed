//! Helpers shared by integration tests

use chrono::NaiveDate;

use outreach_calendar::{AppointmentId, CalendarController};
use outreach_calendar::clock::FixedClock;
use outreach_calendar::form::{DraftField, FormError};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Add an appointment through the form, the way a user would
pub fn schedule(calendar: &mut CalendarController<FixedClock>, day: u32, title: &str, time: &str) -> Result<AppointmentId, FormError> {
    calendar.select_date(day).unwrap();
    calendar.edit_field(DraftField::Title(title.to_string()));
    calendar.edit_field(DraftField::Time(time.to_string()));
    calendar.commit_form()
}
