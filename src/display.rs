//! Human-readable labels, as displayed by a calendar UI

use chrono::NaiveDate;

use crate::Appointment;
use crate::calendar::CalendarCursor;

/// Column headers of a month grid. Weeks start on Sunday
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// e.g. `January 2024`
pub fn month_title(cursor: &CalendarCursor) -> String {
    cursor.first_day().format("%B %Y").to_string()
}

/// e.g. `Monday, January 1, 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// e.g. `1/15/2024`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// What a day cell shows when hovering an appointment, e.g. `10:00 - Checkup`
pub fn appointment_tooltip(appointment: &Appointment) -> String {
    format!("{} - {}", appointment.time(), appointment.title())
}

/// When an appointment takes place, as shown in the list of upcoming appointments, e.g. `1/15/2024 at 10:00`
pub fn upcoming_line(appointment: &Appointment) -> String {
    format!("{} at {}", short_date(appointment.date()), appointment.time())
}
