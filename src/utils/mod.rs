//! Some utility functions

use crate::Appointment;
use crate::calendar::grid::{DaySlot, MonthGrid};
use crate::display;

/// Width of a day column in [`format_month`]
const CELL_WIDTH: usize = 7;

/// Render a month grid as text, one line per week.
///
/// Today is marked with `*`, and each day shows how many appointments the cell displays according to the grid's overflow policy (plus the hidden ones, if any)
pub fn format_month(grid: &MonthGrid<'_>) -> String {
    let policy = grid.policy();
    let mut out = format!("{}\n", display::month_title(grid.cursor()));
    for header in display::WEEKDAY_HEADERS.iter() {
        out.push_str(&format!("{:>width$}", header, width = CELL_WIDTH));
    }
    out.push('\n');

    for week in grid.weeks() {
        for slot in week {
            let cell = match slot {
                DaySlot::Blank => String::new(),
                DaySlot::Day(day) => {
                    let marker = if day.is_today() { "*" } else { "" };
                    let count = match (day.visible(policy).len(), day.more(policy)) {
                        (0, _) => String::new(),
                        (shown, None) => format!("({})", shown),
                        (shown, Some(more)) => format!("({}+{})", shown, more.count()),
                    };
                    format!("{}{}{}", marker, day.day(), count)
                },
            };
            out.push_str(&format!("{:>width$}", cell, width = CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}

/// A debug utility that pretty-prints a month grid
pub fn print_month(grid: &MonthGrid<'_>) {
    print!("{}", format_month(grid));
}

/// A debug utility that pretty-prints a list of appointments
pub fn print_appointment_list(appointments: &[&Appointment]) {
    if appointments.is_empty() {
        println!("    No appointments scheduled");
        return;
    }
    for appointment in appointments {
        print_appointment(appointment);
    }
}

pub fn print_appointment(appointment: &Appointment) {
    println!("    [{}] {}\t{}\t{}",
        appointment.color(),
        appointment.title(),
        display::upcoming_line(appointment),
        appointment.id());
}
