//! The entry point of a calendar: it ties a month cursor, an appointment store and an appointment form together
//!
//! Every user action (clicking a day, typing in the form, navigating months...) maps to one synchronous method call on a [`CalendarController`].

use std::error::Error;

use chrono::NaiveDate;

use crate::appointment::{Appointment, AppointmentId, AppointmentUpdate};
use crate::calendar::CalendarCursor;
use crate::calendar::grid::{MonthGrid, OverflowPolicy};
use crate::clock::SystemClock;
use crate::config::CalendarConfig;
use crate::form::{AppointmentForm, DraftField, FormError};
use crate::store::AppointmentStore;
use crate::traits::Clock;


/// A monthly appointment calendar.
///
/// Each controller owns its own [`AppointmentStore`], so that several independent calendars can coexist.
#[derive(Debug)]
pub struct CalendarController<C = SystemClock>
where
    C: Clock,
{
    clock: C,
    cursor: CalendarCursor,
    store: AppointmentStore,
    form: AppointmentForm,
    overflow: OverflowPolicy,
}

impl CalendarController<SystemClock> {
    /// A calendar showing the current month, with the default configuration
    pub fn on_system_clock() -> Self {
        Self::new(SystemClock)
    }
}

impl<C> CalendarController<C>
where
    C: Clock,
{
    /// Create an empty calendar, showing the month of `clock.today()`
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, &CalendarConfig::default())
    }

    pub fn with_config(clock: C, config: &CalendarConfig) -> Self {
        Self::with_store(clock, AppointmentStore::new(), config)
    }

    /// Create a calendar that starts with existing appointments
    pub fn with_store(clock: C, store: AppointmentStore, config: &CalendarConfig) -> Self {
        let cursor = current_month(&clock);
        Self {
            clock,
            cursor,
            store,
            form: AppointmentForm::with_default_color(config.default_color),
            overflow: config.overflow_policy(),
        }
    }

    pub fn cursor(&self) -> &CalendarCursor     { &self.cursor }
    pub fn store(&self) -> &AppointmentStore    { &self.store }
    pub fn form(&self) -> &AppointmentForm      { &self.form }
    pub fn overflow_policy(&self) -> &OverflowPolicy { &self.overflow }
    pub fn clock(&self) -> &C                   { &self.clock }
    pub fn clock_mut(&mut self) -> &mut C       { &mut self.clock }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The page of the displayed month, with day cells limited by the configured overflow policy
    pub fn grid(&self) -> MonthGrid<'_> {
        MonthGrid::build_with_policy(self.cursor, &self.store, self.clock.today(), self.overflow)
    }

    /// Every appointment, ordered by date (see [`AppointmentStore::all_sorted_by_date`])
    pub fn upcoming(&self) -> Vec<&Appointment> {
        self.store.all_sorted_by_date()
    }

    pub fn go_to_previous_month(&mut self) {
        match self.cursor.previous() {
            Some(previous) => self.go_to(previous),
            None => log::warn!("There is no month before {}", self.cursor),
        }
    }

    pub fn go_to_next_month(&mut self) {
        match self.cursor.next() {
            Some(next) => self.go_to(next),
            None => log::warn!("There is no month after {}", self.cursor),
        }
    }

    /// Display the month of the actual current date
    pub fn go_to_today(&mut self) {
        let today = current_month(&self.clock);
        self.go_to(today);
    }

    pub fn go_to(&mut self, cursor: CalendarCursor) {
        log::debug!("Displaying {}", cursor);
        self.cursor = cursor;
    }

    /// Open the appointment form for a day of the displayed month
    pub fn select_date(&mut self, day: u32) -> Result<NaiveDate, Box<dyn Error>> {
        let date = match self.cursor.date_for_day(day) {
            None => return Err(format!("{} has no day {}", self.cursor, day).into()),
            Some(d) => d,
        };
        self.form.open_for(date);
        Ok(date)
    }

    /// Open the appointment form pre-filled with an existing appointment.
    ///
    /// Returns `false` if there is no such appointment
    pub fn edit_appointment(&mut self, id: &AppointmentId) -> bool {
        match self.store.get(id) {
            None => {
                log::debug!("No appointment {} to edit", id);
                false
            },
            Some(appointment) => {
                self.form.open_for_edit(appointment);
                true
            },
        }
    }

    /// See [`AppointmentForm::edit_field`]
    pub fn edit_field(&mut self, field: DraftField) -> bool {
        self.form.edit_field(field)
    }

    /// See [`AppointmentForm::commit`]
    pub fn commit_form(&mut self) -> Result<AppointmentId, FormError> {
        self.form.commit(&mut self.store)
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// See [`AppointmentStore::update`]
    pub fn update_appointment(&mut self, id: &AppointmentId, update: AppointmentUpdate) -> bool {
        self.store.update(id, update)
    }

    /// Delete an appointment. Deleting an unknown id does nothing
    pub fn delete_appointment(&mut self, id: &AppointmentId) -> Option<Appointment> {
        self.store.remove(id)
    }
}

fn current_month<C: Clock>(clock: &C) -> CalendarCursor {
    let today = clock.today();
    match CalendarCursor::containing(today) {
        Some(cursor) => cursor,
        None => {
            log::warn!("Unable to display the month of {}. Using the default month", today);
            CalendarCursor::default()
        },
    }
}
