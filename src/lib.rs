//! This crate provides a monthly appointment calendar.
//!
//! A [`CalendarController`] is the usual entry point. It owns
//! * a [`CalendarCursor`](calendar::CalendarCursor), the month that is currently displayed,
//! * an [`AppointmentStore`](store::AppointmentStore), where appointments are indexed by date,
//! * an [`AppointmentForm`](form::AppointmentForm), used to create or edit one appointment at a time.
//!
//! Its [`grid`](CalendarController::grid) is a render-ready [`MonthGrid`](calendar::grid::MonthGrid) that a UI can draw as-is. \
//! Everything lives in memory: nothing is persisted, but appointments can be exported as iCalendar data with the [`ical`] module.

pub mod traits;
pub mod clock;
pub mod config;

pub mod calendar;
mod appointment;
pub use appointment::{Appointment, AppointmentId, AppointmentUpdate};
mod color;
pub use color::EventColor;
pub mod store;
pub use store::AppointmentStore;
pub mod form;
pub use form::{AppointmentForm, ValidationError};
pub mod controller;
pub use controller::CalendarController;

pub mod display;
pub mod ical;
pub mod utils;
