//! Implementations of the [`Clock`] trait

use chrono::{Local, NaiveDate};

use crate::traits::Clock;

/// The real current date, in the local time zone of this machine
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that is stuck on a given date
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Move this clock to another date
    pub fn set(&mut self, today: NaiveDate) {
        self.today = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
