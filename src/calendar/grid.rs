//! Render-ready layout of a calendar page
//!
//! A page is a sequence of [`DaySlot`]s: as many blank slots as needed so that the 1st of the month falls under its weekday
//! (weeks start on Sunday), then one slot per day of the month. There are no trailing blanks, so the last week may be shorter.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize, Serializer};
use serde::ser::SerializeStruct;
use chrono::{Datelike, NaiveDate};

use crate::Appointment;
use crate::calendar::CalendarCursor;
use crate::store::AppointmentStore;

/// How many appointments a day cell shows before collapsing the rest into a "+N more" indicator
pub const DEFAULT_MAX_VISIBLE_PER_DAY: usize = 3;


/// The shape of a calendar page, regardless of its content
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthLayout {
    /// Weekday index (0 = Sunday) of the 1st of the month
    pub leading_blanks: u32,
    pub days_in_month: u32,
}

impl MonthLayout {
    pub fn of(cursor: &CalendarCursor) -> Self {
        Self {
            leading_blanks: cursor.first_weekday_index(),
            days_in_month: cursor.days_in_month(),
        }
    }

    /// Total count of slots (blank or not) on this page
    pub fn slot_count(&self) -> usize {
        (self.leading_blanks + self.days_in_month) as usize
    }
}


/// The rule that limits how many appointments are shown in a single day cell.
///
/// This only affects what is displayed: every appointment remains available in the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowPolicy {
    pub max_visible: usize,
}

impl OverflowPolicy {
    pub fn new(max_visible: usize) -> Self {
        Self { max_visible }
    }

    /// Split `items` into what should be displayed, and an indicator for what is left out (if anything)
    pub fn split<'s, T>(&self, items: &'s [T]) -> (&'s [T], Option<MoreIndicator>) {
        if items.len() <= self.max_visible {
            return (items, None);
        }
        let (shown, hidden) = items.split_at(self.max_visible);
        (shown, Some(MoreIndicator(hidden.len())))
    }
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE_PER_DAY)
    }
}


/// The count of appointments hidden from a day cell. Displays (and serializes) as `+N more`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoreIndicator(usize);

impl MoreIndicator {
    pub fn count(&self) -> usize {
        self.0
    }
}

impl Display for MoreIndicator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{} more", self.0)
    }
}

impl Serialize for MoreIndicator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}


/// A populated slot of the grid.
///
/// It serializes as it should be displayed: only the appointments its overflow policy lets through, plus a `more` label
/// (`null` when nothing is hidden). [`DayCell::appointments`] still gives access to every appointment of the day.
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell<'a> {
    date: NaiveDate,
    is_today: bool,
    /// In store order
    appointments: &'a [Appointment],
    policy: OverflowPolicy,
}

impl<'a> DayCell<'a> {
    /// Day of the month
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_today(&self) -> bool {
        self.is_today
    }

    /// Every appointment of this day, in store order
    pub fn appointments(&self) -> &'a [Appointment] {
        self.appointments
    }

    /// The overflow policy of the grid this cell belongs to
    pub fn policy(&self) -> &OverflowPolicy {
        &self.policy
    }

    /// The appointments that fit in the cell according to `policy`
    pub fn visible(&self, policy: &OverflowPolicy) -> &'a [Appointment] {
        policy.split(self.appointments).0
    }

    /// The "+N more" indicator, if `policy` hides some appointments
    pub fn more(&self, policy: &OverflowPolicy) -> Option<MoreIndicator> {
        policy.split(self.appointments).1
    }
}

impl<'a> Serialize for DayCell<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (shown, more) = self.policy.split(self.appointments);
        let mut cell = serializer.serialize_struct("DayCell", 5)?;
        cell.serialize_field("date", &self.date)?;
        cell.serialize_field("is_today", &self.is_today)?;
        cell.serialize_field("appointments", shown)?;
        cell.serialize_field("hidden", &more.map_or(0, |m| m.count()))?;
        cell.serialize_field("more", &more)?;
        cell.end()
    }
}


/// One cell of the grid
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DaySlot<'a> {
    /// Padding before the 1st of the month
    Blank,
    Day(DayCell<'a>),
}

impl<'a> DaySlot<'a> {
    pub fn is_blank(&self) -> bool {
        match self {
            DaySlot::Blank => true,
            _ => false,
        }
    }

    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            DaySlot::Day(cell) => Some(cell),
            DaySlot::Blank => None,
        }
    }
}


/// A calendar page, with the appointments of each day
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthGrid<'a> {
    cursor: CalendarCursor,
    policy: OverflowPolicy,
    slots: Vec<DaySlot<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Lay out the month of `cursor`, looking up each day in `store`.
    ///
    /// `today` is the actual current date (not a date of the cursor): only the cell of that date, if displayed, is flagged as today
    pub fn build(cursor: CalendarCursor, store: &'a AppointmentStore, today: NaiveDate) -> Self {
        Self::build_with_policy(cursor, store, today, OverflowPolicy::default())
    }

    /// Same as [`Self::build`], with day cells displaying at most what `policy` allows
    pub fn build_with_policy(cursor: CalendarCursor, store: &'a AppointmentStore, today: NaiveDate, policy: OverflowPolicy) -> Self {
        let layout = MonthLayout::of(&cursor);
        let mut slots = Vec::with_capacity(layout.slot_count());

        for _ in 0..layout.leading_blanks {
            slots.push(DaySlot::Blank);
        }
        for day in 1..=layout.days_in_month {
            let date = match cursor.date_for_day(day) {
                Some(d) => d,
                None => {
                    log::warn!("Day {} does not exist in {}. Ignoring it", day, cursor);
                    continue;
                },
            };
            slots.push(DaySlot::Day(DayCell {
                date,
                is_today: date == today,
                appointments: store.for_date(date),
                policy,
            }));
        }

        Self { cursor, policy, slots }
    }

    pub fn cursor(&self) -> &CalendarCursor {
        &self.cursor
    }

    pub fn policy(&self) -> &OverflowPolicy {
        &self.policy
    }

    pub fn slots(&self) -> &[DaySlot<'a>] {
        &self.slots
    }

    pub fn leading_blanks(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_blank()).count()
    }

    /// The populated cells, from the 1st to the last day of the month
    pub fn days(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.slots.iter().filter_map(|slot| slot.as_day())
    }

    /// The cell of a given day of the month
    pub fn day(&self, day: u32) -> Option<&DayCell<'a>> {
        self.days().find(|cell| cell.day() == day)
    }

    /// The cell flagged as today, if today is in this month
    pub fn today(&self) -> Option<&DayCell<'a>> {
        self.days().find(|cell| cell.is_today())
    }

    /// Rows of seven slots, Sunday first. The last row may be shorter
    pub fn weeks(&self) -> std::slice::Chunks<'_, DaySlot<'a>> {
        self.slots.chunks(7)
    }
}
