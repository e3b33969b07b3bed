//! This module provides the in-memory storage of appointments

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::appointment::{Appointment, AppointmentId, AppointmentUpdate};


/// Every appointment of a calendar, indexed by date.
///
/// Within a date, appointments are kept in insertion order. Nothing is persisted: the content of a store lives as long as the store itself.
///
/// The store does not validate what it is given: checking that titles and times are filled in is the job of the
/// [`AppointmentForm`](crate::form::AppointmentForm). Incomplete appointments added directly are accepted as they are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentStore {
    by_date: BTreeMap<NaiveDate, Vec<Appointment>>,
    /// Where to find each appointment in `by_date`
    dates: HashMap<AppointmentId, NaiveDate>,
}

impl AppointmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an appointment after every other appointment of the same date.
    ///
    /// In case an appointment with the same id already exists, it is replaced, so that ids remain unique
    pub fn add(&mut self, appointment: Appointment) -> AppointmentId {
        let id = *appointment.id();
        if appointment.has_required_fields() == false {
            log::warn!("Adding appointment {} with an empty title or time", id);
        }
        if self.remove(&id).is_some() {
            log::warn!("Appointment {} was already in the store. Replacing it", id);
        }

        log::debug!("Adding appointment {} on {}", id, appointment.date());
        self.dates.insert(id, appointment.date());
        self.by_date.entry(appointment.date()).or_default().push(appointment);
        id
    }

    /// Delete an appointment.
    ///
    /// Removing an id that is not in the store is not an error, it just does nothing and returns `None`
    pub fn remove(&mut self, id: &AppointmentId) -> Option<Appointment> {
        let date = match self.dates.remove(id) {
            None => {
                log::debug!("No appointment {} to remove", id);
                return None;
            },
            Some(d) => d,
        };

        let day = self.by_date.get_mut(&date)?;
        let index = day.iter().position(|apt| apt.id() == id)?;
        let removed = day.remove(index);
        if day.is_empty() {
            self.by_date.remove(&date);
        }
        log::debug!("Removed appointment {} from {}", id, date);
        Some(removed)
    }

    /// Change the fields of an existing appointment. Its id is preserved.
    ///
    /// The appointment keeps its position among its date, unless its date changes: it then comes after the appointments already on its new date.
    /// Returns whether an appointment was found (updating an unknown id does nothing)
    pub fn update(&mut self, id: &AppointmentId, update: AppointmentUpdate) -> bool {
        let current_date = match self.dates.get(id) {
            None => {
                log::debug!("No appointment {} to update", id);
                return false;
            },
            Some(d) => *d,
        };

        let moves = update.date.map_or(false, |new_date| new_date != current_date);
        if moves {
            let mut appointment = match self.remove(id) {
                None => return false,
                Some(a) => a,
            };
            appointment.apply(update);
            self.dates.insert(*id, appointment.date());
            self.by_date.entry(appointment.date()).or_default().push(appointment);
        } else {
            match self.get_mut(id) {
                None => return false,
                Some(appointment) => appointment.apply(update),
            }
        }
        log::debug!("Updated appointment {}", id);
        true
    }

    pub fn get(&self, id: &AppointmentId) -> Option<&Appointment> {
        let date = self.dates.get(id)?;
        self.by_date.get(date)?
            .iter()
            .find(|apt| apt.id() == id)
    }

    fn get_mut(&mut self, id: &AppointmentId) -> Option<&mut Appointment> {
        let date = self.dates.get(id)?;
        self.by_date.get_mut(date)?
            .iter_mut()
            .find(|apt| apt.id() == id)
    }

    /// The appointments of a given date, in insertion order
    pub fn for_date(&self, date: NaiveDate) -> &[Appointment] {
        self.by_date.get(&date)
            .map(|day| day.as_slice())
            .unwrap_or(&[])
    }

    /// Every appointment, ordered by date.
    ///
    /// Appointments of a same date keep their insertion order: their `time` is not taken into account
    pub fn all_sorted_by_date(&self) -> Vec<&Appointment> {
        self.by_date.values().flatten().collect()
    }

    /// Every appointment dated `date` or later, ordered the same way as [`Self::all_sorted_by_date`]
    pub fn on_or_after(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.by_date.range(date..)
            .flat_map(|(_, day)| day.iter())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::EventColor;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn appointment(on: NaiveDate, title: &str) -> Appointment {
        Appointment::new(on, title.to_string(), String::from("14:00"), EventColor::Orange)
    }

    fn titles(list: &[&Appointment]) -> Vec<String> {
        list.iter().map(|a| a.title().to_string()).collect()
    }

    #[test]
    fn add_then_query() {
        let mut store = AppointmentStore::new();
        let day = date(2024, 7, 4);
        let id = store.add(appointment(day, "Home visit"));

        assert_eq!(store.len(), 1);
        let found = store.for_date(day);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), &id);
        assert!(store.for_date(date(2024, 7, 5)).is_empty());
        assert_eq!(store.get(&id).map(|a| a.title()), Some("Home visit"));
    }

    #[test]
    fn remove_is_a_noop_for_unknown_ids() {
        let mut store = AppointmentStore::new();
        let day = date(2024, 7, 4);
        let id = store.add(appointment(day, "Home visit"));

        assert!(store.remove(&AppointmentId::random()).is_none());
        assert_eq!(store.len(), 1);

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.id(), &id);
        assert!(store.for_date(day).is_empty());
        assert!(store.is_empty());

        // Twice in a row
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn sorted_by_date_is_stable() {
        let mut store = AppointmentStore::new();
        store.add(appointment(date(2024, 8, 2), "B1"));
        store.add(appointment(date(2024, 8, 1), "A1"));
        store.add(appointment(date(2024, 8, 2), "B2"));
        store.add(appointment(date(2023, 12, 31), "Z"));
        store.add(appointment(date(2024, 8, 1), "A2"));
        store.add(appointment(date(2024, 8, 2), "B3"));

        assert_eq!(titles(&store.all_sorted_by_date()), vec!["Z", "A1", "A2", "B1", "B2", "B3"]);
        assert_eq!(titles(&store.on_or_after(date(2024, 8, 2))), vec!["B1", "B2", "B3"]);
    }

    #[test]
    fn time_does_not_affect_order() {
        let mut store = AppointmentStore::new();
        let day = date(2024, 8, 2);
        store.add(Appointment::new(day, "Late".into(), "17:00".into(), EventColor::Red));
        store.add(Appointment::new(day, "Early".into(), "08:00".into(), EventColor::Red));

        assert_eq!(titles(&store.all_sorted_by_date()), vec!["Late", "Early"]);
    }

    #[test]
    fn update_in_place() {
        let mut store = AppointmentStore::new();
        let day = date(2024, 9, 10);
        let first = store.add(appointment(day, "First"));
        store.add(appointment(day, "Second"));

        assert!(store.update(&first, AppointmentUpdate::new().title("X")));
        let updated = store.get(&first).unwrap();
        assert_eq!(updated.title(), "X");
        assert_eq!(updated.id(), &first);
        assert_eq!(updated.date(), day);
        // Still first of its day
        assert_eq!(store.for_date(day)[0].id(), &first);

        assert_eq!(store.update(&AppointmentId::random(), AppointmentUpdate::new().title("Y")), false);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_moves_between_dates() {
        let mut store = AppointmentStore::new();
        let from = date(2024, 9, 10);
        let to = date(2024, 9, 12);
        let moved = store.add(appointment(from, "Moved"));
        store.add(appointment(to, "Already there"));

        assert!(store.update(&moved, AppointmentUpdate::new().date(to)));
        assert!(store.for_date(from).is_empty());
        let on_new_date: Vec<&str> = store.for_date(to).iter().map(|a| a.title()).collect();
        assert_eq!(on_new_date, vec!["Already there", "Moved"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn incomplete_appointments_are_accepted() {
        let mut store = AppointmentStore::new();
        let id = store.add(Appointment::new(date(2024, 1, 1), String::new(), String::new(), EventColor::Blue));
        assert!(store.get(&id).is_some());
    }

    #[test]
    fn same_id_is_replaced() {
        let mut store = AppointmentStore::new();
        let original = appointment(date(2024, 1, 1), "Original");
        let id = *original.id();
        let replacement = Appointment::new_with_parameters(
            id, date(2024, 1, 2), "Replacement".into(), "11:00".into(), EventColor::Blue,
            *original.created(), *original.last_modified(),
        );

        store.add(original);
        store.add(replacement);
        assert_eq!(store.len(), 1);
        assert!(store.for_date(date(2024, 1, 1)).is_empty());
        assert_eq!(store.get(&id).map(|a| a.title()), Some("Replacement"));
    }
}
