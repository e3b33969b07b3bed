//! A module to build ICal files

use std::error::Error;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use ics::components::{Parameter, Property};
use ics::properties::{DtStart, Summary};
use ics::{Event, ICalendar};

use crate::Appointment;

/// Create an iCal calendar with one `VEVENT` per appointment
pub fn build_from<'a, I>(appointments: I) -> Result<String, Box<dyn Error>>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut calendar = ICalendar::new("2.0", super::default_prod_id());

    for appointment in appointments {
        if appointment.title().is_empty() {
            return Err(format!("Appointment {} has no title", appointment.id()).into());
        }

        let mut event = Event::new(
            appointment.id().to_string(),
            format_date_time(appointment.last_modified()),
        );
        event.push(start_of(appointment.date(), appointment.time()));
        event.push(Summary::new(appointment.title().to_string()));
        event.push(Property::new("COLOR", appointment.color().name().to_lowercase()));
        calendar.add_event(event);
    }

    Ok(calendar.to_string())
}

/// A floating local start time when `time` is a valid `HH:MM`, an all-day start otherwise
fn start_of(date: NaiveDate, time: &str) -> DtStart<'static> {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(t) => DtStart::new(date.and_time(t).format("%Y%m%dT%H%M%S").to_string()),
        Err(_) => {
            log::debug!("Time {:?} is not HH:MM, exporting an all-day event", time);
            let mut start = DtStart::new(date.format("%Y%m%d").to_string());
            start.add(Parameter::new("VALUE", "DATE"));
            start
        },
    }
}

fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventColor;
    use crate::config::{read_setting, ORG_NAME, PRODUCT_NAME};

    #[test]
    fn test_ical_from_appointment() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let apt = Appointment::new(date, String::from("Visite à domicile"), String::from("09:30"), EventColor::Green);

        let ical = build_from(vec![&apt]).unwrap();
        assert!(ical.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ical.ends_with("END:VCALENDAR\r\n"));

        let expected_lines = vec![
            String::from("VERSION:2.0"),
            format!("PRODID:-//{}//{}//EN", read_setting(&ORG_NAME), read_setting(&PRODUCT_NAME)),
            String::from("BEGIN:VEVENT"),
            format!("UID:{}", apt.id()),
            format!("DTSTAMP:{}", format_date_time(apt.last_modified())),
            String::from("DTSTART:20240312T093000"),
            String::from("SUMMARY:Visite à domicile"),
            String::from("COLOR:green"),
            String::from("END:VEVENT"),
        ];
        let lines: Vec<&str> = ical.split("\r\n").collect();
        for expected in &expected_lines {
            assert!(lines.contains(&expected.as_str()), "missing {:?} in {:?}", expected, ical);
        }
    }

    #[test]
    fn one_event_per_appointment() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let first = Appointment::new(date, String::from("First"), String::from("09:30"), EventColor::Green);
        let second = Appointment::new(date, String::from("Second"), String::from("10:30"), EventColor::Blue);

        let ical = build_from(vec![&first, &second]).unwrap();
        assert_eq!(ical.matches("BEGIN:VEVENT\r\n").count(), 2);
        assert_eq!(build_from(Vec::<&Appointment>::new()).unwrap().matches("BEGIN:VEVENT").count(), 0);
    }

    #[test]
    fn free_form_times_are_all_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let apt = Appointment::new(date, String::from("Call back"), String::from("morning"), EventColor::Red);

        let ical = build_from(vec![&apt]).unwrap();
        assert!(ical.contains("DTSTART;VALUE=DATE:20240312\r\n"));
    }

    #[test]
    fn untitled_appointments_are_refused() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let apt = Appointment::new(date, String::new(), String::from("10:00"), EventColor::Red);
        assert!(build_from(vec![&apt]).is_err());
    }
}
