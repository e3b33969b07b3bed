//! Appointments, the only kind of record this crate schedules

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};

use crate::color::EventColor;


/// The unique identifier of an [`Appointment`].
///
/// Ids are random (UUID v4), so they are never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AppointmentId {
    content: Uuid,
}

impl AppointmentId {
    /// Generate a random AppointmentId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.content
    }
}

impl FromStr for AppointmentId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let content = Uuid::parse_str(s)?;
        Ok(Self { content })
    }
}

impl Display for AppointmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}

/// Used to support serde
impl Serialize for AppointmentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for AppointmentId {
    fn deserialize<D>(deserializer: D) -> Result<AppointmentId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}



/// A scheduled appointment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Stable for the whole lifetime of the record
    id: AppointmentId,
    /// The calendar day this appointment is indexed under
    date: NaiveDate,
    /// The display name of the appointment
    title: String,
    /// A display-only `HH:MM` string. It plays no role in ordering.
    time: String,
    color: EventColor,

    /// The time this appointment was created
    created: DateTime<Utc>,
    /// The last time this appointment was modified
    last_modified: DateTime<Utc>,
}

impl Appointment {
    /// Create a brand new appointment.
    /// This will pick a new (random) appointment ID.
    pub fn new(date: NaiveDate, title: String, time: String, color: EventColor) -> Self {
        let now = Utc::now();
        Self::new_with_parameters(AppointmentId::random(), date, title, time, color, now, now)
    }

    /// Create an appointment with every field specified, e.g. when rebuilding it from a shell payload
    pub fn new_with_parameters(id: AppointmentId, date: NaiveDate, title: String, time: String, color: EventColor,
                               created: DateTime<Utc>, last_modified: DateTime<Utc>) -> Self
    {
        Self { id, date, title, time, color, created, last_modified }
    }

    pub fn id(&self) -> &AppointmentId          { &self.id }
    pub fn date(&self) -> NaiveDate             { self.date }
    pub fn title(&self) -> &str                 { &self.title }
    pub fn time(&self) -> &str                  { &self.time }
    pub fn color(&self) -> EventColor           { self.color }
    pub fn created(&self) -> &DateTime<Utc>     { &self.created }
    pub fn last_modified(&self) -> &DateTime<Utc> { &self.last_modified }

    /// Whether the fields a form is supposed to enforce are filled in
    pub fn has_required_fields(&self) -> bool {
        self.title.is_empty() == false && self.time.is_empty() == false
    }

    /// Apply every field set in `update`. The id is never changed.
    /// This updates the "last modified" field
    pub fn apply(&mut self, update: AppointmentUpdate) {
        let AppointmentUpdate { date, title, time, color } = update;
        if let Some(date) = date { self.date = date; }
        if let Some(title) = title { self.title = title; }
        if let Some(time) = time { self.time = time; }
        if let Some(color) = color { self.color = color; }
        self.last_modified = Utc::now();
    }

    /// Compares everything but the timestamps
    #[cfg(test)]
    pub fn has_same_observable_content_as(&self, other: &Appointment) -> bool {
           self.id == other.id
        && self.date == other.date
        && self.title == other.title
        && self.time == other.time
        && self.color == other.color
    }
}


/// A set of changes to apply to an existing appointment.
///
/// Fields left to `None` are kept unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentUpdate {
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub time: Option<String>,
    pub color: Option<EventColor>,
}

impl AppointmentUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn time<S: Into<String>>(mut self, time: S) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = Some(color);
        self
    }
}
