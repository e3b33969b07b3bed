//! The form used to create (or edit) one appointment at a time

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::appointment::{Appointment, AppointmentId, AppointmentUpdate};
use crate::color::EventColor;
use crate::store::AppointmentStore;


/// Why a draft cannot be committed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingTitle,
    MissingTime,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingTitle => write!(f, "an appointment needs a title"),
            ValidationError::MissingTime => write!(f, "an appointment needs a time"),
        }
    }
}

impl Error for ValidationError {}

/// Why [`AppointmentForm::commit`] did not commit anything
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    /// There is no open form to commit
    NotOpen,
    /// The draft is incomplete. The form stays open
    Invalid(ValidationError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::NotOpen => write!(f, "the appointment form is not open"),
            FormError::Invalid(err) => write!(f, "invalid appointment: {}", err),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FormError::Invalid(err) => Some(err),
            FormError::NotOpen => None,
        }
    }
}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::Invalid(err)
    }
}


/// Whether the form is shown, and for which date
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormState {
    Closed,
    Open {
        date: NaiveDate,
        /// `Some` when the form edits an existing appointment rather than creating one
        editing: Option<AppointmentId>,
    },
}

/// The fields being typed in, not committed yet
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    pub title: String,
    /// Expected as `HH:MM`, but only required to be non-empty
    pub time: String,
    pub color: EventColor,
}

impl Draft {
    fn empty(color: EventColor) -> Self {
        Self { title: String::new(), time: String::new(), color }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.time.is_empty() {
            return Err(ValidationError::MissingTime);
        }
        Ok(())
    }
}

/// A change to a single field of a [`Draft`]
#[derive(Clone, Debug, PartialEq)]
pub enum DraftField {
    Title(String),
    Time(String),
    Color(EventColor),
}


/// A form that is either closed, or open for a given date.
///
/// Opening the form always starts from a fresh draft. Committing writes the draft into an [`AppointmentStore`] and closes the form,
/// unless the draft is incomplete, in which case nothing changes (neither the store nor the form).
#[derive(Clone, Debug, PartialEq)]
pub struct AppointmentForm {
    state: FormState,
    draft: Draft,
    /// The color of a fresh draft
    default_color: EventColor,
}

impl AppointmentForm {
    pub fn new() -> Self {
        Self::with_default_color(EventColor::default())
    }

    pub fn with_default_color(default_color: EventColor) -> Self {
        Self {
            state: FormState::Closed,
            draft: Draft::empty(default_color),
            default_color,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    /// The date the form is open for
    pub fn date(&self) -> Option<NaiveDate> {
        match self.state {
            FormState::Open { date, .. } => Some(date),
            FormState::Closed => None,
        }
    }

    /// The appointment being edited, if the form has been opened with [`Self::open_for_edit`]
    pub fn editing(&self) -> Option<&AppointmentId> {
        match &self.state {
            FormState::Open { editing, .. } => editing.as_ref(),
            FormState::Closed => None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Open the form to create an appointment on `date`, with an empty draft.
    ///
    /// If the form was already open, its draft is discarded
    pub fn open_for(&mut self, date: NaiveDate) {
        if self.is_open() {
            log::debug!("Re-opening the appointment form, discarding its draft");
        }
        self.state = FormState::Open { date, editing: None };
        self.draft = Draft::empty(self.default_color);
    }

    /// Open the form pre-filled with an existing appointment. Committing will update it in place
    pub fn open_for_edit(&mut self, appointment: &Appointment) {
        self.state = FormState::Open { date: appointment.date(), editing: Some(*appointment.id()) };
        self.draft = Draft {
            title: appointment.title().to_string(),
            time: appointment.time().to_string(),
            color: appointment.color(),
        };
    }

    /// Change one field of the draft.
    ///
    /// Returns `false` (and changes nothing) if the form is closed
    pub fn edit_field(&mut self, field: DraftField) -> bool {
        if self.is_open() == false {
            log::debug!("Ignoring {:?}: the appointment form is closed", field);
            return false;
        }
        match field {
            DraftField::Title(title) => self.draft.title = title,
            DraftField::Time(time) => self.draft.time = time,
            DraftField::Color(color) => self.draft.color = color,
        }
        true
    }

    /// Write the draft into `store`, then close the form.
    ///
    /// A new appointment gets a fresh id. When editing, the edited appointment is updated in place (if it has been deleted meanwhile, nothing is written). \
    /// On error, neither the store nor the form is changed.
    pub fn commit(&mut self, store: &mut AppointmentStore) -> Result<AppointmentId, FormError> {
        let (date, editing) = match self.state {
            FormState::Closed => return Err(FormError::NotOpen),
            FormState::Open { date, editing } => (date, editing),
        };
        if let Err(err) = self.draft.validate() {
            log::info!("Not committing appointment draft: {}", err);
            return Err(err.into());
        }

        let Draft { title, time, color } = std::mem::replace(&mut self.draft, Draft::empty(self.default_color));
        let id = match editing {
            None => store.add(Appointment::new(date, title, time, color)),
            Some(id) => {
                let update = AppointmentUpdate { date: Some(date), title: Some(title), time: Some(time), color: Some(color) };
                if store.update(&id, update) == false {
                    log::warn!("Appointment {} has been deleted while being edited", id);
                }
                id
            },
        };

        self.state = FormState::Closed;
        Ok(id)
    }

    /// Close the form, discarding the draft
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
        self.draft = Draft::empty(self.default_color);
    }
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 8).unwrap()
    }

    #[test]
    fn open_resets_the_draft() {
        let mut form = AppointmentForm::new();
        assert!(form.is_open() == false);

        form.open_for(date());
        assert!(form.edit_field(DraftField::Title("Screening".into())));
        assert!(form.edit_field(DraftField::Color(EventColor::Purple)));

        form.open_for(date());
        assert_eq!(form.draft(), &Draft { title: String::new(), time: String::new(), color: EventColor::Blue });
        assert_eq!(form.date(), Some(date()));
    }

    #[test]
    fn editing_a_closed_form_does_nothing() {
        let mut form = AppointmentForm::new();
        assert_eq!(form.edit_field(DraftField::Title("Lost".into())), false);
        assert_eq!(form.draft().title, "");
    }

    #[test]
    fn incomplete_drafts_are_rejected() {
        let mut store = AppointmentStore::new();
        let mut form = AppointmentForm::new();
        form.open_for(date());
        form.edit_field(DraftField::Time("10:30".into()));

        assert_eq!(form.commit(&mut store), Err(FormError::Invalid(ValidationError::MissingTitle)));
        assert!(store.is_empty());
        assert!(form.is_open());

        form.edit_field(DraftField::Title("Screening".into()));
        form.edit_field(DraftField::Time(String::new()));
        assert_eq!(form.commit(&mut store), Err(FormError::Invalid(ValidationError::MissingTime)));
        assert!(store.is_empty());
        // The draft survives a failed commit
        assert_eq!(form.draft().title, "Screening");
    }

    #[test]
    fn commit_adds_exactly_once() {
        let mut store = AppointmentStore::new();
        let mut form = AppointmentForm::new();
        form.open_for(date());
        form.edit_field(DraftField::Title("Screening".into()));
        form.edit_field(DraftField::Time("10:30".into()));
        form.edit_field(DraftField::Color(EventColor::Amber));

        let id = form.commit(&mut store).unwrap();
        assert_eq!(store.len(), 1);
        assert!(form.is_open() == false);

        let stored = store.get(&id).unwrap();
        assert_eq!(stored.date(), date());
        assert_eq!(stored.title(), "Screening");
        assert_eq!(stored.time(), "10:30");
        assert_eq!(stored.color(), EventColor::Amber);

        // The form is closed now, a second commit cannot add anything
        assert_eq!(form.commit(&mut store), Err(FormError::NotOpen));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn cancel_discards() {
        let mut store = AppointmentStore::new();
        let mut form = AppointmentForm::new();
        form.open_for(date());
        form.edit_field(DraftField::Title("Screening".into()));
        form.edit_field(DraftField::Time("10:30".into()));
        form.cancel();

        assert!(form.is_open() == false);
        assert_eq!(form.draft().title, "");
        assert_eq!(form.commit(&mut store), Err(FormError::NotOpen));
        assert!(store.is_empty());
    }

    #[test]
    fn edit_existing_appointment() {
        let mut store = AppointmentStore::new();
        let original = Appointment::new(date(), "Screening".into(), "10:30".into(), EventColor::Green);
        let id = store.add(original.clone());

        let mut form = AppointmentForm::new();
        form.open_for_edit(&original);
        assert_eq!(form.editing(), Some(&id));
        assert_eq!(form.draft().title, "Screening");
        assert_eq!(form.draft().color, EventColor::Green);

        form.edit_field(DraftField::Time("11:00".into()));
        assert_eq!(form.commit(&mut store), Ok(id));
        assert_eq!(store.len(), 1);
        let stored = store.get(&id).unwrap();
        assert_eq!(stored.time(), "11:00");
        assert_eq!(stored.title(), "Screening");
    }

    #[test]
    fn editing_a_deleted_appointment_writes_nothing() {
        let mut store = AppointmentStore::new();
        let original = Appointment::new(date(), "Screening".into(), "10:30".into(), EventColor::Green);
        let id = store.add(original.clone());

        let mut form = AppointmentForm::new();
        form.open_for_edit(&original);
        store.remove(&id);

        assert_eq!(form.commit(&mut store), Ok(id));
        assert!(store.is_empty());
        assert!(form.is_open() == false);
    }

    #[test]
    fn custom_default_color() {
        let mut form = AppointmentForm::with_default_color(EventColor::Red);
        form.open_for(date());
        assert_eq!(form.draft().color, EventColor::Red);
    }
}
