//! Support for library configuration options

use std::error::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use once_cell::sync::Lazy;

use crate::calendar::grid::{OverflowPolicy, DEFAULT_MAX_VISIBLE_PER_DAY};
use crate::color::EventColor;

/// Part of the ProdID string that describes the organization (example of a ProdID string: `-//ABC Corporation//My Product//EN`).
/// Feel free to override it when initing this library.
pub static ORG_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("My organization".to_string())));

/// Part of the ProdID string that describes the product name (example of a ProdID string: `-//ABC Corporation//My Product//EN`).
/// Feel free to override it when initing this library.
pub static PRODUCT_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("OutreachCalendar".to_string())));


/// Display preferences of a calendar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// How many appointments a day cell shows before displaying "+N more"
    pub max_visible_per_day: usize,
    /// The color of a fresh appointment draft
    pub default_color: EventColor,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            max_visible_per_day: DEFAULT_MAX_VISIBLE_PER_DAY,
            default_color: EventColor::default(),
        }
    }
}

impl CalendarConfig {
    /// Read a configuration from a JSON file. Missing keys get their default values
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let config = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };
        Ok(config)
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        OverflowPolicy::new(self.max_visible_per_day)
    }
}

/// Read a string setting, even if another thread panicked while holding it
pub(crate) fn read_setting(setting: &Mutex<String>) -> String {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
