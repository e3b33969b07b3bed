//! The fixed palette appointments can be painted with

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use csscolorparser::Color;

/// One of the six colors an appointment can be displayed with.
///
/// The first entry ([`EventColor::Blue`]) is the default color of a new draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Amber,
}

impl EventColor {
    /// Every palette entry, in display order
    pub const ALL: [EventColor; 6] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Orange,
        EventColor::Red,
        EventColor::Purple,
        EventColor::Amber,
    ];

    /// The human-readable name of this color (e.g. shown as a tooltip in a color picker)
    pub fn name(&self) -> &'static str {
        match self {
            EventColor::Blue => "Blue",
            EventColor::Green => "Green",
            EventColor::Orange => "Orange",
            EventColor::Red => "Red",
            EventColor::Purple => "Purple",
            EventColor::Amber => "Amber",
        }
    }

    /// The `#rrggbb` value a shell should paint this color with
    pub fn hex(&self) -> &'static str {
        match self {
            EventColor::Blue => "#0693e3",
            EventColor::Green => "#00d084",
            EventColor::Orange => "#ff6900",
            EventColor::Red => "#cf2e2e",
            EventColor::Purple => "#9b51e0",
            EventColor::Amber => "#fcb900",
        }
    }

    /// This color as a [`csscolorparser::Color`], for shells that need its RGBA components
    pub fn css_color(&self) -> Option<Color> {
        csscolorparser::parse(self.hex()).ok()
    }

    /// Find the palette entry matching any CSS color string (`#0693E3`, `rgb(6, 147, 227)`...).
    ///
    /// Returns `None` if the string is not a valid CSS color, or is a color outside of the palette
    pub fn from_css(value: &str) -> Option<Self> {
        let parsed = match csscolorparser::parse(value) {
            Err(err) => {
                log::debug!("Unable to parse color {:?}: {}", value, err);
                return None;
            },
            Ok(c) => c,
        };

        let wanted = parsed.to_hex_string();
        Self::ALL.iter()
            .copied()
            .find(|color| color.hex() == wanted)
    }
}

impl Default for EventColor {
    fn default() -> Self {
        EventColor::Blue
    }
}

impl Display for EventColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
