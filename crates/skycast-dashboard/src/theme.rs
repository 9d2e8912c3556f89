//! Time-of-day background theme

use serde::Serialize;

/// Background/text color pair applied once per page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub text: &'static str,
}

/// Pick the theme for a local hour (0-23)
///
/// Four fixed bands: morning 06-12, afternoon 12-18, evening 18-21, night
/// otherwise.
pub fn theme_for_hour(hour: u32) -> Theme {
    match hour {
        6..=11 => Theme {
            background: "#FFF9C4",
            text: "#283593",
        },
        12..=17 => Theme {
            background: "#BBDEFB",
            text: "#283593",
        },
        18..=20 => Theme {
            background: "#FFCC80",
            text: "#283593",
        },
        _ => Theme {
            background: "#283593",
            text: "#BBDEFB",
        },
    }
}
