//! Dashboard view-model logic
//!
//! Pure functions that turn a time-ordered list of forecast entries into
//! everything the frontend paints: the current-conditions card, the
//! down-sampled temperature graph layout, and the time-of-day theme.
//! No I/O happens here; the server serializes the result as JSON.

pub mod card;
pub mod graph;
pub mod icons;
pub mod select;
pub mod theme;

pub use card::*;
pub use graph::*;
pub use icons::*;
pub use select::*;
pub use theme::*;

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use skycast_core::ForecastEntry;

/// Everything the dashboard renders for one location
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub card: CardView,
    pub graph: GraphLayout,
    pub theme: Theme,
}

impl DashboardView {
    /// Build the full view model for `now`, or `None` when there is no data
    pub fn build(entries: &[ForecastEntry], now: NaiveDateTime) -> Option<Self> {
        let reference = round_to_nearest_hour(now);
        let current = nearest_entry(entries, reference)?;

        Some(Self {
            card: CardView::from_entry(current),
            graph: GraphLayout::build(entries),
            theme: theme_for_hour(now.hour()),
        })
    }
}

/// Display rounding with JS Math.round semantics: halves round toward
/// positive infinity, so -20.5 displays as -20, not -21
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
