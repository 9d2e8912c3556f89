//! Nearest-hour selection

use chrono::{Duration, NaiveDateTime, Timelike};
use skycast_core::ForecastEntry;

/// Parse an entry timestamp (`YYYY-MM-DDTHH:MM`, optionally with seconds)
pub fn parse_entry_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Round to the nearest hour boundary: minute < 30 rounds down, else up
pub fn round_to_nearest_hour(now: NaiveDateTime) -> NaiveDateTime {
    let floored = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    if now.minute() < 30 {
        floored
    } else {
        floored + Duration::hours(1)
    }
}

/// Pick the entry whose time is closest to `reference`
///
/// Ties resolve to the earlier entry (the list is ascending by time and the
/// comparison is strict). Entries with unparseable timestamps are never
/// preferred over parseable ones. Empty list yields `None`.
pub fn nearest_entry(
    entries: &[ForecastEntry],
    reference: NaiveDateTime,
) -> Option<&ForecastEntry> {
    let mut closest = entries.first()?;
    let mut min_diff = i64::MAX;

    for entry in entries {
        let Some(time) = parse_entry_time(&entry.time) else {
            continue;
        };
        let diff = (time - reference).num_seconds().abs();
        if diff < min_diff {
            min_diff = diff;
            closest = entry;
        }
    }

    Some(closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        parse_entry_time(s).unwrap()
    }

    fn entry(time: &str) -> ForecastEntry {
        ForecastEntry {
            time: time.to_string(),
            temperature: Some(20.0),
            feels_like: Some(19.0),
            rain_mm: None,
            snow_mm: None,
            precip_prob: None,
            weather_desc: "Clear sky".to_string(),
        }
    }

    #[test]
    fn minute_below_30_rounds_down() {
        assert_eq!(ts("2026-08-26T14:00"), round_to_nearest_hour(ts("2026-08-26T14:29")));
        assert_eq!(ts("2026-08-26T14:00"), round_to_nearest_hour(ts("2026-08-26T14:00")));
    }

    #[test]
    fn minute_30_or_more_rounds_up() {
        assert_eq!(ts("2026-08-26T15:00"), round_to_nearest_hour(ts("2026-08-26T14:30")));
        assert_eq!(ts("2026-08-26T14:00"), round_to_nearest_hour(ts("2026-08-26T13:40")));
    }

    #[test]
    fn rounding_up_crosses_midnight() {
        assert_eq!(ts("2026-08-27T00:00"), round_to_nearest_hour(ts("2026-08-26T23:45")));
    }

    #[test]
    fn selects_exact_match() {
        let entries = vec![
            entry("2026-08-26T13:00"),
            entry("2026-08-26T14:00"),
            entry("2026-08-26T15:00"),
        ];
        let picked = nearest_entry(&entries, ts("2026-08-26T14:00")).unwrap();
        assert_eq!(picked.time, "2026-08-26T14:00");
    }

    #[test]
    fn selection_after_rounding_an_odd_now() {
        // actual now = 13:40 -> rounded reference 14:00
        let entries = vec![
            entry("2026-08-26T13:00"),
            entry("2026-08-26T14:00"),
            entry("2026-08-26T15:00"),
        ];
        let reference = round_to_nearest_hour(ts("2026-08-26T13:40"));
        let picked = nearest_entry(&entries, reference).unwrap();
        assert_eq!(picked.time, "2026-08-26T14:00");
    }

    #[test]
    fn equal_distance_resolves_to_earlier_entry() {
        let entries = vec![entry("2026-08-26T13:00"), entry("2026-08-26T15:00")];
        let picked = nearest_entry(&entries, ts("2026-08-26T14:00")).unwrap();
        assert_eq!(picked.time, "2026-08-26T13:00");
    }

    #[test]
    fn empty_list_yields_none() {
        assert!(nearest_entry(&[], ts("2026-08-26T14:00")).is_none());
    }

    #[test]
    fn unparseable_times_fall_back_to_first_entry() {
        let entries = vec![entry("garbage"), entry("also-garbage")];
        let picked = nearest_entry(&entries, ts("2026-08-26T14:00")).unwrap();
        assert_eq!(picked.time, "garbage");
    }
}
