//! Publish-time resolution

use chrono::{NaiveDateTime, TimeDelta};
use std::time::Duration;

/// Default minimum lead time between "now" and the reported publish time
pub const DEFAULT_LEAD_TIME: Duration = Duration::from_secs(5 * 60);

/// Compute the effective publish timestamp to report to receivers
///
/// The floor is `now + lead`; the item's own schedule wins only when it is
/// strictly later. Receivers therefore never see a timestamp in the past or
/// too close to now, even when the host's scheduling granularity is coarse.
pub fn resolve_publish_time(
    scheduled_at: NaiveDateTime,
    now: NaiveDateTime,
    lead: TimeDelta,
) -> NaiveDateTime {
    let floor = now + lead;
    if scheduled_at > floor { scheduled_at } else { floor }
}

/// Format a publish timestamp the way receivers expect: `YYYY-MM-DD HH:MM:SS`
///
/// Wall-clock time in the zone configured on the host, no offset suffix.
pub fn format_publish_time(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_floor_wins_for_near_schedules() {
        let now = at(12, 0);
        let resolved = resolve_publish_time(at(12, 1), now, TimeDelta::minutes(5));
        assert_eq!(resolved, at(12, 5));
    }

    #[test]
    fn test_later_schedule_wins() {
        let now = at(12, 0);
        let resolved = resolve_publish_time(at(13, 0), now, TimeDelta::minutes(5));
        assert_eq!(resolved, at(13, 0));
    }

    #[test]
    fn test_exactly_at_floor_uses_floor() {
        let now = at(12, 0);
        // Strictly-later is required, so an exact tie resolves to the floor.
        let resolved = resolve_publish_time(at(12, 5), now, TimeDelta::minutes(5));
        assert_eq!(resolved, at(12, 5));
    }

    #[test]
    fn test_past_schedule_uses_floor() {
        let now = at(12, 0);
        let resolved = resolve_publish_time(at(9, 30), now, TimeDelta::minutes(5));
        assert_eq!(resolved, at(12, 5));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_publish_time(at(9, 5)), "2024-03-10 09:05:00");
    }
}
