//! Expiry classification and relative time descriptions

use crate::models::{ExpiryStatus, ExpiryThreshold};
use chrono::{DateTime, TimeDelta, Utc};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Classify a certificate's `not_after` moment against `now`.
///
/// Both comparisons are strict, so a certificate expiring exactly at
/// `now + threshold` is still healthy. A warning horizon past the last
/// representable moment lies after every certificate's expiry.
pub fn classify(
    now: DateTime<Utc>,
    not_after: DateTime<Utc>,
    threshold: ExpiryThreshold,
) -> ExpiryStatus {
    if now > not_after {
        return ExpiryStatus::Expired;
    }

    match now.checked_add_signed(threshold.as_delta()) {
        Some(horizon) if horizon <= not_after => ExpiryStatus::Healthy,
        _ => ExpiryStatus::ExpiringSoon,
    }
}

/// Describe `moment` relative to `now`, e.g. "in 3 days" or "2 hours ago"
pub fn relative_time(now: DateTime<Utc>, moment: DateTime<Utc>) -> String {
    let delta = moment - now;
    let secs = delta.num_seconds().unsigned_abs();

    let Some(magnitude) = magnitude(secs) else {
        return "now".to_string();
    };

    if delta > TimeDelta::zero() {
        format!("in {}", magnitude)
    } else {
        format!("{} ago", magnitude)
    }
}

fn magnitude(secs: u64) -> Option<String> {
    let (count, unit) = match secs {
        0 => return None,
        s if s < MINUTE => (s, "second"),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < WEEK => (s / DAY, "day"),
        s if s < MONTH => (s / WEEK, "week"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };

    Some(if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_expiring_within_threshold() {
        let not_after = now() + TimeDelta::days(2);
        assert_eq!(
            classify(now(), not_after, ExpiryThreshold::from_days(7)),
            ExpiryStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_healthy_beyond_threshold() {
        let not_after = now() + TimeDelta::days(2);
        assert_eq!(
            classify(now(), not_after, ExpiryThreshold::from_days(1)),
            ExpiryStatus::Healthy
        );
    }

    #[test]
    fn test_expired_regardless_of_threshold() {
        let not_after = now() - TimeDelta::days(1);
        for days in [0, 1, 7, 365] {
            assert_eq!(
                classify(now(), not_after, ExpiryThreshold::from_days(days)),
                ExpiryStatus::Expired
            );
        }
    }

    #[test]
    fn test_boundary_is_healthy() {
        let threshold = ExpiryThreshold::from_days(7);
        let not_after = now() + threshold.as_delta();
        assert_eq!(classify(now(), not_after, threshold), ExpiryStatus::Healthy);

        let just_inside = not_after - TimeDelta::seconds(1);
        assert_eq!(
            classify(now(), just_inside, threshold),
            ExpiryStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_expiring_this_instant_is_not_expired() {
        assert_eq!(
            classify(now(), now(), ExpiryThreshold::from_days(7)),
            ExpiryStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_huge_threshold_does_not_overflow() {
        let not_after = now() + TimeDelta::days(400);
        for days in [100_000_000, 1_000_000_000_000, i64::MAX] {
            assert_eq!(
                classify(now(), not_after, ExpiryThreshold::from_days(days)),
                ExpiryStatus::ExpiringSoon
            );
        }
        assert_eq!(
            classify(now(), now() - TimeDelta::days(1), ExpiryThreshold::from_days(i64::MAX)),
            ExpiryStatus::Expired
        );
    }

    #[test]
    fn test_relative_time_future() {
        assert_eq!(relative_time(now(), now() + TimeDelta::days(3)), "in 3 days");
        assert_eq!(relative_time(now(), now() + TimeDelta::hours(1)), "in 1 hour");
        assert_eq!(relative_time(now(), now() + TimeDelta::days(60)), "in 2 months");
        assert_eq!(relative_time(now(), now() + TimeDelta::days(800)), "in 2 years");
    }

    #[test]
    fn test_relative_time_past() {
        assert_eq!(relative_time(now(), now() - TimeDelta::days(1)), "1 day ago");
        assert_eq!(relative_time(now(), now() - TimeDelta::minutes(5)), "5 minutes ago");
        assert_eq!(relative_time(now(), now() - TimeDelta::days(14)), "2 weeks ago");
    }

    #[test]
    fn test_relative_time_now() {
        assert_eq!(relative_time(now(), now()), "now");
    }
}
