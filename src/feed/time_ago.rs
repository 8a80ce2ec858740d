//! Compact "time ago" labels (`30s`, `4h`, `2w`).

use chrono::{DateTime, Datelike, Months, Utc};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
/// 365.25 days
const YEAR_MS: i64 = 31_557_600_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

/// Exclusive upper bound on elapsed time, and the unit reported below it.
const THRESHOLDS: [(i64, Unit); 6] = [
    (MINUTE_MS, Unit::Seconds),
    (HOUR_MS, Unit::Minutes),
    (DAY_MS, Unit::Hours),
    (7 * DAY_MS, Unit::Days),
    (30 * DAY_MS, Unit::Weeks),
    (YEAR_MS, Unit::Months),
];

impl Unit {
    fn name(self) -> &'static str {
        match self {
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
        }
    }

    /// First letter of the unit name. Minutes and months both read `m`.
    fn abbreviation(self) -> char {
        self.name().chars().next().unwrap_or('?')
    }

    fn count(self, created: DateTime<Utc>, now: DateTime<Utc>, elapsed_ms: i64) -> i64 {
        match self {
            Unit::Seconds => elapsed_ms / SECOND_MS,
            Unit::Minutes => elapsed_ms / MINUTE_MS,
            Unit::Hours => elapsed_ms / HOUR_MS,
            Unit::Days => elapsed_ms / DAY_MS,
            Unit::Weeks => elapsed_ms / WEEK_MS,
            Unit::Months => calendar_months(created, now),
        }
    }
}

/// Age of `created` relative to `now`, or `None` once it is a year old or more.
///
/// Timestamps in the future are clamped to zero elapsed time (`0s`).
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let created = created.min(now);
    let elapsed_ms = (now - created).num_milliseconds();

    THRESHOLDS
        .iter()
        .find(|(limit, _)| elapsed_ms < *limit)
        .map(|(_, unit)| format!("{}{}", unit.count(created, now, elapsed_ms), unit.abbreviation()))
}

/// Whole calendar months between the two instants (`from <= to`).
fn calendar_months(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;

    while months > 0 {
        match from.checked_add_months(Months::new(months as u32)) {
            Some(shifted) if shifted <= to => break,
            _ => months -= 1,
        }
    }

    i64::from(months.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> Option<String> {
        format_age(now() - duration, now())
    }

    #[test]
    fn test_seconds() {
        assert_eq!(ago(Duration::seconds(30)).as_deref(), Some("30s"));
        assert_eq!(ago(Duration::zero()).as_deref(), Some("0s"));
        assert_eq!(ago(Duration::milliseconds(59_999)).as_deref(), Some("59s"));
    }

    #[test]
    fn test_minutes_truncate() {
        assert_eq!(ago(Duration::seconds(90)).as_deref(), Some("1m"));
        assert_eq!(ago(Duration::seconds(60)).as_deref(), Some("1m"));
        assert_eq!(ago(Duration::minutes(59) + Duration::seconds(59)).as_deref(), Some("59m"));
    }

    #[test]
    fn test_hours_days_weeks() {
        assert_eq!(ago(Duration::hours(3)).as_deref(), Some("3h"));
        assert_eq!(ago(Duration::hours(23)).as_deref(), Some("23h"));
        assert_eq!(ago(Duration::hours(24)).as_deref(), Some("1d"));
        assert_eq!(ago(Duration::days(6)).as_deref(), Some("6d"));
        assert_eq!(ago(Duration::days(7)).as_deref(), Some("1w"));
        assert_eq!(ago(Duration::days(29)).as_deref(), Some("4w"));
    }

    #[test]
    fn test_calendar_months() {
        let created = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();
        let on = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(format_age(created, before).as_deref(), Some("1m"));
        assert_eq!(format_age(created, on).as_deref(), Some("2m"));
    }

    #[test]
    fn test_thirty_days_is_months_not_weeks() {
        // 30 days back from 2026-10-16 lands on 2026-09-16: exactly one month
        assert_eq!(ago(Duration::days(30)).as_deref(), Some("1m"));
    }

    #[test]
    fn test_thirty_days_inside_one_month_is_zero_months() {
        // Jan 1 -> Jan 31 is past the weeks range but not a whole calendar month.
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(format_age(created, now).as_deref(), Some("0m"));
        let feb = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(format_age(created, feb).as_deref(), Some("1m"));
    }

    #[test]
    fn test_year_cutoff() {
        assert_eq!(ago(Duration::days(400)), None);
        assert_eq!(ago(Duration::milliseconds(YEAR_MS)), None);
        assert_eq!(ago(Duration::days(365)).as_deref(), Some("12m"));
        assert_eq!(ago(Duration::days(364)).as_deref(), Some("11m"));
    }

    #[test]
    fn test_future_is_clamped_to_zero() {
        assert_eq!(
            format_age(now() + Duration::minutes(5), now()).as_deref(),
            Some("0s")
        );
    }

    #[test]
    fn test_unit_abbreviations() {
        let letters: String = THRESHOLDS.iter().map(|(_, u)| u.abbreviation()).collect();
        assert_eq!(letters, "smhdwm");
    }
}
