//! Time, duration and string formatting helpers for transaction rows.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::constants::{
    CONFIRMED_DATE_FORMAT, CONFIRMED_TIME_FORMAT, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::locale::{Locale, StrKey};

// ============================================================================
// Relative Time
// ============================================================================

/// Formats how long ago `timestamp` was, relative to `now`.
///
/// # Arguments
///
/// * `timestamp` - Unix timestamp in seconds
/// * `now` - Reference time
///
/// # Returns
///
/// A phrase such as `"just now"`, `"1 minute ago"` or `"3 weeks ago"`.
#[must_use]
pub fn time_ago(timestamp: i64, now: DateTime<Utc>) -> String {
    let elapsed = now.timestamp().saturating_sub(timestamp);
    if elapsed < 0 {
        return "in the future".to_string();
    }

    let (count, unit) = match elapsed {
        e if e < SECONDS_PER_MINUTE => return "just now".to_string(),
        e if e < SECONDS_PER_HOUR => (e / SECONDS_PER_MINUTE, "minute"),
        e if e < SECONDS_PER_DAY => (e / SECONDS_PER_HOUR, "hour"),
        e if e < 7 * SECONDS_PER_DAY => (e / SECONDS_PER_DAY, "day"),
        e if e < 30 * SECONDS_PER_DAY => (e / (7 * SECONDS_PER_DAY), "week"),
        e if e < 365 * SECONDS_PER_DAY => (e / (30 * SECONDS_PER_DAY), "month"),
        e => (e / (365 * SECONDS_PER_DAY), "year"),
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Formats a timestamp for compact lists.
///
/// Today's timestamps read as relative time, yesterday's as "Yesterday"
/// (same month only), anything older as `Jan 2, 2006`. Dates are in UTC.
#[must_use]
pub fn format_date_or_time(timestamp: i64, now: DateTime<Utc>, locale: &Locale) -> String {
    let Some(time) = DateTime::from_timestamp(timestamp, 0) else {
        return locale.text(StrKey::Unknown).to_string();
    };

    if time.year() == now.year() && time.month() == now.month() {
        if time.day() == now.day() {
            return time_ago(timestamp, now);
        }
        if now.day().checked_sub(1) == Some(time.day()) {
            return locale.text(StrKey::Yesterday).to_string();
        }
    }

    time.format(CONFIRMED_DATE_FORMAT).to_string()
}

/// Formats a confirmed transaction's timestamp in the given time zone,
/// e.g. `"Jan 2, 2006 at 03:04:05 PM"`.
#[must_use]
pub fn format_confirmed_at<Tz: TimeZone>(timestamp: i64, tz: &Tz, locale: &Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(timestamp, 0).single() {
        Some(time) => {
            let date = time.format(CONFIRMED_DATE_FORMAT).to_string();
            let clock = time.format(CONFIRMED_TIME_FORMAT).to_string();
            locale.format(StrKey::ConfirmedAt, &[&date, &clock])
        }
        None => locale.text(StrKey::Unknown).to_string(),
    }
}

// ============================================================================
// Durations
// ============================================================================

/// Formats a duration in its largest whole unit.
///
/// Short forms use `d`, `h` and `s` suffixes. The minute bucket keeps the
/// `s` suffix in short form, matching what wallet users already see.
#[must_use]
pub fn time_format(secs: i64, long: bool, locale: &Locale) -> String {
    let (value, short, long_key) = if secs >= SECONDS_PER_DAY {
        (secs / SECONDS_PER_DAY, "d", StrKey::Days)
    } else if secs >= SECONDS_PER_HOUR {
        (secs / SECONDS_PER_HOUR, "h", StrKey::Hours)
    } else if secs >= SECONDS_PER_MINUTE {
        (secs / SECONDS_PER_MINUTE, "s", StrKey::Minutes)
    } else {
        let unit = if long {
            locale.text(StrKey::Seconds)
        } else {
            "s"
        };
        return format!("{secs} {unit}");
    };

    if long {
        format!("{value} {}", locale.text(long_key))
    } else {
        format!("{value}{short}")
    }
}

/// Formats seconds as whole days plus an `h`/`m`/`s` remainder,
/// e.g. `93784` → `"1d2h3m4s"`.
#[must_use]
pub fn seconds_to_days(total_secs: i64) -> String {
    let days = total_secs / SECONDS_PER_DAY;
    let rest = clock_duration(total_secs % SECONDS_PER_DAY);
    if days > 0 {
        format!("{days}d{rest}")
    } else {
        rest
    }
}

fn clock_duration(secs: i64) -> String {
    if secs == 0 {
        return "0s".to_string();
    }
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.abs();
    let (h, m, s) = (
        secs / SECONDS_PER_HOUR,
        (secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        secs % SECONDS_PER_MINUTE,
    );
    if h > 0 {
        format!("{sign}{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{sign}{m}m{s}s")
    } else {
        format!("{sign}{s}s")
    }
}

// ============================================================================
// Strings
// ============================================================================

/// Shortens `s` to `max_chars` characters, ending with `...` when cut.
///
/// For limits above three the ellipsis fits inside the limit.
#[must_use]
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = if max_chars > 3 { max_chars - 3 } else { max_chars };
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use rstest::rstest;

    fn at(ts: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(ts, 0).unwrap()
    }

    const NOW: i64 = 1_700_000_000; // Tue, 14 Nov 2023 22:13:20 UTC

    #[rstest]
    #[case(NOW, "just now")]
    #[case(NOW - 59, "just now")]
    #[case(NOW - 60, "1 minute ago")]
    #[case(NOW - 45 * 60, "45 minutes ago")]
    #[case(NOW - 3 * 3600, "3 hours ago")]
    #[case(NOW - 86_400, "1 day ago")]
    #[case(NOW - 14 * 86_400, "2 weeks ago")]
    #[case(NOW - 90 * 86_400, "3 months ago")]
    #[case(NOW - 800 * 86_400, "2 years ago")]
    #[case(NOW + 10, "in the future")]
    #[case(i64::MAX, "in the future")]
    #[case(i64::MIN, "292471208677 years ago")]
    fn test_time_ago(#[case] ts: i64, #[case] expected: &str) {
        assert_eq!(time_ago(ts, at(NOW)), expected);
    }

    #[test]
    fn test_format_date_or_time() {
        let locale = Locale::english();
        assert_eq!(format_date_or_time(NOW - 120, at(NOW), &locale), "2 minutes ago");
        assert_eq!(format_date_or_time(NOW - 86_400, at(NOW), &locale), "Yesterday");
        assert_eq!(
            format_date_or_time(NOW - 5 * 86_400, at(NOW), &locale),
            "Nov 9, 2023"
        );
        assert_eq!(
            format_date_or_time(1_136_239_445, at(NOW), &locale),
            "Jan 2, 2006"
        );
    }

    #[test]
    fn test_format_confirmed_at_uses_zone() {
        let locale = Locale::english();
        // 2006-01-02 22:04:05 UTC
        let ts = 1_136_239_445;
        let utc = FixedOffset::east_opt(0).unwrap();
        let minus_seven = FixedOffset::west_opt(7 * 3600).unwrap();

        assert_eq!(
            format_confirmed_at(ts, &utc, &locale),
            "Jan 2, 2006 at 10:04:05 PM"
        );
        assert_eq!(
            format_confirmed_at(ts, &minus_seven, &locale),
            "Jan 2, 2006 at 03:04:05 PM"
        );
    }

    #[rstest]
    #[case(90_000, false, "1d")]
    #[case(90_000, true, "1 days")]
    #[case(7_200, false, "2h")]
    #[case(7_200, true, "2 hours")]
    #[case(125, false, "2s")]
    #[case(125, true, "2 minutes")]
    #[case(42, false, "42 s")]
    #[case(42, true, "42 seconds")]
    fn test_time_format(#[case] secs: i64, #[case] long: bool, #[case] expected: &str) {
        assert_eq!(time_format(secs, long, &Locale::english()), expected);
    }

    #[rstest]
    #[case(0, "0s")]
    #[case(5, "5s")]
    #[case(120, "2m0s")]
    #[case(3_723, "1h2m3s")]
    #[case(93_784, "1d2h3m4s")]
    #[case(172_800, "2d0s")]
    fn test_seconds_to_days(#[case] secs: i64, #[case] expected: &str) {
        assert_eq!(seconds_to_days(secs), expected);
    }

    #[rstest]
    #[case("short", 10, "short")]
    #[case("abcdefghij", 8, "abcde...")]
    #[case("abcdef", 3, "abc...")]
    #[case("ééééé", 4, "é...")]
    fn test_truncate_string(#[case] input: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(truncate_string(input, max), expected);
    }
}
