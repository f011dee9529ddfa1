//! Single-moment formatters.
//!
//! Each function here is one format-string application to a localized
//! moment. [`format_time_elapsed`] is the only one that reads the clock,
//! and it has a pure `_at` core so tests can pin "now".

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use super::patterns;
use crate::moment;

/// ISO date shape used for machine-readable labels and config defaults
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO wall-clock time shape, hours and minutes only
pub const ISO_TIME_FORMAT: &str = "%H:%M";

/// Month title for a grid header ("February 2024").
#[must_use]
pub fn format_year_month(tz: Tz, instant: DateTime<Utc>) -> String {
    moment::to_local_moment(instant, tz).format("%B %Y").to_string()
}

/// Full long label with year and hour ("Feb 3, 2024 2:30 pm").
#[must_use]
pub fn format_date_time(tz: Tz, instant: DateTime<Utc>) -> String {
    moment::to_local_moment(instant, tz)
        .format(patterns::LONG.select(false, false))
        .to_string()
}

/// `YYYY-MM-DD` of the instant's local day in the given timezone.
#[must_use]
pub fn format_iso_date(tz: Tz, instant: DateTime<Utc>) -> String {
    moment::to_local_moment(instant, tz).format(ISO_DATE_FORMAT).to_string()
}

/// `HH:MM` of the instant's local wall-clock time in the given timezone.
#[must_use]
pub fn format_iso_time(tz: Tz, instant: DateTime<Utc>) -> String {
    moment::to_local_moment(instant, tz).format(ISO_TIME_FORMAT).to_string()
}

/// Day-of-month (1-31) of the instant in the given timezone.
#[must_use]
pub fn day_in_month(tz: Tz, instant: DateTime<Utc>) -> u32 {
    moment::to_local_moment(instant, tz).day()
}

/// Humanized magnitude of the time between `instant` and now
/// ("5 minutes", "a day", "3 years"). Direction-free: no "ago"/"in"
/// suffix, and an instant in the future reads the same as one equally far
/// in the past.
#[must_use]
pub fn format_time_elapsed(instant: DateTime<Utc>) -> String {
    format_time_elapsed_at(instant, Utc::now())
}

/// Pure core of [`format_time_elapsed`] with an explicit `now`.
///
/// Bucket boundaries follow the familiar humanize table: 44 s, 89 s,
/// 44 min, 89 min, 21 h, 35 h, 25 d, 45 d, 319 d, 547 d.
#[must_use]
pub fn format_time_elapsed_at(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // average Gregorian month and year, in seconds
    const MONTH: f64 = 30.436_875 * 86_400.0;
    const YEAR: f64 = 365.242_5 * 86_400.0;

    let seconds = (now - instant).num_seconds().unsigned_abs();
    let minutes = div_round(seconds, 60);
    let hours = div_round(seconds, 3_600);
    let days = div_round(seconds, 86_400);
    let months = (seconds as f64 / MONTH).round() as u64;
    let years = (seconds as f64 / YEAR).round() as u64;

    match seconds {
        0..=44 => "a few seconds".to_string(),
        45..=89 => "a minute".to_string(),
        _ if minutes <= 44 => format!("{} minutes", minutes),
        _ if hours <= 1 => "an hour".to_string(),
        _ if hours <= 21 => format!("{} hours", hours),
        _ if days <= 1 => "a day".to_string(),
        _ if days <= 25 => format!("{} days", days),
        _ if months <= 1 => "a month".to_string(),
        _ if months <= 10 => format!("{} months", months),
        _ if years <= 1 => "a year".to_string(),
        _ => format!("{} years", years),
    }
}

/// Null-safe instant equality: two absent values are equal, one absent and
/// one present are not, two present values compare by instant.
#[must_use]
pub fn dates_equal(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn div_round(n: u64, unit: u64) -> u64 {
    (n + unit / 2) / unit
}
