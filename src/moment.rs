//! Moment adapter: localizing instants and timezone-aware calendar shifts.
//!
//! Everything downstream works on a "moment", an absolute instant
//! interpreted through a caller-supplied IANA timezone. The helpers here
//! wrap that localization plus the day/month arithmetic the grid and range
//! code needs. Day and month shifts preserve local wall-clock time, so a
//! one-day step across a DST transition is a 23- or 25-hour step in
//! absolute time, never a blind `+24h`.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimegridError;

/// Parse an IANA timezone identifier (e.g. `"Europe/Berlin"`).
pub fn parse_timezone(raw: &str) -> Result<Tz, TimegridError> {
    raw.trim()
        .parse::<Tz>()
        .map_err(|_| TimegridError::InvalidTimezone(raw.to_string()))
}

/// Interpret an instant in the given timezone.
///
/// Deterministic and total: the same `(instant, tz)` pair always yields a
/// moment with identical calendar fields.
#[must_use]
pub fn to_local_moment(instant: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    instant.with_timezone(&tz)
}

/// Truncate an instant to the start of its day in the given timezone.
///
/// All sub-day fields of the result are zero, except on days whose local
/// midnight falls in a spring-forward gap, where the first wall-clock time
/// after the gap is used instead.
#[must_use]
pub fn day_start(tz: Tz, instant: DateTime<Utc>) -> DateTime<Tz> {
    let local = to_local_moment(instant, tz);
    resolve_local(tz, local.date_naive().and_time(NaiveTime::MIN))
}

/// Shift a moment by `days` calendar days, keeping its local time-of-day.
#[must_use]
pub fn shift_days(moment: DateTime<Tz>, days: i64) -> DateTime<Tz> {
    let date = moment
        .date_naive()
        .checked_add_signed(Duration::days(days))
        .unwrap_or_else(|| moment.date_naive());
    resolve_local(moment.timezone(), date.and_time(moment.time()))
}

/// Shift a moment by `months` calendar months, keeping its local
/// time-of-day and clamping the day-of-month to the target month's length
/// (Jan 31 + 1 month = Feb 29 in a leap year).
#[must_use]
pub fn shift_months(moment: DateTime<Tz>, months: i32) -> DateTime<Tz> {
    let date = moment.date_naive();
    let shifted = if months >= 0 {
        date.checked_add_months(chrono::Months::new(months as u32))
    } else {
        date.checked_sub_months(chrono::Months::new(months.unsigned_abs()))
    }
    .unwrap_or(date);
    resolve_local(moment.timezone(), shifted.and_time(moment.time()))
}

/// Day-start anchor of the day `days` calendar days away from this
/// moment's day.
///
/// Day-by-day walks use this instead of chaining [`shift_days`], which
/// preserves time-of-day: an off-midnight anchor (a day whose midnight
/// fell in a DST gap) would otherwise drag its wall-clock time onto every
/// following day.
#[must_use]
pub fn shift_day_start(moment: DateTime<Tz>, days: i64) -> DateTime<Tz> {
    let date = shift_days(moment, days).date_naive();
    resolve_local(moment.timezone(), date.and_time(NaiveTime::MIN))
}

/// Whether a moment sits exactly at its local day boundary.
#[must_use]
pub fn is_day_start(moment: &DateTime<Tz>) -> bool {
    moment.time() == NaiveTime::MIN
}

/// Resolve a local wall-clock value in a timezone.
///
/// Ambiguous times (fall-back hour) resolve to the earlier offset.
/// Nonexistent times (spring-forward gap) resolve to the first
/// representable wall-clock time after the gap, probed in 30-minute steps
/// so half-hour zones resolve too; the probe is bounded because a few
/// zones have skipped an entire calendar day.
pub(crate) fn resolve_local(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(moment) => moment,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let mut probe = naive;
            for _ in 0..96 {
                probe += Duration::minutes(30);
                if let Some(moment) = tz.from_local_datetime(&probe).earliest() {
                    return moment;
                }
            }
            tz.from_utc_datetime(&naive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_resolve_local_spring_forward_gap() {
        // US Eastern jumps 02:00 -> 03:00 on 2024-03-10
        let tz: Tz = "America/New_York".parse().unwrap();
        let gap = NaiveDateTime::parse_from_str("2024-03-10T02:30", "%Y-%m-%dT%H:%M").unwrap();
        let resolved = resolve_local(tz, gap);
        assert_eq!(resolved.hour(), 3);
        assert_eq!(resolved.minute(), 0);
    }

    #[test]
    fn test_resolve_local_ambiguous_takes_earliest() {
        // US Eastern repeats 01:00-02:00 on 2024-11-03; earliest is EDT (UTC-4)
        let tz: Tz = "America/New_York".parse().unwrap();
        let ambiguous = NaiveDateTime::parse_from_str("2024-11-03T01:30", "%Y-%m-%dT%H:%M").unwrap();
        let resolved = resolve_local(tz, ambiguous);
        assert_eq!(resolved.with_timezone(&Utc).hour(), 5);
    }

    #[test]
    fn test_shift_months_clamps_day() {
        let tz: Tz = "UTC".parse().unwrap();
        let jan_31 = tz.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).single().unwrap();
        let shifted = shift_months(jan_31, 1);
        assert_eq!((shifted.year(), shifted.month(), shifted.day()), (2024, 2, 29));
    }
}
