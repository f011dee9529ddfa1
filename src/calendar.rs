//! Month grids: partitioning a calendar month into week rows.
//!
//! [`month_to_weeks`] slices one month into weeks aligned to a locale's
//! week-start day without padding into adjacent months; a month view that
//! wants fixed 7-column rows pads the first and last row explicitly with
//! [`prepend_days`] / [`append_days`].

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::locale::Locale;
use crate::moment;

/// One calendar week of day anchors, each at its local day start.
pub type WeekRow = Vec<DateTime<Tz>>;

/// The weeks of exactly one calendar month, in order.
pub type MonthGrid = Vec<WeekRow>;

/// Partition the days of one month into consecutive weeks.
///
/// `first_day_of_month` is the month anchor; its day-start in `tz` is the
/// first emitted day and the walk stops before the anchor shifted one
/// month forward. A new week opens on every day whose local weekday index
/// equals `locale.week_start`, so the first and last rows may hold fewer
/// than seven days. Every day of the month appears exactly once.
#[must_use]
pub fn month_to_weeks(first_day_of_month: DateTime<Utc>, tz: Tz, locale: &Locale) -> MonthGrid {
    let first_day = moment::day_start(tz, first_day_of_month);
    let next_month = moment::shift_months(first_day, 1);
    // re-truncated so a first day sitting past a DST-gap midnight cannot
    // push the boundary into the next month
    let first_day_next_month = moment::day_start(tz, next_month.with_timezone(&Utc));

    let mut weeks: MonthGrid = Vec::new();
    let mut week: WeekRow = Vec::new();
    let mut day = first_day;
    while day < first_day_next_month {
        if weekday_index(&day) == locale.week_start && !week.is_empty() {
            weeks.push(std::mem::take(&mut week));
        }
        week.push(day);
        day = moment::shift_day_start(day, 1);
    }
    if !week.is_empty() {
        weeks.push(week);
    }
    weeks
}

/// Extend a week backward by `count` days before its current first day.
///
/// The row is consumed and returned with the new day anchors at the
/// front, crossing month and year boundaries as needed. A zero or
/// negative `count`, or an empty row, is a no-op.
#[must_use]
pub fn prepend_days(week: WeekRow, count: i64) -> WeekRow {
    if week.is_empty() || count <= 0 {
        return week;
    }
    let mut week = week;
    for _ in 0..count {
        let first = week[0];
        week.insert(0, moment::shift_day_start(first, -1));
    }
    week
}

/// Extend a week forward by `count` days past its current last day.
///
/// Symmetric to [`prepend_days`].
#[must_use]
pub fn append_days(week: WeekRow, count: i64) -> WeekRow {
    if week.is_empty() || count <= 0 {
        return week;
    }
    let mut week = week;
    for _ in 0..count {
        let last = week[week.len() - 1];
        week.push(moment::shift_day_start(last, 1));
    }
    week
}

/// The locale's short day names rotated so the week-start day comes first.
#[must_use]
pub fn weekday_labels(locale: &Locale) -> [&str; 7] {
    std::array::from_fn(|i| locale.short_day((i + usize::from(locale.week_start)) % 7))
}

/// Day-of-week index of a moment, 0 = Sunday, matching the locale tables.
fn weekday_index(moment: &DateTime<Tz>) -> u8 {
    moment.weekday().num_days_from_sunday() as u8
}
