//! Human-readable labels for a time range.
//!
//! A range is rendered one of three ways, checked in order:
//!
//! - **one whole day**: both endpoints at local day-start, exactly one
//!   calendar day apart. A single label without hour.
//! - **day range**: both endpoints at day-start otherwise. Two hour-less
//!   labels, the second showing the inclusive last day (`end - 1 day`).
//! - **hour range**: anything else. Two labels including the hour.
//!
//! The year is dropped from labels when the rendered dates fall in the
//! current year; "current" is judged against an injectable `now` so the
//! `_at` variants stay deterministic under test.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::patterns;
use crate::moment;

/// A start/end pair of absolute instants, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Primary label plus the optional second endpoint label.
pub type RangeLabels = (String, Option<String>);

/// Format both endpoints of a range, localized into `tz`.
#[must_use]
pub fn format_dates_in_time_range(range: TimeRange, tz: Tz) -> RangeLabels {
    format_dates_in_time_range_at(range, tz, Utc::now())
}

/// Pure core of [`format_dates_in_time_range`] with an explicit `now`.
#[must_use]
pub fn format_dates_in_time_range_at(range: TimeRange, tz: Tz, now: DateTime<Utc>) -> RangeLabels {
    let start = moment::to_local_moment(range.start, tz);
    let end = moment::to_local_moment(range.end, tz);
    let current_year = moment::to_local_moment(now, tz).year();
    let day_aligned = moment::is_day_start(&start) && moment::is_day_start(&end);

    if day_aligned && end == moment::shift_days(start, 1) {
        // [midnight, next midnight) denotes one whole day
        let omit_year = start.year() == current_year;
        return (long_label(&start, omit_year, true), None);
    }

    if day_aligned {
        let last_day = moment::shift_days(end, -1);
        let omit_year = start.year() == current_year && last_day.year() == current_year;
        return (
            long_label(&start, omit_year, true),
            Some(long_label(&last_day, omit_year, true)),
        );
    }

    let omit_year = start.year() == current_year && end.year() == current_year;
    (
        long_label(&start, omit_year, false),
        Some(long_label(&end, omit_year, false)),
    )
}

/// Only the primary (start) label of the range.
#[must_use]
pub fn format_start_of_time_range(range: TimeRange, tz: Tz) -> String {
    format_start_of_time_range_at(range, tz, Utc::now())
}

/// Pure core of [`format_start_of_time_range`] with an explicit `now`.
#[must_use]
pub fn format_start_of_time_range_at(range: TimeRange, tz: Tz, now: DateTime<Utc>) -> String {
    format_dates_in_time_range_at(range, tz, now).0
}

/// Both labels joined with `" - "`, or just the primary one when the range
/// collapses to a single day.
#[must_use]
pub fn format_time_range(range: TimeRange, tz: Tz) -> String {
    format_time_range_at(range, tz, Utc::now())
}

/// Pure core of [`format_time_range`] with an explicit `now`.
#[must_use]
pub fn format_time_range_at(range: TimeRange, tz: Tz, now: DateTime<Utc>) -> String {
    match format_dates_in_time_range_at(range, tz, now) {
        (first, Some(second)) => format!("{first} - {second}"),
        (first, None) => first,
    }
}

fn long_label(moment: &DateTime<Tz>, omit_year: bool, omit_hour: bool) -> String {
    moment.format(patterns::LONG.select(omit_year, omit_hour)).to_string()
}
