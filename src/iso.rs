//! ISO date/time input helpers.
//!
//! Date and time text inputs hand over raw strings; these helpers
//! normalize and shape-check them before they are combined into a moment.
//! Validation is shape-only (`YYYY-MM-DD`, `HH:MM`, ASCII digits);
//! semantic calendar checks happen only when the strings are combined and
//! actually resolved.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TimegridError;
use crate::format::point;
use crate::moment;

// [0-9], not \d: the regex crate's \d also matches Unicode digits
static ISO_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());
static ISO_TIME_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap());

/// Strip every character that is not an ASCII digit or a hyphen.
#[must_use]
pub fn normalize_iso_date(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect()
}

/// Whether a string has exactly the `YYYY-MM-DD` shape.
///
/// Shape only: `"2024-13-40"` passes, `"2024/01/01"` does not.
#[must_use]
pub fn validate_iso_date(s: &str) -> bool {
    ISO_DATE_SHAPE.is_match(s)
}

/// Strip every character that is not an ASCII digit or a colon.
#[must_use]
pub fn normalize_iso_time(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == ':').collect()
}

/// Whether a string has exactly the `HH:MM` shape.
#[must_use]
pub fn validate_iso_time(s: &str) -> bool {
    ISO_TIME_SHAPE.is_match(s)
}

/// Combine a date string and a time string into a moment in `tz`.
///
/// The inputs are expected to have passed [`validate_iso_date`] and
/// [`validate_iso_time`] first; anything that does not resolve to a real
/// calendar date-time (month 13, day 40) comes back as
/// [`TimegridError::InvalidDateTime`]. A wall-clock time falling in a DST
/// gap resolves to the first representable time after the gap, an
/// ambiguous one to the earlier offset.
pub fn combine_date_and_time(date: &str, time: &str, tz: Tz) -> Result<DateTime<Tz>, TimegridError> {
    let combined = format!("{}T{}", date, time);
    let naive =
        NaiveDateTime::parse_from_str(&combined, &format!("{}T{}", point::ISO_DATE_FORMAT, point::ISO_TIME_FORMAT))
            .map_err(|_| TimegridError::InvalidDateTime(combined.clone()))?;
    Ok(moment::resolve_local(tz, naive))
}
