//! Caller-supplied locale table for calendar rendering.
//!
//! A [`Locale`] carries the short day/month names and the week-start index
//! a dashboard hands down from its user settings. The library never ships
//! locale data of its own beyond the English defaults.

use serde::{Deserialize, Serialize};

use crate::error::TimegridError;

/// Short day/month names plus the day-of-week a calendar week starts on.
///
/// Day indices run 0–6 with 0 = Sunday, month indices 0–11 with
/// 0 = January. Both arrays are consumed by fixed index; passing an index
/// outside that range is a caller error and panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Short weekday names, index 0 = Sunday
    pub short_days: [String; 7],
    /// Short month names, index 0 = January
    pub short_months: [String; 12],
    /// Day-of-week index (0–6, 0 = Sunday) a week begins on
    pub week_start: u8,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            short_days: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from),
            short_months: ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
                .map(String::from),
            week_start: 0,
        }
    }
}

impl Locale {
    /// English locale with weeks starting on Monday.
    #[must_use]
    pub fn monday_start() -> Self {
        Self {
            week_start: 1,
            ..Self::default()
        }
    }

    /// Short name for a day-of-week index (0 = Sunday).
    #[must_use]
    pub fn short_day(&self, index: usize) -> &str {
        &self.short_days[index]
    }

    /// Short name for a zero-based month index (0 = January).
    #[must_use]
    pub fn short_month(&self, index: usize) -> &str {
        &self.short_months[index]
    }

    /// Check the table is usable as configuration.
    ///
    /// Array lengths are enforced by the field types, so only the
    /// week-start index can be out of range.
    pub fn validate(&self) -> Result<(), TimegridError> {
        if self.week_start > 6 {
            return Err(TimegridError::InvalidLocale(format!(
                "week_start must be 0-6, got {}",
                self.week_start
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale() {
        let locale = Locale::default();
        assert_eq!(locale.week_start, 0);
        assert_eq!(locale.short_day(0), "Sun");
        assert_eq!(locale.short_day(6), "Sat");
        assert_eq!(locale.short_month(0), "Jan");
        assert_eq!(locale.short_month(11), "Dec");
    }

    #[test]
    fn test_monday_start() {
        let locale = Locale::monday_start();
        assert_eq!(locale.week_start, 1);
        assert_eq!(locale.short_day(1), "Mon");
    }

    #[test]
    fn test_validate_week_start_range() {
        assert!(Locale::default().validate().is_ok());
        assert!(Locale::monday_start().validate().is_ok());

        let mut locale = Locale::default();
        locale.week_start = 7;
        assert!(locale.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let locale = Locale::monday_start();
        let json = serde_json::to_string(&locale).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let locale: Locale = serde_json::from_str(r#"{"week_start": 1}"#).unwrap();
        assert_eq!(locale.week_start, 1);
        assert_eq!(locale.short_day(0), "Sun");
    }
}
