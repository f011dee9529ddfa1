//! Error types for timegrid operations.

/// Errors produced by the few fallible operations in this crate.
///
/// Formatting and grid construction are total; only timezone parsing,
/// combined date-time resolution, and locale validation can fail.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimegridError {
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("invalid date-time: {0}")]
    InvalidDateTime(String),

    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}
