//! Timegrid - timezone-aware date formatting and calendar-grid helpers
//!
//! This library is the date/time presentation layer for dashboard UIs:
//! human-readable labels for time ranges, compact chart-axis tick formats,
//! month-view week grids with a configurable week start, and normalization
//! helpers for ISO date/time strings typed by a user. Everything is
//! computed in a caller-supplied IANA timezone; the system-local zone is
//! never consulted.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`calendar`] - Month grids partitioned into week rows
//! * [`config`] - Application configuration management
//! * [`format`] - Range, tick, and single-moment label formatting
//! * [`iso`] - ISO date/time string normalization and validation
//! * [`locale`] - Caller-supplied day/month names and week start
//! * [`moment`] - Instant localization and calendar-aware shifts

/// Month-grid construction and week padding
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Error types for the few fallible operations
pub mod error;

/// Label formatting for ranges, chart ticks, and single moments
pub mod format;

/// ISO `YYYY-MM-DD` / `HH:MM` normalization, validation, and combination
pub mod iso;

/// Locale table: short day/month names plus the week-start index
pub mod locale;

/// Moment adapter: localize instants, shift days and months in a timezone
pub mod moment;

// Re-export the types most call sites need
pub use error::TimegridError;
pub use format::range::TimeRange;
pub use locale::Locale;
