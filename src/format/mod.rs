//! Label formatting for ranges, chart ticks, and single moments.
//!
//! All three families render through the strftime pattern tables in
//! [`patterns`]; a label's shape is always selected by the same
//! `(omit_year, omit_hour)` pair.

pub(crate) mod patterns;

/// Single-moment formatters and null-safe date equality
pub mod point;

/// Three-way time-range classification and labels
pub mod range;

/// Tick-density heuristic for chart-axis labels
pub mod ticks;
