//! Compact label formatting for chart-axis ticks.
//!
//! An external continuous time scale hands over its tick instants; the
//! density heuristic here picks the shortest numeric pattern that still
//! distinguishes the ticks, and returns a formatter bound to it.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

use super::patterns;
use crate::moment;

/// Formats tick instants with a pattern chosen once per tick set.
#[derive(Debug, Clone, Copy)]
pub struct TickFormatter {
    pattern: &'static str,
    tz: Tz,
}

impl TickFormatter {
    /// Render one tick instant with the selected pattern.
    #[must_use]
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        moment::to_local_moment(instant, self.tz).format(self.pattern).to_string()
    }
}

/// Choose a tick pattern from the ticks an axis produced.
///
/// With fewer than two ticks the full numeric pattern is kept. Otherwise
/// the first tick is the reference: the year is dropped when every other
/// tick shares its calendar year, the hour when every other tick shares
/// its exact hour and minute (daily or coarser tick spacing). Tick order
/// and uniqueness are not validated; this is a presentation heuristic.
#[must_use]
pub fn scale_ticks_format(tz: Tz, ticks: &[DateTime<Utc>]) -> TickFormatter {
    if ticks.len() < 2 {
        return TickFormatter {
            pattern: patterns::TICK.select(false, false),
            tz,
        };
    }

    let reference = moment::to_local_moment(ticks[0], tz);
    let mut omit_year = true;
    let mut omit_hour = true;
    for tick in &ticks[1..] {
        let local = moment::to_local_moment(*tick, tz);
        omit_year = omit_year && local.year() == reference.year();
        omit_hour = omit_hour && local.hour() == reference.hour() && local.minute() == reference.minute();
        if !omit_year && !omit_hour {
            break;
        }
    }

    TickFormatter {
        pattern: patterns::TICK.select(omit_year, omit_hour),
        tz,
    }
}
