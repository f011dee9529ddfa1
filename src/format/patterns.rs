//! strftime pattern families for range and tick labels.
//!
//! Label rendering always picks one of four patterns depending on whether
//! the year and the hour-of-day carry information for the reader. Keeping
//! each family in a table keyed on that boolean pair keeps the four-way
//! choice exhaustive.

/// One pattern family: full plus the three reduced variants.
pub(crate) struct PatternTable {
    pub full: &'static str,
    pub no_year: &'static str,
    pub no_hour: &'static str,
    pub no_year_no_hour: &'static str,
}

impl PatternTable {
    pub(crate) const fn select(&self, omit_year: bool, omit_hour: bool) -> &'static str {
        match (omit_year, omit_hour) {
            (false, false) => self.full,
            (true, false) => self.no_year,
            (false, true) => self.no_hour,
            (true, true) => self.no_year_no_hour,
        }
    }
}

/// Long, human-readable labels for range endpoints ("Feb 3, 2024 9:30 am").
pub(crate) const LONG: PatternTable = PatternTable {
    full: "%b %-d, %Y %-I:%M %P",
    no_year: "%b %-d %-I:%M %P",
    no_hour: "%b %-d, %Y",
    no_year_no_hour: "%b %-d",
};

/// Compact numeric labels for chart-axis ticks ("02/03 09:30").
pub(crate) const TICK: PatternTable = PatternTable {
    full: "%m/%d/%Y %H:%M",
    no_year: "%m/%d %H:%M",
    no_hour: "%m/%d/%Y",
    no_year_no_hour: "%m/%d",
};
