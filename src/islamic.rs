//! Tabular Islamic (Hijri) calendar.
//!
//! An arithmetic approximation of the lunar calendar: 30-year cycles of
//! 10631 days, 11 of which are 355-day leap years. Months alternate between
//! 30 and 29 days and the leap day lengthens the twelfth month.

use crate::consts::{
    ISLAMIC_CYCLE_DAYS, ISLAMIC_CYCLE_YEARS, ISLAMIC_EPOCH, ISLAMIC_MAX_YEAR, ISLAMIC_MONTH_ENDS,
    ISLAMIC_MONTH_NAMES, ISLAMIC_YEAR_ENDS,
};
use crate::locate::BoundaryTable;
use crate::tabular::TabularCalendar;

/// Leap years land where `(14 + 11 * year) mod 30 < 11`
const LEAP_SHIFT: u32 = 14;
const LEAP_STEP: u32 = 11;
const LEAP_THRESHOLD: u32 = 11;

/// The Tabular Islamic calendar with the civil epoch (SDN 1948440).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TabularIslamic;

impl TabularCalendar for TabularIslamic {
    const NAME: &'static str = "Tabular Islamic";
    const EPOCH: i64 = ISLAMIC_EPOCH;
    const CYCLE_YEARS: u32 = ISLAMIC_CYCLE_YEARS;
    const CYCLE_DAYS: u32 = ISLAMIC_CYCLE_DAYS;
    const MAX_YEAR: u32 = ISLAMIC_MAX_YEAR;
    const YEAR_ENDS: BoundaryTable = BoundaryTable::new(&ISLAMIC_YEAR_ENDS);
    const MONTH_ENDS: BoundaryTable = BoundaryTable::new(&ISLAMIC_MONTH_ENDS);
    const MONTH_NAMES: &'static [&'static str] = &ISLAMIC_MONTH_NAMES;

    fn is_leap_year(year: u32) -> bool {
        (LEAP_SHIFT + LEAP_STEP * (year % ISLAMIC_CYCLE_YEARS)) % ISLAMIC_CYCLE_YEARS
            < LEAP_THRESHOLD
    }
}
