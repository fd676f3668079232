//! French Republican calendar, years I to XIV.
//!
//! Twelve months of 30 days followed by 5 extra days (6 in leap years),
//! reported as month 13. Leap years are 3, 7 and 11.

use crate::consts::{
    FRENCH_CYCLE_DAYS, FRENCH_CYCLE_YEARS, FRENCH_EPOCH, FRENCH_MAX_YEAR, FRENCH_MONTH_ENDS,
    FRENCH_MONTH_NAMES, FRENCH_YEAR_ENDS,
};
use crate::locate::BoundaryTable;
use crate::tabular::TabularCalendar;

/// Position of the leap year within each 4-year cycle
const LEAP_POSITION: u32 = 3;

/// The French Republican calendar from 22 September 1792 (SDN 2375840).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrenchRepublican;

impl TabularCalendar for FrenchRepublican {
    const NAME: &'static str = "French Republican";
    const EPOCH: i64 = FRENCH_EPOCH;
    const CYCLE_YEARS: u32 = FRENCH_CYCLE_YEARS;
    const CYCLE_DAYS: u32 = FRENCH_CYCLE_DAYS;
    const MAX_YEAR: u32 = FRENCH_MAX_YEAR;
    const YEAR_ENDS: BoundaryTable = BoundaryTable::new(&FRENCH_YEAR_ENDS);
    const MONTH_ENDS: BoundaryTable = BoundaryTable::new(&FRENCH_MONTH_ENDS);
    const MONTH_NAMES: &'static [&'static str] = &FRENCH_MONTH_NAMES;

    fn is_leap_year(year: u32) -> bool {
        year % FRENCH_CYCLE_YEARS == LEAP_POSITION
    }
}
