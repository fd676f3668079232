//! The table-driven conversion shared by every tabular calendar.

use crate::consts::{MIN_DAY, MIN_YEAR};
use crate::error::{CalendarError, TableError};
use crate::locate::{BoundaryTable, decompose_cycle};
use crate::range::SdnRange;
use crate::types::{CalendarDate, Sdn};

/// A calendar whose leap years repeat in a fixed cycle.
///
/// Implementors only provide constants; every conversion is a default
/// method driven by the two boundary tables.
pub trait TabularCalendar {
    /// Human readable calendar name
    const NAME: &'static str;
    /// SDN of the first day of year 1
    const EPOCH: i64;
    /// Years in one cycle
    const CYCLE_YEARS: u32;
    /// Days in one cycle
    const CYCLE_DAYS: u32;
    /// Last supported year (inclusive)
    const MAX_YEAR: u32;
    /// Cumulative day totals at the end of each year of a cycle
    const YEAR_ENDS: BoundaryTable;
    /// Cumulative day totals at the end of each month; the last entry is the
    /// length of the longest year
    const MONTH_ENDS: BoundaryTable;
    /// Display names indexed by month number, index 0 is the empty string
    const MONTH_NAMES: &'static [&'static str];

    /// Arithmetic leap rule, must agree with `YEAR_ENDS`.
    fn is_leap_year(year: u32) -> bool;

    /// Number of months in every year
    #[allow(clippy::cast_possible_truncation)]
    fn months_in_year() -> u8 {
        Self::MONTH_ENDS.len() as u8
    }

    /// Converts a day number to a date.
    ///
    /// # Errors
    /// `BeforeEpoch` and `AfterSupportedRange` for unrepresentable days,
    /// `Table` if a boundary table is corrupt.
    fn sdn_to_date(sdn: Sdn) -> Result<CalendarDate, CalendarError> {
        let sdn = sdn.get();
        if sdn < Self::EPOCH {
            tracing::trace!(calendar = Self::NAME, sdn, "day number before epoch");
            return Err(CalendarError::BeforeEpoch {
                sdn,
                epoch: Self::EPOCH,
            });
        }
        let last = last_sdn::<Self>()?;
        if sdn > last {
            tracing::trace!(
                calendar = Self::NAME,
                sdn,
                last,
                "day number after last supported day"
            );
            return Err(CalendarError::AfterSupportedRange { sdn, last });
        }

        let offset = sdn.abs_diff(Self::EPOCH);
        let (cycle, day_in_cycle) = decompose_cycle(offset, Self::CYCLE_DAYS);
        let year_pos = Self::YEAR_ENDS.locate(day_in_cycle)?;
        let month_pos = Self::MONTH_ENDS.locate(year_pos.offset)?;

        // bounded by MAX_YEAR through the range check above
        let year = cycle * u64::from(Self::CYCLE_YEARS) + year_pos.number as u64;
        let year = u32::try_from(year)
            .map_err(|_| CalendarError::AfterSupportedRange { sdn, last })?;
        #[allow(clippy::cast_possible_truncation)]
        let (month, day) = (month_pos.number as u8, month_pos.offset as u8 + MIN_DAY);

        Ok(CalendarDate::from_parts(year, month, day))
    }

    /// Converts a date to its day number.
    ///
    /// # Errors
    /// `InvalidYear`, `InvalidMonth` or `InvalidDay` for components outside
    /// the calendar, `Table` if a boundary table is corrupt.
    fn date_to_sdn(year: u32, month: u8, day: u8) -> Result<Sdn, CalendarError> {
        let max = Self::days_in_month(year, month)?;
        if !(MIN_DAY..=max).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max,
            });
        }

        let year_start = days_before_year::<Self>(year)?;
        let month_base = Self::MONTH_ENDS
            .base(usize::from(month))
            .ok_or(CalendarError::InvalidMonth {
                month,
                max: Self::months_in_year(),
            })?;
        let offset = year_start + i64::from(month_base) + i64::from(day - MIN_DAY);
        Ok(Sdn::new(Self::EPOCH + offset))
    }

    /// Builds a validated date.
    ///
    /// # Errors
    /// Same as [`TabularCalendar::date_to_sdn`].
    fn date(year: u32, month: u8, day: u8) -> Result<CalendarDate, CalendarError> {
        Self::date_to_sdn(year, month, day)?;
        Ok(CalendarDate::from_parts(year, month, day))
    }

    /// Number of days in `year`.
    ///
    /// # Errors
    /// `InvalidYear` outside `1..=MAX_YEAR`.
    fn days_in_year(year: u32) -> Result<u32, CalendarError> {
        check_year::<Self>(year)?;
        Self::YEAR_ENDS
            .span(year_in_cycle::<Self>(year))
            .ok_or(CalendarError::Table(TableError::LengthMismatch {
                expected: Self::CYCLE_YEARS as usize,
                actual: Self::YEAR_ENDS.len(),
            }))
    }

    /// Number of days in `month` of `year`. The final month is cut short in
    /// years shorter than the month table.
    ///
    /// # Errors
    /// `InvalidYear` or `InvalidMonth` for components outside the calendar.
    fn days_in_month(year: u32, month: u8) -> Result<u8, CalendarError> {
        let year_len = Self::days_in_year(year)?;
        let invalid_month = CalendarError::InvalidMonth {
            month,
            max: Self::months_in_year(),
        };
        let number = usize::from(month);
        let span = Self::MONTH_ENDS.span(number).ok_or(invalid_month)?;
        let base = Self::MONTH_ENDS.base(number).ok_or(invalid_month)?;
        let len = span.min(year_len.saturating_sub(base));
        #[allow(clippy::cast_possible_truncation)]
        Ok(len as u8)
    }

    /// Display name for a month number; `Some("")` for 0, `None` outside the table.
    fn month_name(index: usize) -> Option<&'static str> {
        Self::MONTH_NAMES.get(index).copied()
    }

    /// Day numbers from the first day of year 1 to the last day of `MAX_YEAR`.
    ///
    /// # Errors
    /// `TableError` if the year table does not match the cycle length.
    fn supported_range() -> Result<SdnRange, TableError> {
        let last = last_sdn::<Self>()?;
        Ok(SdnRange::from_bounds(Sdn::new(Self::EPOCH), Sdn::new(last)))
    }

    /// Verifies the structural invariants of both boundary tables.
    ///
    /// # Errors
    /// Returns the first violation found.
    fn check_tables() -> Result<(), TableError> {
        let result = verify_tables::<Self>();
        if let Err(err) = &result {
            tracing::error!(calendar = Self::NAME, %err, "boundary table check failed");
        }
        result
    }
}

fn verify_tables<C: TabularCalendar + ?Sized>() -> Result<(), TableError> {
    C::YEAR_ENDS.check()?;
    C::MONTH_ENDS.check()?;

    let expected = C::CYCLE_YEARS as usize;
    if C::YEAR_ENDS.len() != expected {
        return Err(TableError::LengthMismatch {
            expected,
            actual: C::YEAR_ENDS.len(),
        });
    }
    let total = C::YEAR_ENDS.total().unwrap_or(0);
    if total != C::CYCLE_DAYS {
        return Err(TableError::TotalMismatch {
            expected: C::CYCLE_DAYS,
            actual: total,
        });
    }

    let longest = (1..=C::YEAR_ENDS.len())
        .filter_map(|n| C::YEAR_ENDS.span(n))
        .max()
        .unwrap_or(0);
    let months_total = C::MONTH_ENDS.total().unwrap_or(0);
    if months_total < longest {
        return Err(TableError::TooShort {
            longest,
            actual: months_total,
        });
    }
    Ok(())
}

fn check_year<C: TabularCalendar + ?Sized>(year: u32) -> Result<(), CalendarError> {
    if !(MIN_YEAR..=C::MAX_YEAR).contains(&year) {
        return Err(CalendarError::InvalidYear {
            year,
            max: C::MAX_YEAR,
        });
    }
    Ok(())
}

/// 1-based position of `year` within its cycle
fn year_in_cycle<C: TabularCalendar + ?Sized>(year: u32) -> usize {
    ((year - MIN_YEAR) % C::CYCLE_YEARS) as usize + 1
}

/// Days from the epoch to the first day of `year`, for `year >= 1`
fn days_before_year<C: TabularCalendar + ?Sized>(year: u32) -> Result<i64, TableError> {
    let cycles = i64::from((year - MIN_YEAR) / C::CYCLE_YEARS);
    let base = C::YEAR_ENDS
        .base(year_in_cycle::<C>(year))
        .ok_or(TableError::LengthMismatch {
            expected: C::CYCLE_YEARS as usize,
            actual: C::YEAR_ENDS.len(),
        })?;
    Ok(cycles * i64::from(C::CYCLE_DAYS) + i64::from(base))
}

/// SDN of the last day of `MAX_YEAR`
fn last_sdn<C: TabularCalendar + ?Sized>() -> Result<i64, TableError> {
    let days = days_before_year::<C>(C::MAX_YEAR + 1)?;
    Ok(C::EPOCH + days - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHORT_YEARS: [u32; 2] = [5, 9];
    static FULL_YEARS: [u32; 2] = [5, 10];
    static WIDE_MONTHS: [u32; 1] = [5];
    static NARROW_MONTHS: [u32; 2] = [2, 4];

    /// Year table totals 9 days for a 10-day cycle.
    struct ShortCycle;

    impl TabularCalendar for ShortCycle {
        const NAME: &'static str = "short cycle";
        const EPOCH: i64 = 0;
        const CYCLE_YEARS: u32 = 2;
        const CYCLE_DAYS: u32 = 10;
        const MAX_YEAR: u32 = 4;
        const YEAR_ENDS: BoundaryTable = BoundaryTable::new(&SHORT_YEARS);
        const MONTH_ENDS: BoundaryTable = BoundaryTable::new(&WIDE_MONTHS);
        const MONTH_NAMES: &'static [&'static str] = &["", "Only"];

        fn is_leap_year(_year: u32) -> bool {
            false
        }
    }

    /// Month table ends before the year does.
    struct ShortMonths;

    impl TabularCalendar for ShortMonths {
        const NAME: &'static str = "short months";
        const EPOCH: i64 = 0;
        const CYCLE_YEARS: u32 = 2;
        const CYCLE_DAYS: u32 = 10;
        const MAX_YEAR: u32 = 4;
        const YEAR_ENDS: BoundaryTable = BoundaryTable::new(&FULL_YEARS);
        const MONTH_ENDS: BoundaryTable = BoundaryTable::new(&NARROW_MONTHS);
        const MONTH_NAMES: &'static [&'static str] = &["", "First", "Second"];

        fn is_leap_year(_year: u32) -> bool {
            false
        }
    }

    #[test]
    fn test_exhausted_year_table_is_fatal() {
        assert_eq!(
            ShortCycle::sdn_to_date(Sdn::new(9)),
            Err(CalendarError::Table(TableError::Exhausted {
                offset: 9,
                last: 9
            }))
        );
        let err = ShortCycle::sdn_to_date(Sdn::new(9)).unwrap_err();
        assert!(!err.is_out_of_range());
        // before the gap the table still answers
        assert_eq!(
            ShortCycle::sdn_to_date(Sdn::new(8)).map(CalendarDate::to_triple),
            Ok((2, 1, 4))
        );
        assert_eq!(
            ShortCycle::check_tables(),
            Err(TableError::TotalMismatch {
                expected: 10,
                actual: 9
            })
        );
    }

    #[test]
    fn test_exhausted_month_table_is_fatal() {
        assert_eq!(
            ShortMonths::sdn_to_date(Sdn::new(4)),
            Err(CalendarError::Table(TableError::Exhausted {
                offset: 4,
                last: 4
            }))
        );
        assert_eq!(
            ShortMonths::check_tables(),
            Err(TableError::TooShort {
                longest: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn test_range_errors_stay_recoverable() {
        let err = ShortMonths::sdn_to_date(Sdn::new(-1)).unwrap_err();
        assert!(err.is_out_of_range());
        let err = ShortMonths::sdn_to_date(Sdn::new(20)).unwrap_err();
        assert_eq!(err, CalendarError::AfterSupportedRange { sdn: 20, last: 19 });
    }

    #[test]
    fn test_date_round_trip_on_valid_days() {
        assert_eq!(ShortMonths::date_to_sdn(3, 2, 2), Ok(Sdn::new(13)));
        assert_eq!(
            ShortMonths::sdn_to_date(Sdn::new(13)).map(CalendarDate::to_triple),
            Ok((3, 2, 2))
        );
        assert_eq!(ShortMonths::date(3, 2, 2).map(CalendarDate::to_triple), Ok((3, 2, 2)));
    }
}
