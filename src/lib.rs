//! Conversions between Serial Day Numbers and tabular calendar dates.
//!
//! A Serial Day Number ([`Sdn`]) counts days from a universal epoch and is
//! shared by every calendar. Each [`TabularCalendar`] maps it to a
//! `(year, month, day)` triple by splitting the epoch offset into whole
//! cycles, then locating the year and month in constant boundary tables.
//!
//! Days a calendar cannot represent are reported as out-of-range errors.
//! Corrupt tables are reported separately through [`TableError`] and are
//! never folded into the out-of-range outcome.

mod consts;
mod error;
mod french;
mod islamic;
mod locate;
mod prelude;
mod range;
mod tabular;
mod types;

pub use consts::*;
pub use error::{CalendarError, TableError};
pub use french::FrenchRepublican;
pub use islamic::TabularIslamic;
pub use locate::{BoundaryTable, Position, decompose_cycle};
pub use range::{RangeError, SdnRange};
pub use tabular::TabularCalendar;
pub use types::{CalendarDate, Sdn};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Runtime selector over the supported calendars.
///
/// Hosts that receive the calendar as a value (an extension function
/// argument, a config entry) dispatch through this enum; Rust callers with
/// a fixed calendar can use the [`TabularCalendar`] types directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    #[display(fmt = "{}", "TabularIslamic::NAME")]
    TabularIslamic,
    #[display(fmt = "{}", "FrenchRepublican::NAME")]
    FrenchRepublican,
}

macro_rules! dispatch {
    ($calendar:expr, $method:ident ( $($arg:expr),* )) => {
        match $calendar {
            Calendar::TabularIslamic => TabularIslamic::$method($($arg),*),
            Calendar::FrenchRepublican => FrenchRepublican::$method($($arg),*),
        }
    };
}

impl Calendar {
    /// Every supported calendar
    pub const ALL: [Self; 2] = [Self::TabularIslamic, Self::FrenchRepublican];

    /// SDN of the first day of year 1
    pub const fn epoch(self) -> Sdn {
        match self {
            Self::TabularIslamic => Sdn::new(TabularIslamic::EPOCH),
            Self::FrenchRepublican => Sdn::new(FrenchRepublican::EPOCH),
        }
    }

    /// Last supported year (inclusive)
    pub const fn max_year(self) -> u32 {
        match self {
            Self::TabularIslamic => TabularIslamic::MAX_YEAR,
            Self::FrenchRepublican => FrenchRepublican::MAX_YEAR,
        }
    }

    pub fn months_in_year(self) -> u8 {
        dispatch!(self, months_in_year())
    }

    /// See [`TabularCalendar::sdn_to_date`].
    ///
    /// # Errors
    /// Out-of-range day numbers or corrupt tables.
    pub fn sdn_to_date(self, sdn: Sdn) -> Result<CalendarDate, CalendarError> {
        dispatch!(self, sdn_to_date(sdn))
    }

    /// See [`TabularCalendar::date_to_sdn`].
    ///
    /// # Errors
    /// Invalid date components or corrupt tables.
    pub fn date_to_sdn(self, year: u32, month: u8, day: u8) -> Result<Sdn, CalendarError> {
        dispatch!(self, date_to_sdn(year, month, day))
    }

    /// See [`TabularCalendar::days_in_month`].
    ///
    /// # Errors
    /// Invalid year or month.
    pub fn days_in_month(self, year: u32, month: u8) -> Result<u8, CalendarError> {
        dispatch!(self, days_in_month(year, month))
    }

    /// See [`TabularCalendar::days_in_year`].
    ///
    /// # Errors
    /// Invalid year.
    pub fn days_in_year(self, year: u32) -> Result<u32, CalendarError> {
        dispatch!(self, days_in_year(year))
    }

    pub fn is_leap_year(self, year: u32) -> bool {
        dispatch!(self, is_leap_year(year))
    }

    /// Month display name; `Some("")` for 0, `None` past the end of the table
    pub fn month_name(self, index: usize) -> Option<&'static str> {
        dispatch!(self, month_name(index))
    }

    /// See [`TabularCalendar::supported_range`].
    ///
    /// # Errors
    /// Corrupt year table.
    pub fn supported_range(self) -> Result<SdnRange, TableError> {
        dispatch!(self, supported_range())
    }

    /// Integer form of [`Calendar::sdn_to_date`] for host bindings.
    ///
    /// Days the calendar cannot represent give [`INVALID_TRIPLE`].
    ///
    /// # Errors
    /// Only for corrupt tables, which must not be reported as a date.
    pub fn sdn_to_triple(self, sdn: i64) -> Result<(u32, u8, u8), TableError> {
        match self.sdn_to_date(Sdn::new(sdn)) {
            Ok(date) => Ok(date.to_triple()),
            Err(CalendarError::Table(err)) => Err(err),
            Err(_) => Ok(INVALID_TRIPLE),
        }
    }

    /// Integer form of [`Calendar::date_to_sdn`] for host bindings.
    ///
    /// Components that do not fit the calendar, including values too wide
    /// for its types, give [`INVALID_SDN`].
    ///
    /// # Errors
    /// Only for corrupt tables.
    pub fn date_to_sdn_or_zero(self, year: i64, month: i64, day: i64) -> Result<i64, TableError> {
        let (Ok(year), Ok(month), Ok(day)) =
            (u32::try_from(year), u8::try_from(month), u8::try_from(day))
        else {
            return Ok(INVALID_SDN);
        };
        match self.date_to_sdn(year, month, day) {
            Ok(sdn) => Ok(sdn.get()),
            Err(CalendarError::Table(err)) => Err(err),
            Err(_) => Ok(INVALID_SDN),
        }
    }

    /// Month name for a host-supplied index; empty for indices outside the table
    pub fn month_name_or_empty(self, index: i64) -> &'static str {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.month_name(index))
            .unwrap_or("")
    }

    /// See [`TabularCalendar::check_tables`].
    ///
    /// # Errors
    /// The first table violation found.
    pub fn check_tables(self) -> Result<(), TableError> {
        dispatch!(self, check_tables())
    }
}
