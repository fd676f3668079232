use crate::consts::INVALID_TRIPLE;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Serial Day Number: days since the shared epoch (the Julian Day Number).
///
/// Carries no bounds of its own; each calendar decides which values it supports.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Sdn(i64);

impl Sdn {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the day number as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// A `(year, month, day)` date in some tabular calendar.
///
/// Values are only produced by a calendar's conversions, so the components
/// are always valid for the calendar that created them. Ordering is
/// chronological: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    year: u32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub(crate) const fn from_parts(year: u32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year (1-based)
    #[inline]
    pub const fn year(self) -> u32 {
        self.year
    }

    /// Returns the month (1-based)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month (1-based)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Converts to a plain `(year, month, day)` tuple
    pub const fn to_triple(self) -> (u32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Like `to_triple`, but maps `None` to the `(0, 0, 0)` sentinel
    pub const fn triple_or_sentinel(date: Option<Self>) -> (u32, u8, u8) {
        match date {
            Some(date) => date.to_triple(),
            None => INVALID_TRIPLE,
        }
    }
}

impl From<CalendarDate> for (u32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_triple()
    }
}
