use serde::Serialize;

use crate::{RANGE_SEPARATOR, Sdn, prelude::*};

/// Inclusive range of serial day numbers a calendar can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{start}{RANGE_SEPARATOR}{end}")]
pub struct SdnRange {
    start: Sdn,
    end:   Sdn,
}

/// Error type for day-number range construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start is after end.
    #[error("Invalid day range: start ({start}) is after end ({end})")]
    InvalidRange { start: Sdn, end: Sdn },
}

impl SdnRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: Sdn, end: Sdn) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from bounds already known to be ordered
    pub(crate) const fn from_bounds(start: Sdn, end: Sdn) -> Self {
        debug_assert!(start.get() <= end.get());
        Self { start, end }
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> Sdn {
        self.start
    }

    /// Returns the last day of the range (inclusive)
    pub const fn end(&self) -> Sdn {
        self.end
    }

    /// Checks if the range contains a given day
    pub fn contains(&self, sdn: Sdn) -> bool {
        self.start <= sdn && sdn <= self.end
    }

    /// Number of days in the range
    pub const fn days(&self) -> u64 {
        self.end.get().abs_diff(self.start.get()) + 1
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
