//! Error types for calendar conversions.

/// A boundary table failed one of its structural invariants.
///
/// These never arise from caller input: the built-in tables are constant and
/// checked by the test suite. Seeing one means the table data is corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// No table entry exceeds the offset being located.
    #[error("offset {offset} lies past the last boundary {last}")]
    Exhausted { offset: u32, last: u32 },

    /// The table has no entries.
    #[error("boundary table is empty")]
    Empty,

    /// An entry is not greater than the one before it.
    #[error("boundary table is not strictly increasing at index {index}")]
    NotIncreasing { index: usize },

    /// The table has the wrong number of entries.
    #[error("boundary table has {actual} entries, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The final cumulative total does not match the cycle length.
    #[error("boundary table ends at {actual}, expected {expected}")]
    TotalMismatch { expected: u32, actual: u32 },

    /// The month table does not cover the longest year.
    #[error("month table ends at {actual}, shorter than a {longest}-day year")]
    TooShort { longest: u32, actual: u32 },
}

/// Error type for all fallible conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The day number precedes the first day of year 1.
    #[error("day number {sdn} is before the calendar epoch {epoch}")]
    BeforeEpoch { sdn: i64, epoch: i64 },

    /// The day number follows the last day of the last supported year.
    #[error("day number {sdn} is after the last supported day {last}")]
    AfterSupportedRange { sdn: i64, last: i64 },

    /// Year outside `1..=max`.
    #[error("invalid year: {year} (must be 1-{max})")]
    InvalidYear { year: u32, max: u32 },

    /// Month outside `1..=max`.
    #[error("invalid month: {month} (must be 1-{max})")]
    InvalidMonth { month: u8, max: u8 },

    /// Day outside the length of its month.
    #[error("invalid day {day} for month {year}-{month:02} (max {max})")]
    InvalidDay {
        year: u32,
        month: u8,
        day: u8,
        max: u8,
    },

    /// Internal table corruption.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl CalendarError {
    /// True for input the calendar cannot represent, false for internal failures.
    pub const fn is_out_of_range(&self) -> bool {
        !matches!(self, Self::Table(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CalendarError::BeforeEpoch {
            sdn: 10,
            epoch: 1_948_440,
        };
        assert_eq!(
            err.to_string(),
            "day number 10 is before the calendar epoch 1948440"
        );

        let err = CalendarError::InvalidDay {
            year: 3,
            month: 13,
            day: 7,
            max: 6,
        };
        assert_eq!(err.to_string(), "invalid day 7 for month 3-13 (max 6)");

        let err = CalendarError::from(TableError::Exhausted {
            offset: 400,
            last: 355,
        });
        assert_eq!(err.to_string(), "offset 400 lies past the last boundary 355");
    }

    #[test]
    fn test_out_of_range_classification() {
        assert!(CalendarError::InvalidYear { year: 0, max: 14 }.is_out_of_range());
        assert!(
            CalendarError::AfterSupportedRange { sdn: 1, last: 0 }.is_out_of_range()
        );
        assert!(!CalendarError::Table(TableError::Empty).is_out_of_range());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
        assert_impl::<TableError>();
    }
}
