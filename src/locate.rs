//! Cycle decomposition and boundary table lookups.

use crate::error::TableError;

/// Splits an epoch-relative day offset into `(cycle, day_in_cycle)`.
///
/// `day_in_cycle` is 0-based and always below `cycle_days`.
///
/// # Panics
/// Panics if `cycle_days` is zero.
#[inline]
pub const fn decompose_cycle(offset: u64, cycle_days: u32) -> (u64, u32) {
    let cycle_days = cycle_days as u64;
    // remainder is below cycle_days, which fits in u32
    #[allow(clippy::cast_possible_truncation)]
    let day_in_cycle = (offset % cycle_days) as u32;
    (offset / cycle_days, day_in_cycle)
}

/// Where an offset falls inside a boundary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-based entry number (year within cycle, or month within year)
    pub number: usize,
    /// 0-based offset from the start of that entry
    pub offset: u32,
}

/// Ascending cumulative day totals, one per year of a cycle or month of a year.
///
/// Entry `i` holds the offset of the first day *after* period `i + 1`, so an
/// offset belongs to the first period whose entry is strictly greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryTable {
    ends: &'static [u32],
}

impl BoundaryTable {
    pub const fn new(ends: &'static [u32]) -> Self {
        Self { ends }
    }

    /// Number of periods covered by the table
    #[inline]
    pub const fn len(&self) -> usize {
        self.ends.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Cumulative total through the final period
    pub fn total(&self) -> Option<u32> {
        self.ends.last().copied()
    }

    /// Finds the period containing `offset`.
    ///
    /// Uses a binary search for the first entry strictly greater than
    /// `offset`, which matches an ascending linear scan on a valid table.
    ///
    /// # Errors
    /// Returns `TableError::Exhausted` if no entry exceeds `offset`.
    pub fn locate(&self, offset: u32) -> Result<Position, TableError> {
        let index = self.ends.partition_point(|&end| end <= offset);
        let Some(&end) = self.ends.get(index) else {
            let last = self.total().unwrap_or(0);
            tracing::error!(offset, last, "boundary table scan exhausted");
            return Err(TableError::Exhausted { offset, last });
        };
        debug_assert!(offset < end);

        let number = index + 1;
        let base = self.base(number).unwrap_or(0);
        Ok(Position {
            number,
            offset: offset - base,
        })
    }

    /// Cumulative total before period `number` (1-based): 0 for the first
    /// period, the previous entry otherwise.
    pub fn base(&self, number: usize) -> Option<u32> {
        match number {
            0 => None,
            1 if !self.ends.is_empty() => Some(0),
            n if n <= self.ends.len() => Some(self.ends[n - 2]),
            _ => None,
        }
    }

    /// Length in days of period `number` (1-based)
    pub fn span(&self, number: usize) -> Option<u32> {
        let end = *self.ends.get(number.checked_sub(1)?)?;
        Some(end - self.base(number)?)
    }

    /// Verifies the table is non-empty and strictly increasing from a positive first entry.
    ///
    /// # Errors
    /// Returns the first structural violation found.
    pub fn check(&self) -> Result<(), TableError> {
        let Some(&first) = self.ends.first() else {
            return Err(TableError::Empty);
        };
        if first == 0 {
            return Err(TableError::NotIncreasing { index: 0 });
        }
        if let Some(index) = self.ends.windows(2).position(|w| w[1] <= w[0]) {
            return Err(TableError::NotIncreasing { index: index + 1 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static YEARS: [u32; 4] = [365, 730, 1096, 1461];
    static BROKEN: [u32; 3] = [30, 30, 90];

    #[test]
    fn test_decompose_cycle() {
        assert_eq!(decompose_cycle(0, 10_631), (0, 0));
        assert_eq!(decompose_cycle(10_630, 10_631), (0, 10_630));
        assert_eq!(decompose_cycle(10_631, 10_631), (1, 0));
        assert_eq!(decompose_cycle(3 * 1461 + 7, 1461), (3, 7));
    }

    #[test]
    fn test_locate_boundaries() {
        let table = BoundaryTable::new(&YEARS);
        assert_eq!(table.locate(0), Ok(Position { number: 1, offset: 0 }));
        assert_eq!(
            table.locate(364),
            Ok(Position {
                number: 1,
                offset: 364
            })
        );
        // an entry equal to the offset belongs to the next period
        assert_eq!(table.locate(365), Ok(Position { number: 2, offset: 0 }));
        assert_eq!(
            table.locate(1095),
            Ok(Position {
                number: 3,
                offset: 365
            })
        );
        assert_eq!(
            table.locate(1460),
            Ok(Position {
                number: 4,
                offset: 364
            })
        );
    }

    #[test]
    fn test_locate_matches_linear_scan() {
        let table = BoundaryTable::new(&YEARS);
        for offset in 0..1461 {
            let linear = YEARS.iter().position(|&end| offset < end).map(|i| i + 1);
            assert_eq!(
                table.locate(offset).map(|p| p.number).ok(),
                linear,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_locate_exhausted() {
        let table = BoundaryTable::new(&YEARS);
        assert_eq!(
            table.locate(1461),
            Err(TableError::Exhausted {
                offset: 1461,
                last: 1461
            })
        );
        let empty = BoundaryTable::new(&[]);
        assert_eq!(
            empty.locate(0),
            Err(TableError::Exhausted { offset: 0, last: 0 })
        );
    }

    #[test]
    fn test_base_and_span() {
        let table = BoundaryTable::new(&YEARS);
        assert_eq!(table.base(0), None);
        assert_eq!(table.base(1), Some(0));
        assert_eq!(table.base(3), Some(730));
        assert_eq!(table.base(5), None);
        assert_eq!(table.span(1), Some(365));
        assert_eq!(table.span(3), Some(366));
        assert_eq!(table.span(4), Some(365));
        assert_eq!(table.span(0), None);
        assert_eq!(table.span(5), None);
    }

    #[test]
    fn test_check() {
        assert_eq!(BoundaryTable::new(&YEARS).check(), Ok(()));
        assert_eq!(BoundaryTable::new(&[]).check(), Err(TableError::Empty));
        assert_eq!(
            BoundaryTable::new(&BROKEN).check(),
            Err(TableError::NotIncreasing { index: 1 })
        );
    }
}
