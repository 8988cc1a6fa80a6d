//! Position within a sorted list of years.

use crate::error::PlaybackError;

/// Sorted distinct years with a current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCursor {
    years: Vec<i32>,
    index: usize,
}

impl YearCursor {
    /// Creates a cursor at the first year. Input is sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::EmptyYears`] if `years` is empty.
    pub fn new(mut years: Vec<i32>) -> Result<Self, PlaybackError> {
        years.sort_unstable();
        years.dedup();
        if years.is_empty() {
            return Err(PlaybackError::EmptyYears);
        }
        Ok(Self { years, index: 0 })
    }

    /// Returns the current year.
    pub fn current(&self) -> i32 {
        self.years[self.index]
    }

    /// Returns the years in ascending order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Moves to the next year, wrapping to the first after the last.
    pub fn advance(&mut self) -> i32 {
        self.advance_by(1)
    }

    /// Moves `steps` years forward with wrap-around.
    pub fn advance_by(&mut self, steps: u32) -> i32 {
        let n = self.years.len();
        self.index = (self.index + steps as usize % n) % n;
        self.current()
    }

    /// Jumps to `year`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::UnknownYear`] if `year` is not in the cursor.
    pub fn seek(&mut self, year: i32) -> Result<(), PlaybackError> {
        let index = self
            .years
            .binary_search(&year)
            .map_err(|_| PlaybackError::UnknownYear { year })?;
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_dedups() {
        let c = YearCursor::new(vec![2016, 2014, 2015, 2014]).unwrap();
        assert_eq!(c.years(), &[2014, 2015, 2016]);
        assert_eq!(c.current(), 2014);
    }

    #[test]
    fn empty_is_error() {
        assert_eq!(YearCursor::new(vec![]).unwrap_err(), PlaybackError::EmptyYears);
    }

    #[test]
    fn advance_wraps() {
        let mut c = YearCursor::new(vec![2022, 2023, 2024]).unwrap();
        assert_eq!(c.advance(), 2023);
        assert_eq!(c.advance(), 2024);
        assert_eq!(c.advance(), 2022);
        assert_eq!(c.advance_by(7), 2023);
    }

    #[test]
    fn seek() {
        let mut c = YearCursor::new((1970..=2024).collect()).unwrap();
        c.seek(2000).unwrap();
        assert_eq!(c.current(), 2000);
        assert_eq!(
            c.seek(1969).unwrap_err(),
            PlaybackError::UnknownYear { year: 1969 }
        );
        assert_eq!(c.current(), 2000);
    }
}
