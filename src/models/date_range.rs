//! Inclusive calendar date ranges.

use chrono::{Days, Months, NaiveDate};

use crate::error::{RotaError, RotaResult};

/// An inclusive range of calendar dates, iterated in ascending order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rota_engine::models::DateRange;
///
/// let range = DateRange::month(2026, 2).unwrap();
/// assert_eq!(range.start(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// assert_eq!(range.end(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// assert_eq!(range.num_days(), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range spanning `start` through `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::InvalidDateRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> RotaResult<Self> {
        if start > end {
            return Err(RotaError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a whole calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::InvalidMonth`] if `month` is not 1-12 or the
    /// year/month pair is out of the supported calendar range.
    pub fn month(year: i32, month: u32) -> RotaResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(RotaError::InvalidMonth { year, month })?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.checked_sub_days(Days::new(1)))
            .ok_or(RotaError::InvalidMonth { year, month })?;
        Ok(Self { start, end })
    }

    /// The first date in the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last date in the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The number of dates in the range (at least 1).
    pub fn num_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }

    /// Iterates every date in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(make_date("2026-02-13"), make_date("2026-02-13")).unwrap();
        assert_eq!(range.num_days(), 1);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![make_date("2026-02-13")]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = DateRange::new(make_date("2026-03-01"), make_date("2026-02-01"));
        assert!(result.is_err());
    }

    #[test]
    fn test_days_are_ascending_and_inclusive() {
        let range = DateRange::new(make_date("2026-01-30"), make_date("2026-02-02")).unwrap();
        let days: Vec<NaiveDate> = range.days().collect();
        assert_eq!(
            days,
            vec![
                make_date("2026-01-30"),
                make_date("2026-01-31"),
                make_date("2026-02-01"),
                make_date("2026-02-02"),
            ]
        );
    }

    #[test]
    fn test_month_range_february() {
        let range = DateRange::month(2026, 2).unwrap();
        assert_eq!(range.start(), make_date("2026-02-01"));
        assert_eq!(range.end(), make_date("2026-02-28"));
        assert_eq!(range.num_days(), 28);
    }

    #[test]
    fn test_month_range_leap_february() {
        let range = DateRange::month(2028, 2).unwrap();
        assert_eq!(range.end(), make_date("2028-02-29"));
        assert_eq!(range.num_days(), 29);
    }

    #[test]
    fn test_month_range_december() {
        let range = DateRange::month(2026, 12).unwrap();
        assert_eq!(range.start(), make_date("2026-12-01"));
        assert_eq!(range.end(), make_date("2026-12-31"));
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(DateRange::month(2026, 0).is_err());
        assert!(DateRange::month(2026, 13).is_err());
    }
}
