//! Error types for the Rota Resolution Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that rota resolution itself is infallible by design (malformed input
//! degrades to `off`); these errors only occur at the boundaries where staff
//! records, patterns, and date ranges are constructed or mutated.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Rota Resolution Engine.
///
/// # Example
///
/// ```
/// use rota_engine::error::RotaError;
///
/// let error = RotaError::StaffNotFound {
///     id: "missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Staff member not found: missing");
/// ```
#[derive(Debug, Error)]
pub enum RotaError {
    /// A rota pattern string could not be parsed into positive day counts.
    #[error("Invalid rota pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern string that failed to parse.
        pattern: String,
        /// A description of what made the pattern invalid.
        message: String,
    },

    /// No staff member exists with the given id.
    #[error("Staff member not found: {id}")]
    StaffNotFound {
        /// The id that was not found.
        id: String,
    },

    /// A date range's end date precedes its start date.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A calendar month could not be constructed from the given components.
    #[error("Invalid calendar month: {year}-{month:02}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },
}

/// A type alias for Results that return RotaError.
pub type RotaResult<T> = Result<T, RotaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_displays_pattern_and_message() {
        let error = RotaError::InvalidPattern {
            pattern: "abc/13".to_string(),
            message: "duty days is not a number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rota pattern 'abc/13': duty days is not a number"
        );
    }

    #[test]
    fn test_staff_not_found_displays_id() {
        let error = RotaError::StaffNotFound {
            id: "stf_404".to_string(),
        };
        assert_eq!(error.to_string(), "Staff member not found: stf_404");
    }

    #[test]
    fn test_invalid_date_range_displays_bounds() {
        let error = RotaError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2026-03-01 is after 2026-02-01"
        );
    }

    #[test]
    fn test_invalid_month_displays_components() {
        let error = RotaError::InvalidMonth {
            year: 2026,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid calendar month: 2026-13");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RotaError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> RotaResult<()> {
            Err(RotaError::StaffNotFound {
                id: "x".to_string(),
            })
        }

        fn propagates_error() -> RotaResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
