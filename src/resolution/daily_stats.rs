//! Daily staffing statistics.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{OverrideSet, StaffMember};

use super::resolve_status;

/// On-duty headcounts for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    /// The date the counts apply to.
    pub date: NaiveDate,
    /// Total staff resolving to `duty` on this date.
    pub total_duty: usize,
    /// Of those, how many are doctors (designation contains "Doctor" or
    /// "Trauma").
    pub doctors_on_duty: usize,
    /// Of those, how many are nurses (designation is exactly "RN").
    pub nurses_on_duty: usize,
}

/// Counts the staff on duty on a given date.
///
/// Only `duty` counts; `leave` and `off` do not, so a leave override pulls a
/// member out of the day's headcount exactly as the resolver reports it.
pub fn calculate_daily_stats(
    staff_list: &[StaffMember],
    date: NaiveDate,
    overrides: &OverrideSet,
) -> DailyStats {
    let on_duty: Vec<&StaffMember> = staff_list
        .iter()
        .filter(|staff| resolve_status(staff, date, overrides).is_duty())
        .collect();

    DailyStats {
        date,
        total_duty: on_duty.len(),
        doctors_on_duty: on_duty.iter().filter(|s| s.is_doctor()).count(),
        nurses_on_duty: on_duty.iter().filter(|s| s.is_nurse()).count(),
    }
}
