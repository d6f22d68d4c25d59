//! Duty status resolution.

use chrono::NaiveDate;

use crate::models::{DutyStatus, OverrideSet, StaffMember};

/// Resolves the duty status of a staff member on a target date.
///
/// The checks run in strict precedence order:
///
/// 1. A manual override for `(staff.id, target_date)` wins outright, even
///    over an inactive flag or a missing pattern.
/// 2. An inactive member is `off`.
/// 3. A member with no valid pattern is `off`.
/// 4. A date before the anchor date is `off`.
/// 5. Otherwise the position in the repeating cycle decides: positions
///    `0..duty_days` are `duty`, the rest of the cycle is `off`.
///
/// The anchor date itself is position 0, so it is always the first day of a
/// duty block. The cycle is purely additive day-counting with no
/// month-boundary or leap-year awareness. There is no error path: every
/// degenerate input resolves to `off`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rota_engine::models::{DutyStatus, OverrideSet, RotaPattern, StaffMember};
/// use rota_engine::resolution::resolve_status;
///
/// let staff = StaffMember {
///     id: "stf_001".to_string(),
///     name: "Dr Ghulam Ali".to_string(),
///     designation: "Site Doctor".to_string(),
///     rota_pattern: RotaPattern::parse_lenient("15/13"),
///     anchor_date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     active: true,
///     avatar: None,
/// };
/// let overrides = OverrideSet::new();
///
/// // The anchor date is the first day of a duty block.
/// let anchor = staff.anchor_date;
/// assert_eq!(resolve_status(&staff, anchor, &overrides), DutyStatus::Duty);
///
/// // Day 15 is the first off day of the 15/13 cycle.
/// let first_off = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(resolve_status(&staff, first_off, &overrides), DutyStatus::Off);
/// ```
pub fn resolve_status(
    staff: &StaffMember,
    target_date: NaiveDate,
    overrides: &OverrideSet,
) -> DutyStatus {
    if let Some(status) = overrides.status_for(&staff.id, target_date) {
        return status;
    }

    if !staff.active {
        return DutyStatus::Off;
    }

    let Some(pattern) = staff.rota_pattern else {
        return DutyStatus::Off;
    };

    let days_diff = target_date.signed_duration_since(staff.anchor_date).num_days();
    if days_diff < 0 {
        return DutyStatus::Off;
    }

    // days_diff >= 0 and cycle_length >= 2, so the remainder is non-negative.
    let position_in_cycle = days_diff % i64::from(pattern.cycle_length());
    if position_in_cycle < i64::from(pattern.duty_days()) {
        DutyStatus::Duty
    } else {
        DutyStatus::Off
    }
}
