//! Travel date derivation.
//!
//! Site travel reporting needs the block-transition dates for each staff
//! member: the first day of a duty block is the return-to-site date, the last
//! day is the leaving-site date. Transitions are found by scanning the
//! visible range day by day and probing the neighbouring dates with the same
//! resolver, so blocks that start or end just outside the range are still
//! classified correctly.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{DateRange, DutyStatus, OverrideSet, RotaPattern, StaffMember};

use super::resolve_status;

/// The block-transition dates found within a range, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TravelDates {
    /// Dates on which a duty block begins (return-to-site).
    pub returns: Vec<NaiveDate>,
    /// Dates on which a duty block ends (leaving-site).
    pub leaves: Vec<NaiveDate>,
}

/// One row of the travel report: a staff member's identity plus their derived
/// travel dates for the reporting range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelRow {
    /// The staff member's id.
    pub staff_id: String,
    /// Display name.
    pub name: String,
    /// Role label, shown alongside the dates.
    pub designation: String,
    /// The member's duty cycle, if any (rendered as the "rota type" column).
    pub rota_pattern: Option<RotaPattern>,
    /// The derived travel dates.
    pub travel: TravelDates,
}

/// Derives the travel dates for one staff member over a date range.
///
/// For every date `d` in the range (ascending):
///
/// - `d` is a return-to-site date iff `d` resolves to `duty` and `d - 1` does
///   not.
/// - `d` is a leaving-site date iff `d` resolves to `duty` and `d + 1` does
///   not.
///
/// The neighbour probes may fall outside the range; they are resolved against
/// the same pattern and overrides with no range assumptions. A single-day
/// duty block yields the same date in both lists. A range with no duty days
/// yields two empty lists.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rota_engine::models::{DateRange, OverrideSet, RotaPattern, StaffMember};
/// use rota_engine::resolution::derive_travel_dates;
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
///
/// let february = DateRange::month(2026, 2).unwrap();
/// let travel = derive_travel_dates(&staff, february, &OverrideSet::new());
///
/// // The duty block at day 28 of the cycle runs 2026-02-13 through
/// // 2026-02-27, entirely inside February.
/// assert_eq!(travel.returns, vec![NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()]);
/// assert_eq!(travel.leaves, vec![NaiveDate::from_ymd_opt(2026, 2, 27).unwrap()]);
/// ```
pub fn derive_travel_dates(
    staff: &StaffMember,
    range: DateRange,
    overrides: &OverrideSet,
) -> TravelDates {
    let mut travel = TravelDates::default();

    for date in range.days() {
        let status = resolve_status(staff, date, overrides);
        if !status.is_duty() {
            continue;
        }

        // Probes clamp to off at the calendar limits, where no block can
        // continue.
        let prev_status = date
            .pred_opt()
            .map_or(DutyStatus::Off, |prev| resolve_status(staff, prev, overrides));
        let next_status = date
            .succ_opt()
            .map_or(DutyStatus::Off, |next| resolve_status(staff, next, overrides));

        if !prev_status.is_duty() {
            travel.returns.push(date);
        }
        if !next_status.is_duty() {
            travel.leaves.push(date);
        }
    }

    travel
}

/// Builds the travel report for a roster over a date range: one row per
/// active staff member, in roster order. Inactive members are excluded, as
/// they are from the rendered report.
pub fn derive_travel_report(
    staff_list: &[StaffMember],
    range: DateRange,
    overrides: &OverrideSet,
) -> Vec<TravelRow> {
    staff_list
        .iter()
        .filter(|staff| staff.active)
        .map(|staff| TravelRow {
            staff_id: staff.id.clone(),
            name: staff.name.clone(),
            designation: staff.designation.clone(),
            rota_pattern: staff.rota_pattern,
            travel: derive_travel_dates(staff, range, overrides),
        })
        .collect()
}
