//! Manual override records and the keyed override index.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DutyStatus;

/// An explicit, date-specific status that supersedes the computed cycle
/// result for one staff member on one calendar date.
///
/// This is the persistence and wire shape; in-memory lookups go through
/// [`OverrideSet`], which guarantees at most one entry per `(staff_id, date)`
/// pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOverride {
    /// The staff member this override applies to.
    pub staff_id: String,
    /// The calendar date this override applies to.
    pub date: NaiveDate,
    /// The status to report for that date, superseding the cycle.
    pub status: DutyStatus,
}

/// An index of manual overrides keyed by `(staff_id, date)`.
///
/// Keying by the pair makes "exactly one override per staff member per date"
/// an invariant held by construction: both bulk construction and
/// [`upsert`](OverrideSet::upsert) replace rather than append, so duplicate
/// entries for one key cannot exist and lookup never depends on scan order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rota_engine::models::{DutyStatus, OverrideSet};
///
/// let mut overrides = OverrideSet::new();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
///
/// overrides.upsert("stf_001", date, DutyStatus::Leave);
/// overrides.upsert("stf_001", date, DutyStatus::Off);
///
/// assert_eq!(overrides.len(), 1);
/// assert_eq!(overrides.status_for("stf_001", date), Some(DutyStatus::Off));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    entries: HashMap<String, HashMap<NaiveDate, DutyStatus>>,
}

impl OverrideSet {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the override for `(staff_id, date)`.
    pub fn upsert(&mut self, staff_id: &str, date: NaiveDate, status: DutyStatus) {
        self.entries
            .entry(staff_id.to_string())
            .or_default()
            .insert(date, status);
    }

    /// Looks up the override status for `(staff_id, date)`, if any.
    ///
    /// Both sides of the comparison are [`NaiveDate`] values, so the match is
    /// at day granularity by construction; a timestamp can never leak into
    /// the key.
    pub fn status_for(&self, staff_id: &str, date: NaiveDate) -> Option<DutyStatus> {
        self.entries
            .get(staff_id)
            .and_then(|dates| dates.get(&date))
            .copied()
    }

    /// Removes every override referencing `staff_id`, returning how many
    /// were removed. Called when a staff member is deleted so no orphan
    /// overrides remain.
    pub fn remove_staff(&mut self, staff_id: &str) -> usize {
        self.entries
            .remove(staff_id)
            .map_or(0, |dates| dates.len())
    }

    /// The number of overrides in the set.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns true if the set contains no overrides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exports the set as a list of [`ManualOverride`] records, sorted by
    /// staff id then date for a stable persistence order.
    pub fn to_entries(&self) -> Vec<ManualOverride> {
        let mut entries: Vec<ManualOverride> = self
            .entries
            .iter()
            .flat_map(|(staff_id, dates)| {
                dates.iter().map(|(date, status)| ManualOverride {
                    staff_id: staff_id.clone(),
                    date: *date,
                    status: *status,
                })
            })
            .collect();
        entries.sort_by(|a, b| (&a.staff_id, a.date).cmp(&(&b.staff_id, b.date)));
        entries
    }
}

impl FromIterator<ManualOverride> for OverrideSet {
    /// Builds a set from override records. If the input carries duplicate
    /// `(staff_id, date)` entries (a legacy list built by appending), the
    /// last one wins and the duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = ManualOverride>>(iter: I) -> Self {
        let mut set = OverrideSet::new();
        for entry in iter {
            set.upsert(&entry.staff_id, entry.date, entry.status);
        }
        set
    }
}
