//! The roster store: the owning collection of staff and overrides.
//!
//! The resolution functions are pure and only ever borrow a consistent
//! snapshot of these collections; all mutation goes through [`Roster`], which
//! enforces the structural invariants (unique immutable staff ids, at most
//! one override per staff member per date, no orphan overrides after a staff
//! deletion).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{RotaError, RotaResult};
use crate::models::{DutyStatus, ManualOverride, OverrideSet, RotaPattern, StaffMember};

/// The fields supplied when adding a staff member; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStaffMember {
    /// Display name.
    pub name: String,
    /// Free-form role label.
    pub designation: String,
    /// The rota pattern string (e.g. "15/13"). Parsed leniently: malformed
    /// input yields a member with no pattern, who resolves to off.
    pub rota_pattern: String,
    /// Day 0 of the duty cycle.
    pub anchor_date: NaiveDate,
    /// Whether the member is currently rostered.
    pub active: bool,
    /// Optional avatar reference.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// The serialized form of a whole roster, for single-blob persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// All staff records.
    pub staff: Vec<StaffMember>,
    /// All override records, sorted by staff id then date.
    pub overrides: Vec<ManualOverride>,
}

/// Owns the staff list and override set and enforces their invariants.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    staff: Vec<StaffMember>,
    overrides: OverrideSet,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a staff member, assigning a fresh unique id, and returns a
    /// reference to the stored record.
    pub fn add_staff(&mut self, new_staff: NewStaffMember) -> &StaffMember {
        let pattern = RotaPattern::parse_lenient(&new_staff.rota_pattern);
        if pattern.is_none() {
            warn!(
                name = %new_staff.name,
                pattern = %new_staff.rota_pattern,
                "Unusable rota pattern; member will resolve to off"
            );
        }

        let staff = StaffMember {
            id: Uuid::new_v4().to_string(),
            name: new_staff.name,
            designation: new_staff.designation,
            rota_pattern: pattern,
            anchor_date: new_staff.anchor_date,
            active: new_staff.active,
            avatar: new_staff.avatar,
        };
        info!(staff_id = %staff.id, name = %staff.name, "Added staff member");

        self.staff.push(staff);
        self.staff.last().expect("staff list is non-empty after push")
    }

    /// Replaces the stored record for `updated.id` in place.
    ///
    /// The id is the immutable key; every other field takes the new value.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::StaffNotFound`] if no member has that id.
    pub fn update_staff(&mut self, updated: StaffMember) -> RotaResult<()> {
        let slot = self
            .staff
            .iter_mut()
            .find(|staff| staff.id == updated.id)
            .ok_or_else(|| RotaError::StaffNotFound {
                id: updated.id.clone(),
            })?;
        info!(staff_id = %updated.id, "Updated staff member");
        *slot = updated;
        Ok(())
    }

    /// Removes a staff member and purges all overrides referencing them, so
    /// no orphan overrides remain. Returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::StaffNotFound`] if no member has that id.
    pub fn delete_staff(&mut self, id: &str) -> RotaResult<StaffMember> {
        let index = self
            .staff
            .iter()
            .position(|staff| staff.id == id)
            .ok_or_else(|| RotaError::StaffNotFound { id: id.to_string() })?;
        let removed = self.staff.remove(index);
        let purged = self.overrides.remove_staff(id);
        info!(staff_id = %id, purged_overrides = purged, "Deleted staff member");
        Ok(removed)
    }

    /// Sets the manual override for `(staff_id, date)`, replacing any
    /// existing override for that pair.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::StaffNotFound`] for an unknown staff id, so an
    /// override can never be created orphaned.
    pub fn set_override(
        &mut self,
        staff_id: &str,
        date: NaiveDate,
        status: DutyStatus,
    ) -> RotaResult<()> {
        if self.find_staff(staff_id).is_none() {
            warn!(staff_id = %staff_id, "Override rejected: unknown staff id");
            return Err(RotaError::StaffNotFound {
                id: staff_id.to_string(),
            });
        }
        self.overrides.upsert(staff_id, date, status);
        info!(staff_id = %staff_id, date = %date, status = %status, "Set override");
        Ok(())
    }

    /// All staff records, in insertion order.
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// The staff member with the given id, if any.
    pub fn find_staff(&self, id: &str) -> Option<&StaffMember> {
        self.staff.iter().find(|staff| staff.id == id)
    }

    /// The currently active staff, in roster order.
    pub fn active_staff(&self) -> impl Iterator<Item = &StaffMember> {
        self.staff.iter().filter(|staff| staff.active)
    }

    /// The override set, for handing to the resolution functions.
    pub fn overrides(&self) -> &OverrideSet {
        &self.overrides
    }

    /// Exports the roster as a serializable snapshot.
    pub fn to_snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            staff: self.staff.clone(),
            overrides: self.overrides.to_entries(),
        }
    }

    /// Rebuilds a roster from a snapshot. Duplicate override entries in the
    /// snapshot collapse to the last one, restoring the one-per-key
    /// invariant on load.
    pub fn from_snapshot(snapshot: RosterSnapshot) -> Self {
        Self {
            staff: snapshot.staff,
            overrides: snapshot.overrides.into_iter().collect(),
        }
    }
}
