//! Duty status model.

use serde::{Deserialize, Serialize};

/// The resolved duty state of a staff member on a single calendar date.
///
/// This is the sole output of rota resolution and the only value a manual
/// override may carry. The three states are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DutyStatus {
    /// Scheduled on-site and working.
    Duty,
    /// Off rotation (the off segment of the cycle, or any safe fallback).
    Off,
    /// On approved leave; only ever produced by a manual override.
    Leave,
}

impl DutyStatus {
    /// Returns true if the status is [`DutyStatus::Duty`].
    pub fn is_duty(self) -> bool {
        self == DutyStatus::Duty
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DutyStatus::Duty => write!(f, "duty"),
            DutyStatus::Off => write!(f, "off"),
            DutyStatus::Leave => write!(f, "leave"),
        }
    }
}
