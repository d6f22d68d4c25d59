//! Core data models for the Rota Resolution Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod date_range;
mod duty_status;
mod override_set;
mod rota_pattern;
mod staff;

pub use date_range::DateRange;
pub use duty_status::DutyStatus;
pub use override_set::{ManualOverride, OverrideSet};
pub use rota_pattern::RotaPattern;
pub use staff::StaffMember;
